//! Token guard shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! so there is exactly one guard, parameterized by where denied navigations go.
//! Presence of a non-empty token is the whole check: no shape or expiry
//! validation happens client-side.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::util::credentials::{CredentialStore, token_present};

/// Result of running the guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenGuard {
    token_key: String,
    redirect_to: String,
}

impl TokenGuard {
    #[must_use]
    pub fn new(token_key: &str, redirect_to: &str) -> Self {
        Self { token_key: token_key.to_owned(), redirect_to: redirect_to.to_owned() }
    }

    #[must_use]
    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    /// Read the token for `path` and decide whether navigation may continue.
    pub fn check(&self, store: &dyn CredentialStore, path: &str) -> GuardOutcome {
        let token = store.get(&self.token_key);
        let present = token_present(token.as_deref());
        log::debug!("route guard check: path={path} token_present={present}");
        if present {
            GuardOutcome::Proceed
        } else {
            GuardOutcome::Redirect(self.redirect_to.clone())
        }
    }
}
