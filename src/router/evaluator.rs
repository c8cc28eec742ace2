//! Navigation decisions over the route table.
//!
//! Each navigation starts `Pending` and ends `Allowed` (render a view) or
//! `Redirected` (reroute). Evaluation is synchronous and reads the credential
//! store at most once; nothing is written back.

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;

use std::sync::Arc;

use super::config::RouterConfig;
use super::guard::{GuardOutcome, TokenGuard};
use super::table::{RouteTable, RouteTarget, View};
use crate::error::{ConfigError, RouteError};
use crate::util::credentials::CredentialStore;

/// Upper bound on redirects followed by [`Evaluator::settle`].
pub const MAX_REDIRECTS: usize = 8;

/// A requested navigation. `from` is informational only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub to: String,
    pub from: Option<String>,
}

impl NavigationRequest {
    #[must_use]
    pub fn new(to: &str) -> Self {
        Self { to: to.to_owned(), from: None }
    }

    #[must_use]
    pub fn from_path(mut self, from: &str) -> Self {
        self.from = Some(from.to_owned());
        self
    }
}

/// Lifecycle of one navigation. `Pending` is never returned by the evaluator;
/// it is the UI gate's state before a decision has been made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Pending,
    Allowed,
    Redirected,
}

/// Terminal decision for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allowed { view: View },
    Redirected { to: String },
}

impl Navigation {
    #[must_use]
    pub fn state(&self) -> NavState {
        match self {
            Self::Allowed { .. } => NavState::Allowed,
            Self::Redirected { .. } => NavState::Redirected,
        }
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    #[must_use]
    pub fn view(&self) -> Option<View> {
        match self {
            Self::Allowed { view } => Some(*view),
            Self::Redirected { .. } => None,
        }
    }

    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Allowed { .. } => None,
            Self::Redirected { to } => Some(to),
        }
    }
}

/// Route table plus guard, bound to a credential store.
///
/// Cheap to clone; clones share the table and the store.
#[derive(Clone)]
pub struct Evaluator {
    table: Arc<RouteTable>,
    guard: TokenGuard,
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator").field("table", &self.table).field("guard", &self.guard).finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Build an evaluator for the config's profile table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config does not fit the table.
    pub fn new(config: &RouterConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ConfigError> {
        Self::with_table(config, config.profile.table(), store)
    }

    /// Evaluator for the current table with default token key and redirect.
    /// Used when integrator configuration is rejected.
    #[must_use]
    pub fn current(store: Arc<dyn CredentialStore>) -> Self {
        let config = RouterConfig::default();
        let guard = TokenGuard::new(&config.token_key, config.redirect_target());
        Self { table: Arc::new(RouteTable::current()), guard, store }
    }

    /// Build an evaluator over a caller-supplied table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config does not fit the table.
    pub fn with_table(
        config: &RouterConfig,
        table: RouteTable,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, ConfigError> {
        config.validate(&table)?;
        let guard = TokenGuard::new(&config.token_key, config.redirect_target());
        Ok(Self { table: Arc::new(table), guard, store })
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn guard(&self) -> &TokenGuard {
        &self.guard
    }

    /// Decide a single navigation step for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] when no entry has this exact path.
    pub fn resolve(&self, path: &str) -> Result<Navigation, RouteError> {
        self.resolve_request(&NavigationRequest::new(path))
    }

    /// Decide a single navigation step for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] when no entry has this exact path.
    pub fn resolve_request(&self, request: &NavigationRequest) -> Result<Navigation, RouteError> {
        let entry = self.table.lookup(&request.to).ok_or_else(|| RouteError::Unmatched(request.to.clone()))?;

        if entry.guarded {
            if let GuardOutcome::Redirect(to) = self.guard.check(self.store.as_ref(), &entry.path) {
                log::debug!(
                    "navigation denied: to={} from={} redirect={to}",
                    request.to,
                    request.from.as_deref().unwrap_or("-")
                );
                return Ok(Navigation::Redirected { to });
            }
        }

        Ok(match &entry.target {
            RouteTarget::View(view) => Navigation::Allowed { view: *view },
            RouteTarget::Redirect(to) => Navigation::Redirected { to: to.clone() },
        })
    }

    /// Follow redirects from `path` until a view is allowed.
    ///
    /// Returns the final path together with the view rendered there.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] for an unknown path anywhere in the
    /// chain and [`RouteError::RedirectLoop`] when a path repeats or the chain
    /// exceeds [`MAX_REDIRECTS`].
    pub fn settle(&self, path: &str) -> Result<(String, View), RouteError> {
        let mut visited: Vec<String> = Vec::new();
        let mut request = NavigationRequest::new(path);
        loop {
            match self.resolve_request(&request)? {
                Navigation::Allowed { view } => return Ok((request.to, view)),
                Navigation::Redirected { to } => {
                    visited.push(request.to.clone());
                    if visited.len() > MAX_REDIRECTS || visited.contains(&to) {
                        return Err(RouteError::RedirectLoop { path: to, hops: visited.len() });
                    }
                    request = NavigationRequest::new(&to).from_path(&request.to);
                }
            }
        }
    }
}
