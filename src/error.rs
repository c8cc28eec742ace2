//! Error types for route resolution and router configuration.
//!
//! ERROR HANDLING
//! ==============
//! A missing credential is a normal redirect, not an error. Errors here cover
//! paths the table does not know, redirect chains that never settle, and
//! configuration that would make the guard unusable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Stable machine-readable code for an error variant.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path: {0}")]
    Unmatched(String),
    #[error("redirect loop at {path} after {hops} hops")]
    RedirectLoop { path: String, hops: usize },
}

impl ErrorCode for RouteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unmatched(_) => "E_ROUTE_UNMATCHED",
            Self::RedirectLoop { .. } => "E_ROUTE_REDIRECT_LOOP",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("token key must not be empty")]
    EmptyTokenKey,
    #[error("unknown route profile: {0}")]
    UnknownProfile(String),
    #[error("default redirect {0} does not name a route")]
    RedirectTargetMissing(String),
    #[error("default redirect {0} is itself guarded")]
    RedirectTargetGuarded(String),
    #[error("invalid router config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "E_CONFIG_INVALID_PATH",
            Self::DuplicatePath(_) => "E_CONFIG_DUPLICATE_PATH",
            Self::EmptyTokenKey => "E_CONFIG_EMPTY_TOKEN_KEY",
            Self::UnknownProfile(_) => "E_CONFIG_UNKNOWN_PROFILE",
            Self::RedirectTargetMissing(_) => "E_CONFIG_REDIRECT_MISSING",
            Self::RedirectTargetGuarded(_) => "E_CONFIG_REDIRECT_GUARDED",
            Self::Json(_) => "E_CONFIG_JSON",
        }
    }
}
