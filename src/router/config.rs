//! Integrator configuration for the route evaluator.
//!
//! The two shipped tables disagree on where unauthenticated users land (`/`
//! versus `/login`), so the redirect target is a parameter rather than a
//! constant. Browser builds have no process environment; values are taken
//! from build-time variables or from a JSON document.
//!
//! - `WEBUI_ROUTE_PROFILE`: `current` (default) or `legacy`
//! - `WEBUI_TOKEN_KEY`: default `authToken`
//! - `WEBUI_DEFAULT_REDIRECT`: default depends on the profile

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use super::table::{RouteTable, paths};
use crate::error::ConfigError;
use crate::util::credentials::DEFAULT_TOKEN_KEY;

/// Which route table the application ships with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteProfile {
    #[default]
    Current,
    Legacy,
}

impl RouteProfile {
    #[must_use]
    pub fn table(self) -> RouteTable {
        match self {
            Self::Current => RouteTable::current(),
            Self::Legacy => RouteTable::legacy(),
        }
    }

    /// Where denied navigations go when the integrator does not say.
    #[must_use]
    pub fn default_redirect(self) -> &'static str {
        match self {
            Self::Current => paths::LOGIN,
            Self::Legacy => paths::ROOT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouterConfig {
    pub profile: RouteProfile,
    pub token_key: String,
    pub default_redirect: Option<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { profile: RouteProfile::Current, token_key: DEFAULT_TOKEN_KEY.to_owned(), default_redirect: None }
    }
}

impl RouterConfig {
    #[must_use]
    pub fn legacy() -> Self {
        Self { profile: RouteProfile::Legacy, ..Self::default() }
    }

    /// Parse a JSON config; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read build-time variables baked into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] for an unrecognized profile name.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("WEBUI_ROUTE_PROFILE"),
            option_env!("WEBUI_TOKEN_KEY"),
            option_env!("WEBUI_DEFAULT_REDIRECT"),
        )
    }

    fn from_values(
        profile: Option<&str>,
        token_key: Option<&str>,
        default_redirect: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            profile: parse_profile(profile)?,
            token_key: token_key.unwrap_or(DEFAULT_TOKEN_KEY).to_owned(),
            default_redirect: default_redirect.map(str::to_owned),
        })
    }

    /// Effective redirect target for denied navigations.
    #[must_use]
    pub fn redirect_target(&self) -> &str {
        self.default_redirect.as_deref().unwrap_or_else(|| self.profile.default_redirect())
    }

    /// Check this config against `table`.
    ///
    /// The redirect target must be an unguarded entry of the table, otherwise
    /// a denied navigation would be denied again at its destination.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self, table: &RouteTable) -> Result<(), ConfigError> {
        if self.token_key.is_empty() {
            return Err(ConfigError::EmptyTokenKey);
        }
        let target = self.redirect_target();
        if !target.starts_with('/') {
            return Err(ConfigError::InvalidPath(target.to_owned()));
        }
        match table.lookup(target) {
            None => Err(ConfigError::RedirectTargetMissing(target.to_owned())),
            Some(entry) if entry.guarded => Err(ConfigError::RedirectTargetGuarded(target.to_owned())),
            Some(_) => Ok(()),
        }
    }
}

fn parse_profile(raw: Option<&str>) -> Result<RouteProfile, ConfigError> {
    match raw.unwrap_or("current").trim().to_ascii_lowercase().as_str() {
        "current" | "" => Ok(RouteProfile::Current),
        "legacy" => Ok(RouteProfile::Legacy),
        other => Err(ConfigError::UnknownProfile(other.to_owned())),
    }
}
