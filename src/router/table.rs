//! Declarative route table.
//!
//! DESIGN
//! ======
//! Each entry carries a `guarded` flag instead of its own guard closure; the
//! evaluator applies one shared token guard to every flagged entry. Lookup is
//! an exact string match and the first matching entry wins.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use crate::error::ConfigError;

/// Literal route paths known to the application.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const HOME: &str = "/home";
    pub const USERNAME: &str = "/users/me/username";
    pub const PHOTO: &str = "/users/me/photo";
    pub const CONVERSATIONS: &str = "/conversations";
    pub const SEND_MESSAGE_FIRST: &str = "/sendMessageFirstView";
    pub const CREATE_GROUP: &str = "/createGroupView";
}

/// Page selected by a successful navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Home,
    Username,
    Photo,
    Conversations,
    SendMessageFirst,
    CreateGroup,
}

/// What an entry does once navigation to it is permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    /// Unconditional reroute to another path.
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
    pub guarded: bool,
}

impl RouteEntry {
    #[must_use]
    pub fn open(path: &str, view: View) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::View(view), guarded: false }
    }

    #[must_use]
    pub fn guarded(path: &str, view: View) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::View(view), guarded: true }
    }

    #[must_use]
    pub fn redirect(path: &str, to: &str) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::Redirect(to.to_owned()), guarded: false }
    }
}

/// Validated, ordered set of route entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting relative or duplicate paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] or [`ConfigError::DuplicatePath`].
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(ConfigError::InvalidPath(entry.path.clone()));
            }
            if let RouteTarget::Redirect(to) = &entry.target {
                if !to.starts_with('/') {
                    return Err(ConfigError::InvalidPath(to.clone()));
                }
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(ConfigError::DuplicatePath(entry.path.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Table of the chat client: `/` forwards to `/login` and every profile
    /// and messaging page is guarded.
    #[must_use]
    pub fn current() -> Self {
        Self {
            entries: vec![
                RouteEntry::redirect(paths::ROOT, paths::LOGIN),
                RouteEntry::open(paths::LOGIN, View::Login),
                RouteEntry::open(paths::HOME, View::Home),
                RouteEntry::guarded(paths::USERNAME, View::Username),
                RouteEntry::guarded(paths::PHOTO, View::Photo),
                RouteEntry::guarded(paths::CONVERSATIONS, View::Conversations),
                RouteEntry::guarded(paths::SEND_MESSAGE_FIRST, View::SendMessageFirst),
                RouteEntry::guarded(paths::CREATE_GROUP, View::CreateGroup),
            ],
        }
    }

    /// Earlier table where `/` is the login page itself.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            entries: vec![
                RouteEntry::open(paths::HOME, View::Home),
                RouteEntry::open(paths::ROOT, View::Login),
                RouteEntry::guarded(paths::USERNAME, View::Username),
            ],
        }
    }

    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
