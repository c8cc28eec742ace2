use super::*;
use crate::util::credentials::{DEFAULT_TOKEN_KEY, MemoryStore};

#[test]
fn proceeds_when_token_present() {
    let guard = TokenGuard::new(DEFAULT_TOKEN_KEY, "/login");
    let store = MemoryStore::with(DEFAULT_TOKEN_KEY, "abc123");
    assert_eq!(guard.check(&store, "/conversations"), GuardOutcome::Proceed);
}

#[test]
fn redirects_when_token_missing() {
    let guard = TokenGuard::new(DEFAULT_TOKEN_KEY, "/login");
    let store = MemoryStore::new();
    assert_eq!(guard.check(&store, "/conversations"), GuardOutcome::Redirect("/login".to_owned()));
}

#[test]
fn redirects_when_token_empty() {
    let guard = TokenGuard::new(DEFAULT_TOKEN_KEY, "/");
    let store = MemoryStore::with(DEFAULT_TOKEN_KEY, "");
    assert_eq!(guard.check(&store, "/users/me/username"), GuardOutcome::Redirect("/".to_owned()));
}

#[test]
fn reads_configured_key_only() {
    let guard = TokenGuard::new("session", "/login");
    let store = MemoryStore::with(DEFAULT_TOKEN_KEY, "abc123");
    assert_eq!(guard.check(&store, "/users/me/photo"), GuardOutcome::Redirect("/login".to_owned()));

    store.set("session", "xyz");
    assert_eq!(guard.check(&store, "/users/me/photo"), GuardOutcome::Proceed);
}

#[test]
fn check_does_not_mutate_store() {
    let guard = TokenGuard::new(DEFAULT_TOKEN_KEY, "/login");
    let store = MemoryStore::with(DEFAULT_TOKEN_KEY, "abc123");
    let _ = guard.check(&store, "/conversations");
    let _ = guard.check(&store, "/conversations");
    assert_eq!(store.get(DEFAULT_TOKEN_KEY).as_deref(), Some("abc123"));
}
