use std::sync::Arc;

use webui::error::{ErrorCode, RouteError};
use webui::router::{Evaluator, NavState, Navigation, RouterConfig, View, paths};
use webui::util::credentials::{DEFAULT_TOKEN_KEY, MemoryStore};

fn login_flow() -> (Arc<MemoryStore>, Evaluator) {
    let store = Arc::new(MemoryStore::new());
    let evaluator = Evaluator::new(&RouterConfig::default(), store.clone()).unwrap();
    (store, evaluator)
}

#[test]
fn signed_out_user_is_sent_to_login_then_allowed_after_sign_in() {
    let (store, evaluator) = login_flow();

    let denied = evaluator.resolve(paths::CONVERSATIONS).unwrap();
    assert_eq!(denied.state(), NavState::Redirected);
    let login = denied.redirect_to().unwrap();
    assert_eq!(evaluator.resolve(login).unwrap(), Navigation::Allowed { view: View::Login });

    store.set(DEFAULT_TOKEN_KEY, "abc123");
    assert_eq!(evaluator.resolve(paths::CONVERSATIONS).unwrap(), Navigation::Allowed { view: View::Conversations });
}

#[test]
fn home_is_reachable_without_token() {
    let (_store, evaluator) = login_flow();
    assert_eq!(evaluator.resolve(paths::HOME).unwrap(), Navigation::Allowed { view: View::Home });
}

#[test]
fn root_settles_on_login_page() {
    let (_store, evaluator) = login_flow();
    assert_eq!(evaluator.settle(paths::ROOT).unwrap(), (paths::LOGIN.to_owned(), View::Login));
}

#[test]
fn json_config_selects_legacy_table() {
    let config = RouterConfig::from_json(r#"{ "profile": "legacy" }"#).unwrap();
    let evaluator = Evaluator::new(&config, Arc::new(MemoryStore::new())).unwrap();

    assert_eq!(
        evaluator.resolve(paths::USERNAME).unwrap(),
        Navigation::Redirected { to: paths::ROOT.to_owned() }
    );
    assert_eq!(evaluator.settle(paths::USERNAME).unwrap(), (paths::ROOT.to_owned(), View::Login));
}

#[test]
fn unknown_path_reports_error_code() {
    let (_store, evaluator) = login_flow();
    let err = evaluator.resolve("/settings").unwrap_err();
    assert_eq!(err, RouteError::Unmatched("/settings".to_owned()));
    assert_eq!(err.error_code(), "E_ROUTE_UNMATCHED");
}

#[test]
fn custom_token_key_and_redirect_apply_to_every_guarded_route() {
    let config = RouterConfig::from_json(r#"{ "tokenKey": "session", "defaultRedirect": "/home" }"#).unwrap();
    let store = Arc::new(MemoryStore::with(DEFAULT_TOKEN_KEY, "ignored"));
    let evaluator = Evaluator::new(&config, store.clone()).unwrap();

    let guarded: Vec<String> =
        evaluator.table().entries().filter(|e| e.guarded).map(|e| e.path.clone()).collect();
    assert_eq!(guarded.len(), 5);
    for path in &guarded {
        assert_eq!(evaluator.resolve(path).unwrap().redirect_to(), Some(paths::HOME));
    }

    store.set("session", "xyz");
    for path in &guarded {
        assert!(evaluator.resolve(path).unwrap().is_allowed());
    }
}
