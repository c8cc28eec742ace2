use super::*;

#[test]
fn current_table_guards_profile_and_messaging_pages() {
    let table = RouteTable::current();
    let guarded: Vec<&str> = table.entries().filter(|e| e.guarded).map(|e| e.path.as_str()).collect();
    assert_eq!(
        guarded,
        vec![
            paths::USERNAME,
            paths::PHOTO,
            paths::CONVERSATIONS,
            paths::SEND_MESSAGE_FIRST,
            paths::CREATE_GROUP,
        ]
    );
}

#[test]
fn current_table_root_redirects_to_login() {
    let table = RouteTable::current();
    let root = table.lookup(paths::ROOT).unwrap();
    assert_eq!(root.target, RouteTarget::Redirect(paths::LOGIN.to_owned()));
    assert!(!root.guarded);
}

#[test]
fn legacy_table_root_is_login_page() {
    let table = RouteTable::legacy();
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup(paths::ROOT).unwrap().target, RouteTarget::View(View::Login));
    assert!(table.lookup(paths::LOGIN).is_none());
}

#[test]
fn lookup_is_exact_match_only() {
    let table = RouteTable::current();
    assert!(table.lookup("/users/me").is_none());
    assert!(table.lookup("/home/").is_none());
    assert!(table.lookup("/Home").is_none());
}

#[test]
fn new_rejects_duplicate_paths() {
    let err = RouteTable::new(vec![
        RouteEntry::open("/home", View::Home),
        RouteEntry::guarded("/home", View::Username),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicatePath(p) if p == "/home"));
}

#[test]
fn new_rejects_relative_paths_and_redirect_targets() {
    let err = RouteTable::new(vec![RouteEntry::open("home", View::Home)]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath(p) if p == "home"));

    let err = RouteTable::new(vec![RouteEntry::redirect("/", "login")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath(p) if p == "login"));
}

#[test]
fn shipped_tables_pass_validation() {
    let current: Vec<RouteEntry> = RouteTable::current().entries().cloned().collect();
    let legacy: Vec<RouteEntry> = RouteTable::legacy().entries().cloned().collect();
    assert_eq!(RouteTable::new(current).unwrap(), RouteTable::current());
    assert_eq!(RouteTable::new(legacy).unwrap(), RouteTable::legacy());
}
