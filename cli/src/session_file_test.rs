use super::*;
use api::Role;

fn user() -> User {
    User { id: 1, username: "admin".to_owned(), role: Role::Admin, is_active: Some(true), created_at: None }
}

#[test]
fn missing_file_means_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
    store.clear();
}

#[test]
fn save_then_read_back_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.save(&StoredSession { token: "abc".to_owned(), user: Some(user()) });

    let reopened = FileSessionStore::new(store.path());
    assert_eq!(reopened.token().as_deref(), Some("abc"));
    assert_eq!(reopened.user(), Some(user()));

    reopened.clear();
    assert!(!store.path().exists());
    assert_eq!(store.token(), None);
}

#[test]
fn malformed_or_empty_token_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(FileSessionStore::new(&path).token(), None);

    std::fs::write(&path, r#"{"token":""}"#).unwrap();
    assert_eq!(FileSessionStore::new(&path).token(), None);
}
