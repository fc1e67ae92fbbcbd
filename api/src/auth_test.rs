use super::*;
use crate::http::Method;
use crate::test_support::{ScriptedTransport, sample_user, signed_in};
use crate::types::Role;

#[test]
fn user_path_formats_expected_path() {
    assert_eq!(user_path(42), "/auth/users/42");
}

#[tokio::test]
async fn list_users_hits_users_endpoint() {
    let h = signed_in(ScriptedTransport::default().respond(200, serde_json::json!([sample_user()])), "tok");
    let users = list_users(&h.client).await.unwrap();
    assert_eq!(users, vec![sample_user()]);
    let sent = h.transport.last();
    assert_eq!((sent.method, sent.path.as_str()), (Method::Get, "/auth/users"));
}

#[tokio::test]
async fn create_user_posts_payload() {
    let h = signed_in(ScriptedTransport::default().respond(201, serde_json::to_value(sample_user()).unwrap()), "tok");
    let new_user = NewUser { username: "store7".to_owned(), password: "pw".to_owned(), role: Role::StoreUser };
    create_user(&h.client, &new_user).await.unwrap();
    let sent = h.transport.last();
    assert_eq!((sent.method, sent.path.as_str()), (Method::Post, "/auth/users"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "store7", "password": "pw", "role": "store_user" }));
}

#[tokio::test]
async fn update_and_delete_user_target_user_path() {
    let h = signed_in(
        ScriptedTransport::default()
            .respond(200, serde_json::to_value(sample_user()).unwrap())
            .respond_raw(204, ""),
        "tok",
    );
    update_user(&h.client, 9, &UserUpdate { is_active: Some(false), ..UserUpdate::default() }).await.unwrap();
    delete_user(&h.client, 9).await.unwrap();

    let sent = h.transport.recorded();
    assert_eq!((sent[0].method, sent[0].path.as_str()), (Method::Put, "/auth/users/9"));
    assert_eq!((sent[1].method, sent[1].path.as_str()), (Method::Delete, "/auth/users/9"));
}

#[tokio::test]
async fn change_password_sends_snake_case_fields() {
    let h = signed_in(ScriptedTransport::default().respond(200, serde_json::json!({ "message": "ok" })), "tok");
    let ack = change_password(&h.client, "old", "new").await.unwrap();
    assert_eq!(ack, serde_json::json!({ "message": "ok" }));
    let sent = h.transport.last();
    assert_eq!(sent.path, "/auth/change-password");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "current_password": "old", "new_password": "new" }));
}

#[tokio::test]
async fn current_user_propagates_errors_untranslated() {
    let h = signed_in(ScriptedTransport::default().respond(403, serde_json::json!({ "error": "forbidden" })), "tok");
    let err = current_user(&h.client).await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 403, message: Some("forbidden".to_owned()) });
}
