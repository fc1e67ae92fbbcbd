use super::*;
use crate::error::GENERIC_ERROR_MESSAGE;
use crate::test_support::{ScriptedTransport, harness, signed_in};
use crate::types::ListQuery;

// =============================================================
// AuthLayer
// =============================================================

#[tokio::test]
async fn attaches_bearer_token_when_session_present() {
    let h = signed_in(ScriptedTransport::default(), "tok-123");
    let _: Vec<serde_json::Value> = h.client.get("/materials", &ListQuery::new()).await.unwrap();
    let _: Vec<serde_json::Value> = h.client.get("/menus", &ListQuery::new()).await.unwrap();
    for request in h.transport.recorded() {
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer tok-123"));
    }
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let h = harness(ScriptedTransport::default());
    let _: Vec<serde_json::Value> = h.client.get("/materials", &ListQuery::new()).await.unwrap();
    assert_eq!(h.transport.last().header(AUTHORIZATION), None);
}

#[tokio::test]
async fn picks_up_token_saved_after_client_creation() {
    let h = harness(ScriptedTransport::default());
    h.session.save(&crate::session::StoredSession { token: "late".to_owned(), user: None });
    let _: Vec<serde_json::Value> = h.client.get("/menus", &ListQuery::new()).await.unwrap();
    assert_eq!(h.transport.last().header(AUTHORIZATION), Some("Bearer late"));
}

// =============================================================
// ErrorLayer
// =============================================================

#[tokio::test]
async fn unauthorized_clears_session_and_redirects() {
    let h = signed_in(ScriptedTransport::default().respond(401, serde_json::json!({ "error": "expired" })), "tok");
    let err = h.client.get::<serde_json::Value>("/auth/me", &ListQuery::new()).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized { message: Some("expired".to_owned()) });
    assert_eq!(h.session.token(), None);
    assert_eq!(h.session.user(), None);
    assert_eq!(h.navigator.count(), 1);
    assert_eq!(h.notifier.messages(), vec![SESSION_EXPIRED_MESSAGE.to_owned()]);
}

#[tokio::test]
async fn unauthorized_without_body_still_clears_session() {
    let h = signed_in(ScriptedTransport::default().respond_raw(401, ""), "tok");
    let _ = h.client.delete("/menus/1").await;
    assert_eq!(h.session.token(), None);
    assert_eq!(h.navigator.count(), 1);
}

#[tokio::test]
async fn server_message_is_surfaced_verbatim() {
    let h = signed_in(
        ScriptedTransport::default().respond(400, serde_json::json!({ "error": "unit price must be positive" })),
        "tok",
    );
    let err = h.client.post::<_, serde_json::Value>("/materials", &serde_json::json!({})).await.unwrap_err();

    assert_eq!(err, ApiError::Server { status: 400, message: Some("unit price must be positive".to_owned()) });
    assert_eq!(h.notifier.messages(), vec!["unit price must be positive".to_owned()]);
    assert_eq!(h.session.token().as_deref(), Some("tok"));
    assert_eq!(h.navigator.count(), 0);
}

#[tokio::test]
async fn bodiless_error_surfaces_generic_message() {
    let h = harness(ScriptedTransport::default().respond_raw(500, ""));
    let err = h.client.get::<serde_json::Value>("/menus", &ListQuery::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 500, message: None });
    assert_eq!(h.notifier.messages(), vec![GENERIC_ERROR_MESSAGE.to_owned()]);
}

#[tokio::test]
async fn transport_failure_surfaces_network_message() {
    let h = harness(ScriptedTransport::default().fail("timeout of 10000ms exceeded"));
    let err = h.client.get::<serde_json::Value>("/menus", &ListQuery::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Transport("timeout of 10000ms exceeded".to_owned()));
    assert_eq!(h.notifier.messages(), vec!["Network error: timeout of 10000ms exceeded".to_owned()]);
}

#[tokio::test]
async fn success_passes_through_without_notice() {
    let h = harness(ScriptedTransport::default().respond(200, serde_json::json!([1, 2])));
    let rows: Vec<i64> = h.client.get("/materials", &ListQuery::new()).await.unwrap();
    assert_eq!(rows, vec![1, 2]);
    assert!(h.notifier.messages().is_empty());
}

#[test]
fn server_message_reads_error_field_only() {
    assert_eq!(server_message(r#"{"error":"boom"}"#), Some("boom".to_owned()));
    assert_eq!(server_message(r#"{"detail":"boom"}"#), None);
    assert_eq!(server_message(r#"{"error":""}"#), None);
    assert_eq!(server_message("<html>"), None);
}

#[test]
fn notice_constructors_set_level() {
    assert_eq!(Notice::success("a").level, NoticeLevel::Success);
    assert_eq!(Notice::info("b").level, NoticeLevel::Info);
    assert_eq!(Notice::error("c").level, NoticeLevel::Error);
}
