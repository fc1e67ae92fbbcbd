use super::*;

#[test]
fn http_method_maps_every_verb() {
    assert_eq!(http_method(Method::Get), reqwest::Method::GET);
    assert_eq!(http_method(Method::Post), reqwest::Method::POST);
    assert_eq!(http_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(http_method(Method::Delete), reqwest::Method::DELETE);
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let transport = ReqwestTransport::new().unwrap();
    let config = api::ApiConfig { base_url: "http://127.0.0.1:9".to_owned(), timeout_secs: 2, use_mock_data: false };
    let hooks = api::Hooks {
        session: std::sync::Arc::new(api::MemorySessionStore::default()),
        notifier: std::sync::Arc::new(crate::notify::StderrNotifier),
        navigator: std::sync::Arc::new(crate::notify::LoginHint),
    };
    let client = api::ApiClient::new(&config, transport, hooks);
    let err = api::auth::current_user(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn prepared_request_carries_query_headers_and_body() {
    let transport = ReqwestTransport::new().unwrap();
    let request = ApiRequest {
        method: Method::Put,
        path: "/materials/3".to_owned(),
        url: "http://localhost:8000/api/v1/materials/3".to_owned(),
        query: vec![("search".to_owned(), "salt & pepper".to_owned()), ("limit".to_owned(), "5".to_owned())],
        headers: vec![
            (api::http::CONTENT_TYPE.to_owned(), api::http::JSON_CONTENT_TYPE.to_owned()),
            (api::http::AUTHORIZATION.to_owned(), "Bearer abc".to_owned()),
        ],
        body: Some(r#"{"name":"Salt"}"#.to_owned()),
        timeout: std::time::Duration::from_secs(7),
    };

    let built = transport.prepare(&request).build().unwrap();
    assert_eq!(built.method(), &reqwest::Method::PUT);
    assert_eq!(built.url().path(), "/api/v1/materials/3");
    assert_eq!(built.url().query(), Some("search=salt+%26+pepper&limit=5"));
    assert_eq!(built.headers().get("authorization").unwrap(), "Bearer abc");
    assert_eq!(built.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(built.body().and_then(reqwest::Body::as_bytes), Some(&br#"{"name":"Salt"}"#[..]));
    assert_eq!(built.timeout(), Some(&std::time::Duration::from_secs(7)));
}

#[test]
fn prepared_request_without_query_or_body() {
    let transport = ReqwestTransport::new().unwrap();
    let request = ApiRequest {
        method: Method::Get,
        path: "/auth/me".to_owned(),
        url: "http://localhost:8000/api/v1/auth/me".to_owned(),
        query: Vec::new(),
        headers: Vec::new(),
        body: None,
        timeout: std::time::Duration::from_secs(10),
    };

    let built = transport.prepare(&request).build().unwrap();
    assert_eq!(built.url().query(), None);
    assert!(built.headers().get("authorization").is_none());
    assert!(built.body().is_none());
}
