//! Browser `Transport` backed by `gloo-net` (`window.fetch`).
//!
//! Client-side (csr): real HTTP calls raced against a timer for the request
//! timeout. Native builds (tests, tooling): a stub that reports a transport
//! failure, since there is no `fetch` to call.

#![allow(clippy::unused_async)]

use api::{ApiError, ApiRequest, ApiResponse, Transport};

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(any(test, feature = "csr"))]
fn timeout_message(timeout: std::time::Duration) -> String {
    format!("timeout of {}ms exceeded", timeout.as_millis())
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::{Method as HttpMethod, RequestBuilder};

            let method = match request.method {
                api::Method::Get => HttpMethod::GET,
                api::Method::Post => HttpMethod::POST,
                api::Method::Put => HttpMethod::PUT,
                api::Method::Delete => HttpMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let pending = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let send = Box::pin(pending.send());
            let timer = Box::pin(gloo_timers::future::sleep(request.timeout));
            let response = match select(send, timer).await {
                Either::Left((result, _)) => result.map_err(|e| ApiError::Transport(e.to_string()))?,
                Either::Right(_) => return Err(ApiError::Transport(timeout_message(request.timeout))),
            };
            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("fetch is only available in the browser".to_owned()))
        }
    }
}
