//! Native `Transport` over `reqwest`.

use api::{ApiError, ApiRequest, ApiResponse, Method, Transport};

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self { http: reqwest::Client::builder().build()? })
    }

    /// Method, URL, query pairs in caller order, headers, body and timeout.
    fn prepare(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(http_method(request.method), &request.url).timeout(request.timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        builder
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response =
            self.prepare(&request).send().await.map_err(|e| ApiError::Transport(describe(&e, request.timeout)))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(describe(&e, request.timeout)))?;
        tracing::debug!(%status, path = %request.path, "response received");
        Ok(ApiResponse { status, body })
    }
}

pub fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn describe(err: &reqwest::Error, timeout: std::time::Duration) -> String {
    if err.is_timeout() {
        format!("timeout of {}ms exceeded", timeout.as_millis())
    } else {
        err.to_string()
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
