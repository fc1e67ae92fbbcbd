//! Built-in demo backend, selected by `ApiConfig::use_mock_data`.
//!
//! Answers read endpoints from a small fixed dataset and rejects writes, so
//! the app can be shown without a running backend. Responses flow through the
//! same middleware as real ones.

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, Method, Transport};
use crate::middleware::bearer;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_TOKEN: &str = "demo-token";

#[derive(Clone, Copy, Debug, Default)]
pub struct DemoTransport;

fn demo_user() -> Value {
    json!({ "id": 1, "username": DEMO_USERNAME, "role": "admin", "is_active": true })
}

fn demo_materials() -> Value {
    json!([
        {
            "id": 1, "name": "Beef", "category": "Meat", "unit": "kg",
            "unit_price": 3000, "current_stock": 50, "minimum_stock": 10,
            "supplier": "Yamada Livestock", "last_updated": "2024-06-01T09:00:00"
        },
        {
            "id": 2, "name": "Onion", "category": "Vegetables", "unit": "kg",
            "unit_price": 200, "current_stock": 30, "minimum_stock": 5,
            "supplier": "Tanaka Farm", "last_updated": "2024-06-02T09:00:00"
        },
        {
            "id": 3, "name": "Rice", "category": "Grains", "unit": "kg",
            "unit_price": 500, "current_stock": 100, "minimum_stock": 20,
            "supplier": "Sato Rice Shop", "last_updated": "2024-06-03T09:00:00"
        }
    ])
}

fn demo_menus() -> Value {
    json!([
        { "id": 1, "name": "Beef Curry", "selling_price": 980, "last_updated": "2024-06-04T11:00:00" },
        { "id": 2, "name": "Onion Soup", "selling_price": 450, "last_updated": "2024-06-05T11:00:00" }
    ])
}

fn respond(status: u16, body: &Value) -> ApiResponse {
    ApiResponse { status, body: body.to_string() }
}

fn error(status: u16, message: &str) -> ApiResponse {
    respond(status, &json!({ "error": message }))
}

fn find_by_id(items: &Value, id: &str, missing: &str) -> ApiResponse {
    let found = id
        .parse::<i64>()
        .ok()
        .and_then(|id| items.as_array()?.iter().find(|item| item["id"].as_i64() == Some(id)));
    match found {
        Some(item) => respond(200, item),
        None => error(404, missing),
    }
}

fn limited(items: Value, request: &ApiRequest) -> Value {
    let limit = request
        .query
        .iter()
        .find(|(key, _)| key == "limit")
        .and_then(|(_, value)| value.parse::<usize>().ok());
    match (items, limit) {
        (Value::Array(list), Some(limit)) => Value::Array(list.into_iter().take(limit).collect()),
        (items, _) => items,
    }
}

fn login(request: &ApiRequest) -> ApiResponse {
    let credentials: Value = request
        .body
        .as_deref()
        .and_then(|body| serde_json::from_str(body).ok())
        .unwrap_or(Value::Null);
    if credentials["username"] == DEMO_USERNAME && credentials["password"] == DEMO_PASSWORD {
        return respond(200, &json!({ "access_token": DEMO_TOKEN, "token_type": "bearer", "user": demo_user() }));
    }
    error(401, "invalid credentials")
}

/// Route one request against the demo dataset.
#[must_use]
pub fn route(request: &ApiRequest) -> ApiResponse {
    let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
    if request.method == Method::Post && segments == ["auth", "login"] {
        return login(request);
    }
    if request.header(crate::http::AUTHORIZATION) != Some(bearer(DEMO_TOKEN).as_str()) {
        return error(401, "not authenticated");
    }
    if request.method != Method::Get {
        return error(403, "demo mode is read-only");
    }
    match segments.as_slice() {
        ["auth", "me"] => respond(200, &demo_user()),
        ["auth", "users"] => respond(200, &json!([demo_user()])),
        ["materials"] => respond(200, &limited(demo_materials(), request)),
        ["materials", id] => find_by_id(&demo_materials(), id, "material not found"),
        ["menus"] => respond(200, &limited(demo_menus(), request)),
        ["menus", id] => find_by_id(&demo_menus(), id, "menu not found"),
        _ => error(404, "not found"),
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for DemoTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        tracing::debug!(path = %request.path, "serving demo data");
        Ok(route(&request))
    }
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
