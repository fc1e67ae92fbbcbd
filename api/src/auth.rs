//! Authentication and user-administration endpoints.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{ListQuery, LoginRequest, LoginResponse, NewUser, PasswordChange, User, UserUpdate};

pub const LOGIN_PATH: &str = "/auth/login";
pub const ME_PATH: &str = "/auth/me";
pub const USERS_PATH: &str = "/auth/users";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";

fn user_path(user_id: i64) -> String {
    format!("{USERS_PATH}/{user_id}")
}

/// `POST /auth/login`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post(LOGIN_PATH, credentials).await
}

/// `GET /auth/me`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.get(ME_PATH, &ListQuery::new()).await
}

/// `GET /auth/users` (administrators only).
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn list_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get(USERS_PATH, &ListQuery::new()).await
}

/// `POST /auth/users` (administrators only).
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn create_user(client: &ApiClient, user: &NewUser) -> Result<User, ApiError> {
    client.post(USERS_PATH, user).await
}

/// `PUT /auth/users/:id` (administrators only).
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn update_user(client: &ApiClient, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
    client.put(&user_path(user_id), update).await
}

/// `DELETE /auth/users/:id` (administrators only).
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn delete_user(client: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    client.delete(&user_path(user_id)).await
}

/// `POST /auth/change-password`
///
/// Returns the server's acknowledgement body unchanged.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn change_password(
    client: &ApiClient,
    current_password: &str,
    new_password: &str,
) -> Result<serde_json::Value, ApiError> {
    let body = PasswordChange { current_password: current_password.to_owned(), new_password: new_password.to_owned() };
    client.post(CHANGE_PASSWORD_PATH, &body).await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
