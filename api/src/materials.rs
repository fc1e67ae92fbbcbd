//! Material (ingredient) endpoints.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{ListQuery, Material, MaterialInput};

pub const MATERIALS_PATH: &str = "/materials";

fn material_path(material_id: i64) -> String {
    format!("{MATERIALS_PATH}/{material_id}")
}

/// `GET /materials` with caller query parameters passed through.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn list_materials(client: &ApiClient, query: &ListQuery) -> Result<Vec<Material>, ApiError> {
    client.get(MATERIALS_PATH, query).await
}

/// `GET /materials/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn get_material(client: &ApiClient, material_id: i64) -> Result<Material, ApiError> {
    client.get(&material_path(material_id), &ListQuery::new()).await
}

/// `POST /materials`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn create_material(client: &ApiClient, material: &MaterialInput) -> Result<Material, ApiError> {
    client.post(MATERIALS_PATH, material).await
}

/// `PUT /materials/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn update_material(client: &ApiClient, material_id: i64, material: &MaterialInput) -> Result<Material, ApiError> {
    client.put(&material_path(material_id), material).await
}

/// `DELETE /materials/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn delete_material(client: &ApiClient, material_id: i64) -> Result<(), ApiError> {
    client.delete(&material_path(material_id)).await
}

#[cfg(test)]
#[path = "materials_test.rs"]
mod tests;
