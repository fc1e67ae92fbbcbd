//! Menu endpoints, including material and recipe-step associations.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{ListQuery, Menu, MenuInput, MenuMaterialInput, RecipeStepInput};

pub const MENUS_PATH: &str = "/menus";

fn menu_path(menu_id: i64) -> String {
    format!("{MENUS_PATH}/{menu_id}")
}

fn menu_materials_path(menu_id: i64) -> String {
    format!("{MENUS_PATH}/{menu_id}/materials")
}

fn menu_material_path(menu_id: i64, material_id: i64) -> String {
    format!("{MENUS_PATH}/{menu_id}/materials/{material_id}")
}

fn menu_recipes_path(menu_id: i64) -> String {
    format!("{MENUS_PATH}/{menu_id}/recipes")
}

/// `GET /menus` with caller query parameters passed through.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn list_menus(client: &ApiClient, query: &ListQuery) -> Result<Vec<Menu>, ApiError> {
    client.get(MENUS_PATH, query).await
}

/// `GET /menus/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn get_menu(client: &ApiClient, menu_id: i64) -> Result<Menu, ApiError> {
    client.get(&menu_path(menu_id), &ListQuery::new()).await
}

/// `POST /menus`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn create_menu(client: &ApiClient, menu: &MenuInput) -> Result<Menu, ApiError> {
    client.post(MENUS_PATH, menu).await
}

/// `PUT /menus/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn update_menu(client: &ApiClient, menu_id: i64, menu: &MenuInput) -> Result<Menu, ApiError> {
    client.put(&menu_path(menu_id), menu).await
}

/// `DELETE /menus/:id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn delete_menu(client: &ApiClient, menu_id: i64) -> Result<(), ApiError> {
    client.delete(&menu_path(menu_id)).await
}

/// `POST /menus/:id/materials`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn add_menu_material(client: &ApiClient, menu_id: i64, material: &MenuMaterialInput) -> Result<(), ApiError> {
    client.post_discard(&menu_materials_path(menu_id), material).await
}

/// `DELETE /menus/:id/materials/:material_id`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn remove_menu_material(client: &ApiClient, menu_id: i64, material_id: i64) -> Result<(), ApiError> {
    client.delete(&menu_material_path(menu_id, material_id)).await
}

/// `POST /menus/:id/recipes`
///
/// # Errors
///
/// Propagates [`ApiError`] from the client stack.
pub async fn add_recipe_step(client: &ApiClient, menu_id: i64, step: &RecipeStepInput) -> Result<(), ApiError> {
    client.post_discard(&menu_recipes_path(menu_id), step).await
}

#[cfg(test)]
#[path = "menus_test.rs"]
mod tests;
