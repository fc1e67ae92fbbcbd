//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Records mirror backend JSON. Optional and late-added fields default when
//! absent so older and newer backends both decode; validation stays
//! server-side.

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Account role. Gates UI visibility only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    HeadOffice,
    StoreUser,
    /// A role string this client does not know; preserved verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::HeadOffice => "head_office",
            Self::StoreUser => "store_user",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable role name for menus and badges.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Admin => "Administrator",
            Self::HeadOffice => "Head Office",
            Self::StoreUser => "Store",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "admin" => Self::Admin,
            "head_office" => Self::HeadOffice,
            "store_user" => Self::StoreUser,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /auth/login`.
///
/// Some backends omit `user`; callers then fetch it from `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

// =============================================================================
// MATERIALS
// =============================================================================

/// An inventory ingredient with cost and stock levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub unit: String,
    #[serde(alias = "cost_per_unit")]
    pub unit_price: f64,
    #[serde(default)]
    pub current_stock: f64,
    #[serde(default)]
    pub minimum_stock: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub unit_price: f64,
    pub current_stock: f64,
    pub minimum_stock: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

// =============================================================================
// MENUS
// =============================================================================

/// A sellable menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub selling_price: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub materials: Vec<MenuMaterial>,
    #[serde(default)]
    pub recipes: Vec<RecipeStep>,
}

/// A material used by a menu, with the quantity per serving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuMaterial {
    pub material_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub step_number: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuInput {
    pub name: String,
    pub selling_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuMaterialInput {
    pub material_id: i64,
    pub quantity: f64,
}

pub type RecipeStepInput = RecipeStep;

// =============================================================================
// QUERY
// =============================================================================

/// Caller-supplied query parameters, forwarded verbatim and in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `key=value` pair.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ListQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |query, (k, v)| query.with(k, v))
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
