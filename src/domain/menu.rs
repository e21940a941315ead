//! Menu domain entity.

use serde::Serialize;
use utoipa::ToSchema;

/// Navigation entry served to authenticated clients.
///
/// `parent_id` builds the tree client-side; `permission` is a hint for the
/// frontend and carries no authorization weight on the server.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Menu {
    /// Unique menu identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Parent entry, None for top-level items
    pub parent_id: Option<i64>,
    /// Display name
    #[schema(example = "Dashboard")]
    pub name: String,
    /// Frontend route path
    #[schema(example = "/dashboard")]
    pub path: String,
    /// Frontend permission hint
    #[schema(example = "dashboard:view")]
    pub permission: Option<String>,
    /// Icon identifier
    pub icon: Option<String>,
    /// Ascending display order
    pub sort_order: i32,
}
