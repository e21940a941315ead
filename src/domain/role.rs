//! Role domain entities.

use chrono::{DateTime, Utc};

/// Named grouping of capabilities, referenced by authorization checks.
///
/// Rows are seeded by migration; the application only reads them.
#[derive(Debug, Clone)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The role granted to every new registration.
///
/// Resolved once at startup from the configured role name, so the rest of
/// the application works with a known-good id instead of a magic number.
#[derive(Debug, Clone)]
pub struct DefaultRole {
    pub id: i64,
    pub name: String,
}

impl From<Role> for DefaultRole {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
        }
    }
}
