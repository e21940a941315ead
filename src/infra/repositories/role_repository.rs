//! Role repository: read-only access to the seeded roles table and the
//! user-to-role associations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::{role, user_role};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by exact name match.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Names of every role assigned to the given user, in id order.
    async fn find_names_for_user(&self, user_id: i64) -> AppResult<Vec<String>>;
}

/// Concrete implementation of RoleRepository
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let result = role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Role::from))
    }

    async fn find_names_for_user(&self, user_id: i64) -> AppResult<Vec<String>> {
        let role_ids: Vec<i64> = user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|assoc| assoc.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = role::Entity::find()
            .filter(role::Column::Id.is_in(role_ids))
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }
}
