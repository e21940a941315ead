//! Menu repository: read-only access to the seeded menus table.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::menu;
use crate::domain::Menu;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Menu repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every menu entry, ordered by `sort_order` then id.
    async fn list(&self) -> AppResult<Vec<Menu>>;
}

/// Concrete implementation of MenuRepository
pub struct MenuStore {
    db: DatabaseConnection,
}

impl MenuStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuRepository for MenuStore {
    async fn list(&self) -> AppResult<Vec<Menu>> {
        let models = menu::Entity::find()
            .order_by_asc(menu::Column::SortOrder)
            .order_by_asc(menu::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Menu::from).collect())
    }
}
