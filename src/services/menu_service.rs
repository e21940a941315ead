//! Menu service - navigation menu listing for authenticated users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Menu;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Menu service trait for dependency injection.
#[async_trait]
pub trait MenuService: Send + Sync {
    /// List all menu entries in display order
    async fn list(&self) -> AppResult<Vec<Menu>>;
}

/// Concrete implementation of MenuService using Unit of Work.
pub struct MenuManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MenuManager<U> {
    /// Create new menu service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MenuService for MenuManager<U> {
    async fn list(&self) -> AppResult<Vec<Menu>> {
        self.uow.menus().list().await
    }
}
