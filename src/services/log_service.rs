//! Request log service - records handled requests and lists them for admins.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewRequestLog, RequestLog};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Request log service trait for dependency injection.
#[async_trait]
pub trait LogService: Send + Sync {
    /// Persist one request log entry
    async fn record(&self, entry: NewRequestLog) -> AppResult<RequestLog>;

    /// List request logs newest first
    async fn list(&self, pagination: PaginationParams) -> AppResult<Paginated<RequestLog>>;
}

/// Concrete implementation of LogService using Unit of Work.
pub struct LogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LogManager<U> {
    /// Create new log service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LogService for LogManager<U> {
    async fn record(&self, entry: NewRequestLog) -> AppResult<RequestLog> {
        self.uow.request_logs().create(entry).await
    }

    async fn list(&self, pagination: PaginationParams) -> AppResult<Paginated<RequestLog>> {
        let (items, total) = self.uow.request_logs().list(&pagination).await?;
        Ok(Paginated::new(
            items,
            pagination.page,
            pagination.limit(),
            total,
        ))
    }
}
