//! Request log repository: append plus paginated reads for the admin view.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::request_log::{self, ActiveModel};
use crate::domain::{NewRequestLog, RequestLog};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Request log repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// Append one request record.
    async fn create(&self, entry: NewRequestLog) -> AppResult<RequestLog>;

    /// One page of records, newest first, plus the total count.
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<RequestLog>, u64)>;
}

/// Concrete implementation of RequestLogRepository
pub struct RequestLogStore {
    db: DatabaseConnection,
}

impl RequestLogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestLogRepository for RequestLogStore {
    async fn create(&self, entry: NewRequestLog) -> AppResult<RequestLog> {
        let active_model = ActiveModel {
            method: Set(entry.method),
            path: Set(entry.path),
            query: Set(entry.query),
            status_code: Set(entry.status_code),
            succeeded: Set(entry.succeeded),
            error: Set(entry.error),
            latency_ms: Set(entry.latency_ms),
            client_ip: Set(entry.client_ip),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(RequestLog::from(model))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<RequestLog>, u64)> {
        let paginator = request_log::Entity::find()
            .order_by_desc(request_log::Column::CreatedAt)
            .order_by_desc(request_log::Column::Id)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(RequestLog::from).collect(), total))
    }
}
