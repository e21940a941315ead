//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and transaction lifecycle. The one
//! multi-write workflow in this application is registration (user row plus
//! default-role association), which must commit or roll back as a unit.

use async_trait::async_trait;
use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait};
use std::sync::Arc;

use super::repositories::{
    MenuRepository, MenuStore, RequestLogRepository, RequestLogStore, RoleRepository, RoleStore,
    UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the repositories it hands out, or run the transaction
/// against a `sea_orm::MockDatabase`.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get role repository
    fn roles(&self) -> Arc<dyn RoleRepository>;

    /// Get menu repository
    fn menus(&self) -> Arc<dyn MenuRepository>;

    /// Get request log repository
    fn request_logs(&self) -> Arc<dyn RequestLogRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    /// Uses ReadCommitted isolation; uniqueness is enforced by the
    /// database constraint, not by the isolation level.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction. The context borrows the transaction
/// to ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }

    /// Get user-role association repository for this transaction
    pub fn user_roles(&self) -> TxUserRoleRepository<'_> {
        TxUserRoleRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    role_repo: Arc<RoleStore>,
    menu_repo: Arc<MenuStore>,
    request_log_repo: Arc<RequestLogStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let role_repo = Arc::new(RoleStore::new(db.clone()));
        let menu_repo = Arc::new(MenuStore::new(db.clone()));
        let request_log_repo = Arc::new(RequestLogStore::new(db.clone()));
        Self {
            db,
            user_repo,
            role_repo,
            menu_repo,
            request_log_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.role_repo.clone()
    }

    fn menus(&self) -> Arc<dyn MenuRepository> {
        self.menu_repo.clone()
    }

    fn request_logs(&self) -> Arc<dyn RequestLogRepository> {
        self.request_log_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
///
/// Executes all operations within the provided transaction.
/// Uses borrowed reference to ensure transaction outlives repository operations.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a new user in NORMAL standing.
    ///
    /// The unique index on usernames is the authoritative duplicate check;
    /// a violation here comes back as a conflict, which is how a
    /// registration that loses a concurrent race reports itself.
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
    ) -> AppResult<crate::domain::User> {
        use super::repositories::entities::user::ActiveModel;
        use crate::domain::UserStatus;
        use sea_orm::{ActiveModelTrait, Set};

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            status: Set(UserStatus::Normal.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await.map_err(|e| {
            match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("username already registered")
                }
                _ => AppError::from(e),
            }
        })?;

        Ok(crate::domain::User::from(model))
    }
}

/// Transaction-aware user-role association repository.
pub struct TxUserRoleRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRoleRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Associate a user with a role.
    pub async fn create(&self, user_id: i64, role_id: i64) -> AppResult<()> {
        use super::repositories::entities::user_role::ActiveModel;
        use sea_orm::{ActiveModelTrait, Set};

        let active_model = ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        active_model.insert(self.txn).await.map_err(AppError::from)?;
        Ok(())
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
