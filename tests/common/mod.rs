//! Shared fixtures for the service test suites.
//!
//! `TestUnitOfWork` adapts the repository mocks to the `UnitOfWork` trait so
//! services run against scripted repositories. Its `transaction` method
//! always fails: a test that reaches it is asserting that no transactional
//! write should have happened.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use admin_starter::config::Config;
use admin_starter::domain::{HashCost, Password, User, UserStatus};
use admin_starter::errors::{AppError, AppResult};
use admin_starter::infra::{
    MenuRepository, MockMenuRepository, MockRequestLogRepository, MockRoleRepository,
    MockUserRepository, RequestLogRepository, RoleRepository, TransactionContext, UnitOfWork,
    UserRepository,
};

/// Unit of Work backed by mockall repositories.
pub struct TestUnitOfWork {
    pub users: Arc<MockUserRepository>,
    pub roles: Arc<MockRoleRepository>,
    pub menus: Arc<MockMenuRepository>,
    pub request_logs: Arc<MockRequestLogRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            roles: Arc::new(MockRoleRepository::new()),
            menus: Arc::new(MockMenuRepository::new()),
            request_logs: Arc::new(MockRequestLogRepository::new()),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.roles.clone()
    }

    fn menus(&self) -> Arc<dyn MenuRepository> {
        self.menus.clone()
    }

    fn request_logs(&self) -> Arc<dyn RequestLogRepository> {
        self.request_logs.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("no transactional write expected here"))
    }
}

/// Configuration with cheap hash parameters and a pinned token lifetime.
pub fn test_config() -> Config {
    let mut config = Config::from_env();
    config.jwt_expiration_hours = 2;
    config.hash_memory_kib = 1024;
    config.hash_iterations = 1;
    config.hash_parallelism = 1;
    config
}

/// Small Argon2 cost so hashing fixtures stays fast.
pub fn test_cost() -> HashCost {
    HashCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

/// A stored user whose credential is the real hash of `password`.
pub fn stored_user(id: i64, username: &str, password: &str, status: UserStatus) -> User {
    let now = Utc::now();
    User {
        id,
        username: username.to_string(),
        password_hash: Password::new(password, &test_cost())
            .expect("hashing test fixture")
            .into_string(),
        status,
        created_at: now,
        updated_at: now,
    }
}
