//! Infrastructure layer - External systems integration
//!
//! Database access (SeaORM repositories plus the unit of work that owns
//! the registration transaction) and the Redis-backed rate limit counters.

pub mod cache;
pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use repositories::{
    MenuRepository, MenuStore, RequestLogRepository, RequestLogStore, RoleRepository, RoleStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxUserRepository, TxUserRoleRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockMenuRepository, MockRequestLogRepository, MockRoleRepository, MockUserRepository,
};
