//! Repository layer - Data access abstraction
//!
//! Narrow, per-aggregate repository traits so services depend only on the
//! queries they actually issue.

pub(crate) mod entities;
mod menu_repository;
mod request_log_repository;
mod role_repository;
mod user_repository;

pub use menu_repository::{MenuRepository, MenuStore};
pub use request_log_repository::{RequestLogRepository, RequestLogStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use menu_repository::MockMenuRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use request_log_repository::MockRequestLogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
