//! Service container - centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{AuthService, LogService, MenuService};
use crate::config::Config;
use crate::domain::DefaultRole;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get menu service
    fn menus(&self) -> Arc<dyn MenuService>;

    /// Get request log service
    fn logs(&self) -> Arc<dyn LogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    menu_service: Arc<dyn MenuService>,
    log_service: Arc<dyn LogService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        menu_service: Arc<dyn MenuService>,
        log_service: Arc<dyn LogService>,
    ) -> Self {
        Self {
            auth_service,
            menu_service,
            log_service,
        }
    }

    /// Create service container from database connection and config.
    ///
    /// `default_role` must already be resolved against the roles table;
    /// see `commands::serve`.
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        default_role: DefaultRole,
    ) -> Self {
        use super::{Authenticator, LogManager, MenuManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config, default_role));
        let menu_service = Arc::new(MenuManager::new(uow.clone()));
        let log_service = Arc::new(LogManager::new(uow));

        Self {
            auth_service,
            menu_service,
            log_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn menus(&self) -> Arc<dyn MenuService> {
        self.menu_service.clone()
    }

    fn logs(&self) -> Arc<dyn LogService> {
        self.log_service.clone()
    }
}
