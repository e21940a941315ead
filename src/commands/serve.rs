//! Serve command - Starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::DefaultRole;
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database, RoleRepository, RoleStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database (runs pending migrations)
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .map_err(AppError::from)?,
    );
    tracing::info!("Database connected");

    // Initialize Redis cache
    let cache = Arc::new(
        Cache::try_connect(&config.redis_url)
            .await
            .map_err(|e| AppError::internal(format!("Redis connection failed: {}", e)))?,
    );

    // Resolve the default registration role up front. A bad role name
    // fails the boot instead of the first registration.
    let role_store = RoleStore::new(db.get_connection());
    let default_role = role_store
        .find_by_name(&config.default_role)
        .await?
        .map(DefaultRole::from)
        .ok_or_else(|| {
            AppError::internal(format!(
                "default role '{}' not found; check DEFAULT_ROLE and seed data",
                config.default_role
            ))
        })?;
    tracing::info!(
        role = %default_role.name,
        role_id = default_role.id,
        "Default registration role resolved"
    );

    // Create application state with centralized service container
    // Uses Unit of Work internally for repository access
    let app_state = AppState::from_config(db, cache, config, default_role);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    // ConnectInfo feeds the socket-address fallback used by rate limiting
    // and request logging when no proxy headers are present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
