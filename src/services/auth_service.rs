//! Authentication service - registration, login and token verification.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! SOLID (ISP): Trait contains only auth methods, password handling in domain.
//! DDD: Uses domain Password value object for hashing.
//! DDD: Uses Unit of Work for repository access.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{DefaultRole, HashCost, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
///
/// SOLID (ISP): Contains only authentication operations.
/// Password hashing is handled by domain::Password value object.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and assign the default role
    async fn register(&self, username: String, password: String) -> AppResult<User>;

    /// Login and return JWT token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, roles: Vec<String>, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        roles,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
    default_role: DefaultRole,
    hash_cost: HashCost,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work.
    ///
    /// `default_role` is the role every new registration receives. It is
    /// resolved from configuration at startup, so a misconfigured role name
    /// fails the process before it serves traffic instead of failing the
    /// first registration.
    pub fn new(uow: Arc<U>, config: Config, default_role: DefaultRole) -> Self {
        let hash_cost = config.hash_cost();
        Self {
            uow,
            config,
            default_role,
            hash_cost,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, username: String, password: String) -> AppResult<User> {
        // Whitespace-only input counts as blank
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::validation("missing required field"));
        }

        // Friendly pre-check so the common duplicate case answers before we
        // spend an Argon2 hash. The unique index remains the real guard: a
        // concurrent registration that slips past this check loses inside
        // the transaction and reports the same conflict.
        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("username already registered"));
        }

        let password_hash = Password::new(&password, &self.hash_cost)?.into_string();

        // User row and default-role association commit or roll back together
        let default_role_id = self.default_role.id;
        with_transaction!(self.uow, |ctx| {
            let user = ctx.users().create(username, password_hash).await?;
            ctx.user_roles().create(user.id, default_role_id).await?;
            Ok(user)
        })
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_username(&username).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid usernames.
        // The dummy hash is well-formed so the full Argon2 work runs, but it
        // matches no password.
        let dummy_hash = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$T3BhcXVlIG5ldmVyIG1hdGNoaW5nIGhhc2ggdmFsdWU";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        // DDD: Use Password value object for verification
        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        let user = user_result.as_ref().unwrap();

        // Status is checked after the password so a wrong password on a
        // locked account still reads as invalid credentials
        if !user.status.allows_login() {
            tracing::warn!(user_id = user.id, status = %user.status, "login refused for inactive account");
            return Err(AppError::Forbidden);
        }

        let roles = self.uow.roles().find_names_for_user(user.id).await?;
        generate_token(user, roles, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};

    use crate::domain::UserStatus;
    use crate::infra::repositories::entities::{user, user_role};
    use crate::infra::Persistence;

    const TEST_ROLE_ID: i64 = 7777;

    // Small hash cost keeps these tests fast; the production cost comes
    // from configuration.
    fn fast_config() -> Config {
        let mut config = Config::from_env();
        config.hash_memory_kib = 1024;
        config.hash_iterations = 1;
        config.hash_parallelism = 1;
        config
    }

    fn service(db: DatabaseConnection) -> Authenticator<Persistence> {
        Authenticator::new(
            Arc::new(Persistence::new(db)),
            fast_config(),
            DefaultRole {
                id: TEST_ROLE_ID,
                name: "USER".to_string(),
            },
        )
    }

    fn stored_user(id: i64, username: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id,
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$WQ5zWpWiGDBQXp6Q1zQyqg"
                .to_string(),
            status: "NORMAL".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn role_link(id: i64, user_id: i64) -> user_role::Model {
        user_role::Model {
            id,
            user_id,
            role_id: TEST_ROLE_ID,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn register_writes_user_and_default_role_in_one_transaction() {
        // Queue: duplicate pre-check finds nothing, then the two inserts
        // return their rows.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![stored_user(42, "alice")]])
            .append_query_results([vec![role_link(1, 42)]])
            .into_connection();

        let auth = service(db.clone());
        let user = auth
            .register("alice".to_string(), "secret1".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.username, "alice");
        assert_eq!(user.status, UserStatus::Normal);

        let log = format!("{:?}", db.into_transaction_log());
        assert_eq!(log.matches("INSERT INTO").count(), 2);
        assert!(log.contains("user_roles"));
        // the association row carries the resolved default role id
        assert!(log.contains(&TEST_ROLE_ID.to_string()));
        // the stored credential is a salted hash, never the plaintext
        assert!(log.contains("argon2id"));
        assert!(!log.contains("secret1"));
    }

    #[tokio::test]
    async fn register_fails_when_role_association_cannot_be_written() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![stored_user(42, "alice")]])
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let auth = service(db);
        let err = auth
            .register("alice".to_string(), "secret1".to_string())
            .await
            .unwrap_err();

        // The transaction closure failed, so the user insert was rolled
        // back along with it and the caller sees a persistence error.
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username_without_writing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_user(42, "alice")]])
            .into_connection();

        let auth = service(db.clone());
        let err = auth
            .register("alice".to_string(), "another-secret".to_string())
            .await
            .unwrap_err();

        match err {
            AppError::Conflict(msg) => assert_eq!(msg, "username already registered"),
            other => panic!("expected conflict, got {:?}", other),
        }

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("INSERT INTO"));
    }

    #[tokio::test]
    async fn register_rejects_blank_input_before_touching_storage() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let auth = service(db.clone());

        for (username, password) in [
            ("", "secret1"),
            ("   ", "secret1"),
            ("alice", ""),
            ("alice", " \t "),
        ] {
            let err = auth
                .register(username.to_string(), password.to_string())
                .await
                .unwrap_err();
            match err {
                AppError::Validation(msg) => assert_eq!(msg, "missing required field"),
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn second_registration_of_same_username_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([vec![stored_user(7, "bob")]])
            .append_query_results([vec![role_link(1, 7)]])
            .append_query_results([vec![stored_user(7, "bob")]])
            .into_connection();

        let auth = service(db);

        auth.register("bob".to_string(), "secret1".to_string())
            .await
            .unwrap();
        let err = auth
            .register("bob".to_string(), "secret2".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
