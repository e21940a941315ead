//! Authentication service unit tests.
//!
//! The transactional registration path is covered by the service's
//! in-crate tests against a mock database; these tests script the
//! repository seam for everything in front of it.

mod common;

use std::sync::Arc;

use mockall::predicate::eq;

use admin_starter::domain::{DefaultRole, UserStatus};
use admin_starter::errors::AppError;
use admin_starter::infra::{MockRoleRepository, MockUserRepository};
use admin_starter::services::{AuthService, Authenticator};

use common::{stored_user, test_config, TestUnitOfWork};

fn auth_service(
    users: MockUserRepository,
    roles: MockRoleRepository,
) -> Authenticator<TestUnitOfWork> {
    let uow = TestUnitOfWork {
        users: Arc::new(users),
        roles: Arc::new(roles),
        ..Default::default()
    };

    Authenticator::new(
        Arc::new(uow),
        test_config(),
        DefaultRole {
            id: 1,
            name: "USER".to_string(),
        },
    )
}

#[tokio::test]
async fn test_login_success_returns_verifiable_token() {
    let user = stored_user(42, "alice", "secret1", UserStatus::Normal);

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .with(eq("alice"))
        .returning(move |_| Ok(Some(user.clone())));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_find_names_for_user()
        .with(eq(42i64))
        .returning(|_| Ok(vec!["USER".to_string()]));

    let service = auth_service(users, roles);
    let token = service
        .login("alice".to_string(), "secret1".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 2 * 3600);

    // The token must decode back to the same principal
    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, 42);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.roles, vec!["USER".to_string()]);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_unknown_username_rejected() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));

    // No role expectations: an unknown user must not reach the role lookup
    let service = auth_service(users, MockRoleRepository::new());
    let err = service
        .login("ghost".to_string(), "whatever".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let user = stored_user(42, "alice", "right-password", UserStatus::Normal);

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .returning(move |_| Ok(Some(user.clone())));

    let service = auth_service(users, MockRoleRepository::new());
    let err = service
        .login("alice".to_string(), "wrong-password".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_refused_for_inactive_accounts() {
    for status in [UserStatus::Locked, UserStatus::Disabled] {
        let user = stored_user(42, "alice", "secret1", status);

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        // Correct password, but the account may not log in
        let service = auth_service(users, MockRoleRepository::new());
        let err = service
            .login("alice".to_string(), "secret1".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden));
    }
}

#[tokio::test]
async fn test_wrong_password_on_locked_account_reads_as_invalid_credentials() {
    // The password check runs first so a locked account cannot be probed
    // with guessed passwords.
    let user = stored_user(42, "alice", "secret1", UserStatus::Locked);

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .returning(move |_| Ok(Some(user.clone())));

    let service = auth_service(users, MockRoleRepository::new());
    let err = service
        .login("alice".to_string(), "wrong-password".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let existing = stored_user(1, "alice", "whatever", UserStatus::Normal);

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .with(eq("alice"))
        .returning(move |_| Ok(Some(existing.clone())));

    // The failing TestUnitOfWork::transaction doubles as the assertion
    // that a duplicate never starts a write.
    let service = auth_service(users, MockRoleRepository::new());
    let err = service
        .register("alice".to_string(), "secret1".to_string())
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "username already registered"),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_blank_input_never_reaches_repositories() {
    // No expectations at all: any repository call fails the test
    let service = auth_service(MockUserRepository::new(), MockRoleRepository::new());
    let err = service
        .register("   ".to_string(), "secret1".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_verify_token_rejects_garbage() {
    let service = auth_service(MockUserRepository::new(), MockRoleRepository::new());

    assert!(service.verify_token("not-a-jwt").is_err());
    assert!(service.verify_token("").is_err());
}
