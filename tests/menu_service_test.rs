//! Menu service unit tests.

mod common;

use std::sync::Arc;

use admin_starter::domain::Menu;
use admin_starter::errors::AppError;
use admin_starter::infra::MockMenuRepository;
use admin_starter::services::{MenuManager, MenuService};

use common::TestUnitOfWork;

fn menu(id: i64, name: &str, sort_order: i32) -> Menu {
    Menu {
        id,
        parent_id: None,
        name: name.to_string(),
        path: format!("/{}", name.to_lowercase()),
        permission: None,
        icon: None,
        sort_order,
    }
}

fn menu_service(repo: MockMenuRepository) -> MenuManager<TestUnitOfWork> {
    let uow = TestUnitOfWork {
        menus: Arc::new(repo),
        ..Default::default()
    };
    MenuManager::new(Arc::new(uow))
}

#[tokio::test]
async fn test_list_preserves_display_order() {
    let mut repo = MockMenuRepository::new();
    repo.expect_list().returning(|| {
        Ok(vec![
            menu(1, "Dashboard", 1),
            menu(2, "Users", 2),
            menu(3, "Logs", 3),
        ])
    });

    let service = menu_service(repo);
    let menus = service.list().await.unwrap();

    let names: Vec<_> = menus.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Dashboard", "Users", "Logs"]);
}

#[tokio::test]
async fn test_empty_menu_table_lists_nothing() {
    let mut repo = MockMenuRepository::new();
    repo.expect_list().returning(|| Ok(Vec::new()));

    let service = menu_service(repo);
    let menus = service.list().await.unwrap();

    assert!(menus.is_empty());
}

#[tokio::test]
async fn test_list_propagates_repository_errors() {
    let mut repo = MockMenuRepository::new();
    repo.expect_list()
        .returning(|| Err(AppError::internal("storage offline")));

    let service = menu_service(repo);
    let err = service.list().await.unwrap_err();

    assert!(matches!(err, AppError::Internal(_)));
}
