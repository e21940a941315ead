//! Request log service unit tests.

mod common;

use std::sync::Arc;

use admin_starter::config::MAX_PAGE_SIZE;
use admin_starter::domain::{NewRequestLog, RequestLog};
use admin_starter::infra::MockRequestLogRepository;
use admin_starter::services::{LogManager, LogService};
use admin_starter::types::PaginationParams;

use common::TestUnitOfWork;

fn entry(path: &str) -> NewRequestLog {
    NewRequestLog {
        method: "GET".to_string(),
        path: path.to_string(),
        query: None,
        status_code: 200,
        succeeded: true,
        error: None,
        latency_ms: 12,
        client_ip: "203.0.113.9".to_string(),
    }
}

fn record(id: i64, entry: &NewRequestLog) -> RequestLog {
    RequestLog {
        id,
        method: entry.method.clone(),
        path: entry.path.clone(),
        query: entry.query.clone(),
        status_code: entry.status_code,
        succeeded: entry.succeeded,
        error: entry.error.clone(),
        latency_ms: entry.latency_ms,
        client_ip: entry.client_ip.clone(),
        created_at: chrono::Utc::now(),
    }
}

fn log_service(repo: MockRequestLogRepository) -> LogManager<TestUnitOfWork> {
    let uow = TestUnitOfWork {
        request_logs: Arc::new(repo),
        ..Default::default()
    };
    LogManager::new(Arc::new(uow))
}

#[tokio::test]
async fn test_record_persists_the_entry() {
    let mut repo = MockRequestLogRepository::new();
    repo.expect_create()
        .withf(|entry| entry.path == "/user/register" && entry.succeeded)
        .returning(|entry| Ok(record(1, &entry)));

    let service = log_service(repo);
    let stored = service.record(entry("/user/register")).await.unwrap();

    assert_eq!(stored.id, 1);
    assert_eq!(stored.path, "/user/register");
    assert_eq!(stored.client_ip, "203.0.113.9");
}

#[tokio::test]
async fn test_list_reports_pagination_metadata() {
    let mut repo = MockRequestLogRepository::new();
    repo.expect_list()
        .withf(|params| params.page == 2 && params.limit() == 10)
        .returning(|_| {
            let items: Vec<RequestLog> =
                (0..10).map(|i| record(100 - i, &entry("/login"))).collect();
            Ok((items, 41))
        });

    let service = log_service(repo);
    let page = service
        .list(PaginationParams {
            page: 2,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.per_page, 10);
    assert_eq!(page.meta.total, 41);
    assert_eq!(page.meta.total_pages, 5);
}

#[tokio::test]
async fn test_oversized_page_request_is_capped() {
    let mut repo = MockRequestLogRepository::new();
    repo.expect_list()
        .withf(|params| params.limit() == MAX_PAGE_SIZE)
        .returning(|_| Ok((Vec::new(), 0)));

    let service = log_service(repo);
    let page = service
        .list(PaginationParams {
            page: 1,
            per_page: 10_000,
        })
        .await
        .unwrap();

    assert_eq!(page.meta.per_page, MAX_PAGE_SIZE);
    assert_eq!(page.meta.total_pages, 0);
}
