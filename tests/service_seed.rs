mod common;

use link_redirector::application::services::LinkService;
use link_redirector::domain::entities::{NewLink, SeedReport};
use link_redirector::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

async fn make_service() -> (LinkService<SqliteLinkRepository>, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    (LinkService::new(repo), pool)
}

fn defaults() -> Vec<NewLink> {
    vec![
        NewLink::new("docs", "https://docs.rs"),
        NewLink::new("crates", "https://crates.io"),
        NewLink::new("docs", "https://docs.rs/duplicate"),
    ]
}

#[tokio::test]
async fn test_seed_twice_keeps_one_row_per_name() {
    let (service, pool) = make_service().await;

    let first = service.seed(&defaults()).await.unwrap();
    assert_eq!(
        first,
        SeedReport {
            inserted: 2,
            existing: 1,
            invalid: 0
        }
    );

    let second = service.seed(&defaults()).await.unwrap();
    assert_eq!(
        second,
        SeedReport {
            inserted: 0,
            existing: 3,
            invalid: 0
        }
    );

    assert_eq!(common::count_links(&pool).await, 2);
    assert_eq!(service.resolve("docs").await.unwrap().url, "https://docs.rs");
}

#[tokio::test]
async fn test_seed_never_overwrites_existing_link() {
    let (service, pool) = make_service().await;
    common::create_test_link(&pool, "crates", "https://lib.rs").await;

    let report = service.seed(&defaults()).await.unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.existing, 2);
    assert_eq!(service.resolve("crates").await.unwrap().url, "https://lib.rs");
}

#[tokio::test]
async fn test_seed_skips_invalid_entries() {
    let (service, pool) = make_service().await;

    let report = service
        .seed(&[
            NewLink::new("", "https://nameless.example"),
            NewLink::new("empty", ""),
            NewLink::new("ok", "https://ok.example"),
        ])
        .await
        .unwrap();

    assert_eq!(report.invalid, 2);
    assert_eq!(report.inserted, 1);
    assert_eq!(common::count_links(&pool).await, 1);
}
