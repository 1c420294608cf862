#![allow(dead_code)]

use async_trait::async_trait;
use link_redirector::application::services::LinkService;
use link_redirector::infrastructure::notifier::{Notifier, NotifyOutcome};
use link_redirector::infrastructure::persistence::{self, SqliteLinkRepository};
use link_redirector::state::AppState;
use link_redirector::web::flash::FlashSigner;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-flash-secret";

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> SqlitePool {
    persistence::connect("sqlite::memory:", 1).await.unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, name: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (name, link) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Notifier that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> NotifyOutcome {
        self.messages.lock().unwrap().push(message.to_string());
        NotifyOutcome::Sent
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

pub fn create_test_state(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> AppState {
    create_test_state_with(pool, notifier, false)
}

pub fn create_test_state_with(
    pool: SqlitePool,
    notifier: Arc<dyn Notifier>,
    notify_on_visit: bool,
) -> AppState {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repo));
    let flash = Arc::new(FlashSigner::new(TEST_SECRET));

    AppState::new(link_service, notifier, flash, notify_on_visit)
}

/// Extracts the `name=value` pair from a `Set-Cookie` header value.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().to_string()
}
