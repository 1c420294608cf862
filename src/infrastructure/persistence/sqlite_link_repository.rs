//! SQLite implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, DUPLICATE_NAME_MESSAGE, LINK_NOT_FOUND_MESSAGE};
use crate::utils::db_error::is_unique_violation_on_name;

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    name: String,
    link: String,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.name, r.link)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// All statements are parameterized. Each write auto-commits, so a successful
/// call is durable when it returns.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation_on_name(&e) {
        return AppError::conflict(DUPLICATE_NAME_MESSAGE, json!({ "name": name }));
    }
    e.into()
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, name, link
            FROM links
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT id, name, link FROM links WHERE name = ?1")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT id, name, link FROM links WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (name, link)
            VALUES (?1, ?2)
            RETURNING id, name, link
            "#,
        )
        .bind(&new_link.name)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &new_link.name))?;

        Ok(row.into())
    }

    async fn insert_if_absent(&self, new_link: NewLink) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (name, link)
            VALUES (?1, ?2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&new_link.name)
        .bind(&new_link.url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn update(&self, id: i64, link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET name = ?1, link = ?2
            WHERE id = ?3
            RETURNING id, name, link
            "#,
        )
        .bind(&link.name)
        .bind(&link.url)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &link.name))?;

        row.map(Link::from)
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND_MESSAGE, json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                LINK_NOT_FOUND_MESSAGE,
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
