//! Helpers for classifying database errors.

/// Returns true if `e` is a unique-constraint violation on `links.name`.
///
/// SQLite reports no constraint name, so the column is matched in the message
/// (`UNIQUE constraint failed: links.name`).
pub fn is_unique_violation_on_name(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("links.name")
}
