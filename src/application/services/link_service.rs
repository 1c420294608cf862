//! Link resolution and management service.

use std::sync::Arc;

use crate::domain::entities::{Link, MAX_NAME_LEN, MAX_URL_LEN, NewLink, SeedReport};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, DUPLICATE_NAME_MESSAGE, LINK_NOT_FOUND_MESSAGE, MISSING_FIELDS_MESSAGE};
use serde_json::json;

/// Service for resolving, creating, editing and deleting links.
///
/// Field checks run here; name uniqueness is checked here for a precise error
/// and enforced again by the store, which settles concurrent races.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up the link for a public name.
    ///
    /// Matching is exact and case-sensitive; no normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, name: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND_MESSAGE, json!({ "name": name })))
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND_MESSAGE, json!({ "id": id })))
    }

    /// Creates a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is empty or too long.
    /// Returns [`AppError::Conflict`] if the name already exists.
    pub async fn create(&self, name: String, url: String) -> Result<Link, AppError> {
        let new_link = NewLink { name, url };
        validate_fields(&new_link)?;

        if self
            .link_repository
            .find_by_name(&new_link.name)
            .await?
            .is_some()
        {
            return Err(duplicate_name(&new_link.name));
        }

        let link = self.link_repository.insert(new_link).await?;
        tracing::info!(id = link.id, name = %link.name, "Link created");
        Ok(link)
    }

    /// Replaces name and destination of an existing link.
    ///
    /// Both fields are required. Keeping the current name is allowed; taking
    /// the name of another link is not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Validation`] if a field is empty or too long.
    /// Returns [`AppError::Conflict`] if another link already uses the name.
    pub async fn update(&self, id: i64, name: String, url: String) -> Result<Link, AppError> {
        self.get(id).await?;

        let replacement = NewLink { name, url };
        validate_fields(&replacement)?;

        if let Some(holder) = self
            .link_repository
            .find_by_name(&replacement.name)
            .await?
            && holder.id != id
        {
            return Err(duplicate_name(&replacement.name));
        }

        let link = self.link_repository.update(id, replacement).await?;
        tracing::info!(id = link.id, name = %link.name, "Link updated");
        Ok(link)
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.link_repository.delete(id).await?;
        tracing::info!(id, "Link deleted");
        Ok(())
    }

    /// Inserts default links whose names are not yet taken.
    ///
    /// Existing links are never overwritten, so running the same seed again
    /// changes nothing. Entries with an empty field are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; entries processed
    /// before the failure stay inserted.
    pub async fn seed(&self, defaults: &[NewLink]) -> Result<SeedReport, AppError> {
        let mut report = SeedReport::default();

        for entry in defaults {
            if validate_fields(entry).is_err() {
                tracing::warn!(name = %entry.name, "Skipping invalid seed entry");
                report.invalid += 1;
                continue;
            }

            if self.link_repository.insert_if_absent(entry.clone()).await? {
                report.inserted += 1;
            } else {
                report.existing += 1;
            }
        }

        tracing::info!(
            inserted = report.inserted,
            existing = report.existing,
            invalid = report.invalid,
            "Seeding finished"
        );

        Ok(report)
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::conflict(DUPLICATE_NAME_MESSAGE, json!({ "name": name }))
}

/// Checks that both fields are present and within storage limits.
fn validate_fields(link: &NewLink) -> Result<(), AppError> {
    if link.has_empty_field() {
        return Err(AppError::bad_request(
            MISSING_FIELDS_MESSAGE,
            json!({ "name": link.name.is_empty(), "link": link.url.is_empty() }),
        ));
    }

    if link.name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::bad_request(
            format!("Name must be at most {MAX_NAME_LEN} characters"),
            json!({ "max": MAX_NAME_LEN }),
        ));
    }

    if link.url.chars().count() > MAX_URL_LEN {
        return Err(AppError::bad_request(
            format!("Link must be at most {MAX_URL_LEN} characters"),
            json!({ "max": MAX_URL_LEN }),
        ));
    }

    Ok(())
}
