//! Link entity representing a name → destination mapping.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;

/// Maximum length of a link name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a destination URL, in characters.
pub const MAX_URL_LEN: usize = 2048;

/// Bytes escaped when a name is used as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A stored short link.
///
/// `id` is assigned by the store, never reused, and increases with every
/// insert. `name` is the public path segment and is unique across all links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, name: String, url: String) -> Self {
        Self { id, name, url }
    }

    /// Public path of this link, `/` followed by the percent-encoded name.
    pub fn short_path(&self) -> String {
        format!("/{}", utf8_percent_encode(&self.name, PATH_SEGMENT))
    }
}

/// Input data for creating or replacing a link.
///
/// Also the shape of a seed entry; seed files use the `link` key for the
/// destination, matching the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewLink {
    pub name: String,
    #[serde(rename = "link")]
    pub url: String,
}

impl NewLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns true if either field is empty.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.url.is_empty()
    }
}

/// Outcome of seeding default links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Entries inserted because their name was absent.
    pub inserted: usize,
    /// Entries skipped because a link with that name already existed.
    pub existing: usize,
    /// Entries skipped because `name` or `link` was empty.
    pub invalid: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_encodes_reserved_characters() {
        let plain = Link::new(1, "docs".to_string(), "https://docs.rs".to_string());
        assert_eq!(plain.short_path(), "/docs");

        let odd = Link::new(2, "a?b#c%d e/f".to_string(), "https://x.example".to_string());
        assert_eq!(odd.short_path(), "/a%3Fb%23c%25d%20e%2Ff");

        let accented = Link::new(3, "café".to_string(), "https://x.example".to_string());
        assert_eq!(accented.short_path(), "/caf%C3%A9");
    }

    #[test]
    fn test_link_creation() {
        let link = Link::new(
            1,
            "promo".to_string(),
            "https://example.com/a".to_string(),
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.name, "promo");
        assert_eq!(link.url, "https://example.com/a");
    }

    #[test]
    fn test_new_link_empty_fields() {
        assert!(!NewLink::new("docs", "https://docs.rs").has_empty_field());
        assert!(NewLink::new("", "https://docs.rs").has_empty_field());
        assert!(NewLink::new("docs", "").has_empty_field());
    }

    #[test]
    fn test_new_link_deserializes_link_key() {
        let entries: Vec<NewLink> =
            serde_json::from_str(r#"[{"name": "docs", "link": "https://docs.rs"}]"#).unwrap();

        assert_eq!(entries, vec![NewLink::new("docs", "https://docs.rs")]);
    }
}
