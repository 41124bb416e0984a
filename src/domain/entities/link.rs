//! Link entity representing a shortened URL mapping.

/// Maximum length of a target URL, in bytes.
pub const MAX_URL_LENGTH: usize = 1024;

/// A persisted mapping from a slug to a target URL.
///
/// Links are created once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, slug: String, url: String) -> Self {
        Self { id, slug, url }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}
