//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::entities::{Link, MAX_URL_LENGTH, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, StoreError};
use crate::utils::slug_generator::{SlugGenerator, is_slug_alphabet};

/// Default number of slugs tried before giving up on a create request.
pub const DEFAULT_MAX_SLUG_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Holds no per-request state. Slug uniqueness is delegated to the repository's
/// atomic insert; a collision just triggers another attempt with a new slug.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    slug_generator: Arc<dyn SlugGenerator>,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_repository,
            slug_generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link for `url`.
    ///
    /// # Collision Handling
    ///
    /// Each attempt generates a fresh slug and tries to insert it. A duplicate
    /// slug is never reported to the caller; the next attempt simply uses a new
    /// slug. After `max_attempts` collisions the request fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, longer than
    /// [`MAX_URL_LENGTH`] bytes or contains a control character. Nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::Internal`] on storage failures or when every attempt
    /// collided.
    pub async fn create_link(&self, url: &str) -> Result<Link, AppError> {
        validate_url(url)?;

        for attempt in 1..=self.max_attempts {
            let slug = self.slug_generator.generate()?;

            let new_link = NewLink {
                slug: slug.clone(),
                url: url.to_string(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    info!(id = link.id, slug = %link.slug, "Link created");
                    metrics::counter!("tinyurl_links_created_total").increment(1);
                    return Ok(link);
                }
                Err(StoreError::DuplicateSlug(_)) => {
                    warn!(attempt, slug = %slug, "Slug collision, retrying");
                    metrics::counter!("tinyurl_slug_collisions_total").increment(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Could not allocate a unique slug"
        );
        metrics::counter!("tinyurl_slug_exhausted_total").increment(1);

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a slug to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        // Slugs outside the alphabet are never allocated. The router never
        // captures an empty segment; the emptiness check covers the admin CLI.
        if slug.is_empty() || !is_slug_alphabet(slug) {
            return Err(slug_not_found(slug));
        }

        self.link_repository
            .find_by_slug(slug)
            .await?
            .map(|link| link.url)
            .ok_or_else(|| slug_not_found(slug))
    }

    /// Retrieves a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Lists every link in creation order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list_all().await?)
    }

    /// Reports whether the backing store is reachable.
    pub async fn storage_health(&self) -> Result<(), AppError> {
        Ok(self.link_repository.health_check().await?)
    }
}

fn slug_not_found(slug: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "slug": slug }))
}

/// Rejects empty, whitespace-only and oversized URLs, and URLs that cannot be
/// sent back in a `Location` header.
fn validate_url(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::bad_request(
            "URL must not be empty",
            json!({ "field": "url" }),
        ));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            format!("URL must be at most {} bytes", MAX_URL_LENGTH),
            json!({ "field": "url", "provided_length": url.len() }),
        ));
    }

    if let Some(position) = url.bytes().position(is_forbidden_header_byte) {
        return Err(AppError::bad_request(
            "URL must not contain control characters",
            json!({ "field": "url", "position": position }),
        ));
    }

    Ok(())
}

/// Bytes `HeaderValue` refuses: controls other than tab, and DEL.
fn is_forbidden_header_byte(byte: u8) -> bool {
    (byte < 0x20 && byte != b'\t') || byte == 0x7f
}
