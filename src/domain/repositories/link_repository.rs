//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::StoreError;
use async_trait::async_trait;

/// Storage contract for links.
///
/// Implementations own slug uniqueness: [`LinkRepository::create`] must fail with
/// [`StoreError::DuplicateSlug`] when the slug is taken, detected atomically at
/// insert time rather than by a prior lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns it with its assigned id.
    ///
    /// Either the whole link becomes visible to subsequent lookups or nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateSlug`] if the slug already exists.
    ///
    /// Returns [`StoreError::Storage`] on any other failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on storage failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError>;

    /// Finds a link by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on storage failures.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, StoreError>;

    /// Returns every link in insertion order.
    ///
    /// Unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on storage failures.
    async fn list_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
