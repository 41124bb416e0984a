//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// Process-local link store backed by `DashMap`.
///
/// Contents are lost when the process exits. The slug index is claimed through
/// the `DashMap` entry API, which holds the shard lock for the duration of the
/// insert, so two concurrent creates with the same slug cannot both succeed.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: DashMap<i64, Link>,
    slugs: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            slugs: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        match self.slugs.entry(new_link.slug) {
            Entry::Occupied(occupied) => Err(StoreError::DuplicateSlug(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let link = Link::new(id, vacant.key().clone(), new_link.url);

                // Publish the row before the slug so a visible slug always resolves.
                self.links.insert(id, link.clone());
                vacant.insert(id);

                Ok(link)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError> {
        let Some(id) = self.slugs.get(slug).map(|entry| *entry.value()) else {
            return Ok(None);
        };

        Ok(self.links.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, StoreError> {
        Ok(self.links.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by_key(|link| link.id);

        Ok(links)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
