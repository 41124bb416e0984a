#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tinyurl::application::services::{DEFAULT_MAX_SLUG_ATTEMPTS, LinkService};
use tinyurl::domain::entities::{Link, NewLink};
use tinyurl::domain::repositories::LinkRepository;
use tinyurl::error::{AppError, StoreError};
use tinyurl::infrastructure::persistence::{
    InMemoryLinkRepository, SqliteLinkRepository, sqlite_link_repository,
};
use tinyurl::state::{AppState, DEFAULT_MAX_BODY_BYTES};
use tinyurl::utils::slug_generator::{RandomSlugGenerator, SlugGenerator};

/// Yields the given slugs in order, then keeps repeating the last one.
pub struct ScriptedSlugGenerator {
    slugs: Mutex<Vec<String>>,
}

impl ScriptedSlugGenerator {
    pub fn new(slugs: &[&str]) -> Self {
        let mut slugs: Vec<String> = slugs.iter().map(|s| s.to_string()).collect();
        slugs.reverse();
        Self {
            slugs: Mutex::new(slugs),
        }
    }
}

impl SlugGenerator for ScriptedSlugGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut slugs = self.slugs.lock().unwrap();
        if slugs.len() > 1 {
            Ok(slugs.pop().unwrap())
        } else {
            Ok(slugs[0].clone())
        }
    }
}

/// Store whose every operation fails.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, StoreError> {
        Err(StoreError::Storage("disk I/O error".to_string()))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Storage("disk I/O error".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Storage("disk I/O error".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        Err(StoreError::Storage("disk I/O error".to_string()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Storage("disk I/O error".to_string()))
    }
}

pub async fn create_test_pool() -> sqlx::SqlitePool {
    sqlite_link_repository::connect("sqlite::memory:", 1)
        .await
        .unwrap()
}

pub fn create_state_with(
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn SlugGenerator>,
) -> AppState {
    let link_service = Arc::new(LinkService::new(
        repository,
        generator,
        DEFAULT_MAX_SLUG_ATTEMPTS,
    ));

    AppState::new(link_service, DEFAULT_MAX_BODY_BYTES)
}

pub fn create_test_state() -> AppState {
    create_state_with(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(RandomSlugGenerator::default()),
    )
}

pub async fn create_sqlite_state() -> AppState {
    let pool = create_test_pool().await;

    create_state_with(
        Arc::new(SqliteLinkRepository::new(Arc::new(pool))),
        Arc::new(RandomSlugGenerator::default()),
    )
}

pub fn create_failing_state() -> AppState {
    create_state_with(
        Arc::new(FailingLinkRepository),
        Arc::new(RandomSlugGenerator::default()),
    )
}
