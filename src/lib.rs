//! # tinyurl
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and the
//!   [`domain::repositories::LinkRepository`] storage contract
//! - **Application Layer** ([`application`]) - Slug allocation with collision
//!   retry, and link resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and SQLite stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store, reset on every restart
//! cargo run
//!
//! # Durable SQLite store
//! STORAGE=sqlite DATABASE_URL="sqlite://tinyurl.db" cargo run
//!
//! curl -H 'Content-Type: application/json' \
//!      -d '{"url":"https://example.com"}' http://localhost:8080/api/tinyurls
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
    pub use crate::utils::slug_generator::SlugGenerator;
}
