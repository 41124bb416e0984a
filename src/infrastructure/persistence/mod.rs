//! Link repository implementations.
//!
//! - [`InMemoryLinkRepository`] - Transient, process-local storage
//! - [`SqliteLinkRepository`] - SQLite storage via SQLx

pub mod memory_link_repository;
pub mod sqlite_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
