//! Infrastructure layer implementing the repository traits defined by the
//! domain layer.
//!
//! - [`persistence`] - In-memory and SQLite link stores

pub mod persistence;
