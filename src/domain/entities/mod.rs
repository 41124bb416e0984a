//! Core domain entities.
//!
//! - [`Link`] - A persisted slug → URL mapping
//! - [`NewLink`] - Input for creating a [`Link`]; the store assigns the id

pub mod link;

pub use link::{Link, MAX_URL_LENGTH, NewLink};
