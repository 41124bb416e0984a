//! Utility functions shared across layers.
//!
//! - [`slug_generator`] - Random slug generation
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod slug_generator;
