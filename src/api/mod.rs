//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
