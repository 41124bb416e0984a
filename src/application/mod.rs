//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Slug allocation and link resolution

pub mod services;
