//! HTTP API layer for techtree.
//!
//! This crate provides the admin REST surface:
//!
//! - **Endpoints**: category item CRUD with form view models
//! - **Middleware**: shared application state
//! - **Responses**: success envelope and list redirects
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod middleware;
pub mod response;

pub use endpoints::router;
