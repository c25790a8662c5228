//! Core business logic for techtree.

pub mod services;

pub use services::*;
