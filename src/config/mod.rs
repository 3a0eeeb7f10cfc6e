//! Configuration module for svgicons
//!
//! Provides types and parsing for `icons.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
