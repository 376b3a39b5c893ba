//! Configuration schema and loader.
//!
//! Settings layer an optional TOML file under environment overrides; see
//! [`Settings`] for the precedence rules.

mod load;
mod schema;

pub use schema::*;
