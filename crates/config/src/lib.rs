//! Configuration management for the Natter client.
//!
//! This crate provides types and loaders for the Natter API connection
//! settings, navigation targets, and the cookie jar location, sourced from
//! `.env` files, environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, PagesConfig};
