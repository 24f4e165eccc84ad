//! Configuration module
//!
//! This module contains components for loading and storing user preferences.

pub mod loader;
mod model;

pub use loader::{load_config, read_or_create, save_config};
pub use model::Config;
