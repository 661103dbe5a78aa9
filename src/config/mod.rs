//! Configuration module for the expense book
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BookPaths;
pub use settings::Settings;
