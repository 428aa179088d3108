//! Configuration module for the bike rental shop
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ShopPaths;
pub use settings::Settings;
