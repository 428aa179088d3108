//! bike-rental - Inventory and revenue tracker for a bike rental shop
//!
//! This library provides the core functionality for a single-user bike
//! rental counter: a fixed set of rental types, per-type stock counts,
//! tiered pricing, and flat-file persistence of stock and revenue.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Rental categories, unit pools, requests and receipts
//! - `storage`: CSV file storage for inventory and revenue
//! - `services`: Pricing and the shop controller
//! - `display`: Terminal formatting
//! - `shell`: The interactive menu
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use bike_rental::config::ShopPaths;
//! use bike_rental::models::{Category, RentalRequest};
//! use bike_rental::services::Shop;
//! use bike_rental::storage::Storage;
//!
//! let storage = Storage::new(ShopPaths::new()?)?;
//! let mut shop = Shop::open(storage)?;
//! let receipt = shop.process_rental(RentalRequest::new(Category::Hourly, 2, 3))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{RentalError, RentalResult};
