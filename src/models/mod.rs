//! Core data models for the bike rental shop
//!
//! Rental categories, the per-category unit pools, and the in-memory
//! inventory that holds them.

pub mod category;
pub mod inventory;
pub mod pool;
pub mod rental;

pub use category::Category;
pub use inventory::Inventory;
pub use pool::UnitPool;
pub use rental::{RentalReceipt, RentalRequest, ReturnReceipt};
