//! Service layer for the bike rental shop
//!
//! The service layer provides business logic on top of the storage layer:
//! pricing, availability checks and revenue bookkeeping.

pub mod pricing;
pub mod shop;

pub use pricing::{calculate_rental_cost, get_rental_time, unit_price};
pub use shop::Shop;
