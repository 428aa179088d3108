//! Display formatting for terminal output
//!
//! Formats inventory, revenue and transaction receipts as plain text.

pub mod inventory;
pub mod rental;

pub use inventory::{format_inventory, format_money, format_revenue};
pub use rental::{format_quote, format_rental_receipt, format_return_receipt};
