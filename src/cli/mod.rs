//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod shop;

pub use shop::{
    handle_inventory_command, handle_quote_command, handle_rent_command, handle_return_command,
    handle_revenue_command,
};
