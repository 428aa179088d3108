//! Storage layer for the bike rental shop
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation. Missing files are replaced with defaults on first load.

pub mod file_io;
pub mod init;
pub mod inventory;
pub mod revenue;

pub use file_io::{read_csv, write_csv_atomic};
pub use init::initialize_storage;
pub use inventory::InventoryStore;
pub use revenue::{format_revenue_value, RevenueStore};

use crate::config::paths::ShopPaths;
use crate::error::RentalError;

/// Main storage coordinator that provides access to both data files
pub struct Storage {
    pub inventory: InventoryStore,
    pub revenue: RevenueStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ShopPaths) -> Result<Self, RentalError> {
        paths.ensure_directories()?;

        Ok(Self {
            inventory: InventoryStore::new(paths.inventory_file()),
            revenue: RevenueStore::new(paths.revenue_file()),
        })
    }
}
