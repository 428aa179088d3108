//! Inventory persistence
//!
//! Reads and writes `inventory.csv`: a `RentalType,Quantity` header followed
//! by one row per stocked category.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RentalError;
use crate::models::{Category, Inventory, UnitPool};

use super::file_io::{read_csv, write_csv_atomic};

pub const INVENTORY_HEADER: [&str; 2] = ["RentalType", "Quantity"];

/// One row of the inventory file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct InventoryRecord {
    #[serde(rename = "RentalType")]
    rental_type: String,
    #[serde(rename = "Quantity")]
    quantity: i64,
}

/// Store for the inventory file
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the inventory, seeding and persisting the defaults if the file is missing
    ///
    /// A category listed twice keeps its last row.
    pub fn load_inventory(&self) -> Result<Inventory, RentalError> {
        let Some(records) = read_csv::<InventoryRecord, _>(&self.path)? else {
            info!(path = %self.path.display(), "inventory file missing, creating defaults");
            let inventory = Inventory::with_defaults();
            self.save_inventory(&inventory)?;
            return Ok(inventory);
        };

        let mut inventory = Inventory::new();
        for record in records {
            let category: Category = record.rental_type.parse()?;
            inventory.insert(UnitPool::new(category, record.quantity));
        }

        debug!(pools = inventory.len(), "inventory loaded");
        Ok(inventory)
    }

    /// Overwrite the inventory file with the current pools
    pub fn save_inventory(&self, inventory: &Inventory) -> Result<(), RentalError> {
        let records: Vec<_> = inventory
            .iter()
            .map(|pool| InventoryRecord {
                rental_type: pool.category.to_string(),
                quantity: pool.quantity,
            })
            .collect();

        write_csv_atomic(&self.path, &INVENTORY_HEADER, &records)?;
        debug!(pools = records.len(), "inventory saved");
        Ok(())
    }
}
