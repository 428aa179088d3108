//! Storage initialization
//!
//! Handles first-run setup: seeding the default inventory and a zero revenue.

use crate::config::paths::ShopPaths;
use crate::error::RentalError;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Creates whichever data files are missing; existing files are left alone.
/// Returns true if anything was created.
pub fn initialize_storage(paths: &ShopPaths) -> Result<bool, RentalError> {
    let needed = needs_initialization(paths);
    let storage = Storage::new(paths.clone())?;

    // Loading seeds and persists defaults for missing files
    storage.inventory.load_inventory()?;
    storage.revenue.load_revenue()?;

    Ok(needed)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ShopPaths) -> bool {
    !paths.inventory_file().exists() || !paths.revenue_file().exists()
}
