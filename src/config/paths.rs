//! Path management for the bike rental shop
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `BIKE_RENTAL_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::RentalError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "BIKE_RENTAL_DATA_DIR";

/// Manages all paths used by the shop
#[derive(Debug, Clone)]
pub struct ShopPaths {
    /// Directory holding the inventory, revenue and settings files
    base_dir: PathBuf,
}

impl ShopPaths {
    /// Create a new ShopPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, RentalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                RentalError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ShopPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve paths, preferring an explicit directory when one is given
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, RentalError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to inventory.csv
    pub fn inventory_file(&self) -> PathBuf {
        self.base_dir.join("inventory.csv")
    }

    /// Get the path to revenue.csv
    pub fn revenue_file(&self) -> PathBuf {
        self.base_dir.join("revenue.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("bike-rental.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), RentalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentalError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.inventory_file(), temp_dir.path().join("inventory.csv"));
        assert_eq!(paths.revenue_file(), temp_dir.path().join("revenue.csv"));
    }

    #[test]
    fn test_resolve_prefers_explicit_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("shop").join("data");
        let paths = ShopPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
        assert!(!paths.inventory_file().exists());
    }
}
