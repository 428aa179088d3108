//! In-memory inventory
//!
//! Maps each stocked category to its unit pool. Iteration follows category
//! declaration order, which is also the order rows are persisted in.

use std::collections::BTreeMap;

use super::category::Category;
use super::pool::UnitPool;

/// Collection of unit pools keyed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pools: BTreeMap<Category, UnitPool>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory for a fresh installation (hourly 7, daily 49, weekly 17)
    pub fn with_defaults() -> Self {
        Category::ALL
            .into_iter()
            .map(UnitPool::with_default_quantity)
            .collect()
    }

    /// Insert or replace the pool for its category
    pub fn insert(&mut self, pool: UnitPool) {
        self.pools.insert(pool.category, pool);
    }

    /// Get the pool for a category, if stocked
    pub fn get(&self, category: Category) -> Option<&UnitPool> {
        self.pools.get(&category)
    }

    /// Get a mutable pool for a category, if stocked
    pub fn get_mut(&mut self, category: Category) -> Option<&mut UnitPool> {
        self.pools.get_mut(&category)
    }

    /// Quantity on hand for a category, if stocked
    pub fn quantity(&self, category: Category) -> Option<i64> {
        self.get(category).map(|p| p.quantity)
    }

    /// Iterate pools in listing order
    pub fn iter(&self) -> impl Iterator<Item = &UnitPool> {
        self.pools.values()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl FromIterator<UnitPool> for Inventory {
    fn from_iter<I: IntoIterator<Item = UnitPool>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for pool in iter {
            inventory.insert(pool);
        }
        inventory
    }
}
