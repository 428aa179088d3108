//! Unit pool model
//!
//! Tracks how many bikes of one category are on hand.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Available-count tracker for one rental category
///
/// The pool does not guard against going negative; callers check
/// [`UnitPool::check_availability`] before decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPool {
    pub category: Category,
    pub quantity: i64,
}

impl UnitPool {
    /// Create a pool holding `quantity` units
    pub fn new(category: Category, quantity: i64) -> Self {
        Self { category, quantity }
    }

    /// Create a pool stocked with the category's default quantity
    pub fn with_default_quantity(category: Category) -> Self {
        Self::new(category, category.default_quantity())
    }

    /// True if at least `requested` units are on hand
    pub fn check_availability(&self, requested: i64) -> bool {
        self.quantity >= requested
    }

    /// Take `requested` units out of the pool
    pub fn decrease_quantity(&mut self, requested: i64) {
        self.quantity -= requested;
    }

    /// Put `returned` units back into the pool
    pub fn increase_quantity(&mut self, returned: i64) {
        self.quantity += returned;
    }
}
