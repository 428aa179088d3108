//! Shop controller
//!
//! Owns the unit pools and the revenue accumulator, and records rentals and
//! returns. Revenue is persisted after every transaction; inventory only when
//! [`Shop::save_inventory`] is called.

use chrono::Local;
use tracing::{info, warn};

use crate::error::{RentalError, RentalResult};
use crate::models::{Category, Inventory, RentalReceipt, RentalRequest, ReturnReceipt};
use crate::storage::Storage;

use super::pricing::calculate_rental_cost;

/// The rental shop and its in-memory state
pub struct Shop {
    storage: Storage,
    inventory: Inventory,
    revenue: f64,
}

impl Shop {
    /// Open the shop, loading inventory and revenue from storage
    ///
    /// Missing files are seeded with defaults and written back.
    pub fn open(storage: Storage) -> RentalResult<Self> {
        let inventory = storage.inventory.load_inventory()?;
        let revenue = storage.revenue.load_revenue()?;

        info!(pools = inventory.len(), revenue, "shop opened");

        Ok(Self {
            storage,
            inventory,
            revenue,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Accumulated revenue from all rentals and returns
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Check whether `quantity` bikes of a category can be rented
    ///
    /// Always false for a category with no pool.
    pub fn is_available(&self, category: Category, quantity: i64) -> bool {
        self.inventory
            .get(category)
            .is_some_and(|pool| pool.check_availability(quantity))
    }

    /// Take bikes out of a category's pool; no-op if the category isn't stocked
    pub fn reserve_bikes(&mut self, category: Category, quantity: i64) {
        if let Some(pool) = self.inventory.get_mut(category) {
            pool.decrease_quantity(quantity);
        }
    }

    /// Put bikes back into a category's pool; no-op if the category isn't stocked
    pub fn release_bikes(&mut self, category: Category, quantity: i64) {
        if let Some(pool) = self.inventory.get_mut(category) {
            pool.increase_quantity(quantity);
        }
    }

    /// Rent bikes out
    ///
    /// Fails with [`RentalError::Unavailable`] without touching any state if
    /// the pool can't cover the request.
    pub fn process_rental(&mut self, request: RentalRequest) -> RentalResult<RentalReceipt> {
        let RentalRequest {
            category,
            quantity,
            duration,
        } = request;

        if !self.is_available(category, quantity) {
            let available = self.inventory.quantity(category).unwrap_or(0);
            warn!(%category, quantity, available, "rental rejected");
            return Err(RentalError::Unavailable {
                category: category.to_string(),
                requested: quantity,
                available,
            });
        }

        let cost = calculate_rental_cost(category, duration, None);
        self.reserve_bikes(category, quantity);
        self.record_revenue(cost)?;

        info!(%category, quantity, duration, cost, "rental recorded");

        Ok(RentalReceipt {
            request,
            cost,
            revenue: self.revenue,
        })
    }

    /// Take bikes back
    ///
    /// The cost of the stated duration is charged again and added to revenue.
    pub fn process_return(&mut self, request: RentalRequest) -> RentalResult<ReturnReceipt> {
        let RentalRequest {
            category,
            quantity,
            duration,
        } = request;

        let returned_at = Local::now();

        self.release_bikes(category, quantity);
        let cost = calculate_rental_cost(category, duration, None);
        self.record_revenue(cost)?;

        info!(%category, quantity, duration, cost, "return recorded");

        Ok(ReturnReceipt {
            request,
            cost,
            revenue: self.revenue,
            returned_at,
        })
    }

    /// Quantity on hand per stocked category, in listing order
    pub fn display_inventory(&self) -> Vec<(Category, i64)> {
        self.inventory
            .iter()
            .map(|pool| (pool.category, pool.quantity))
            .collect()
    }

    /// Persist the current inventory
    pub fn save_inventory(&self) -> RentalResult<()> {
        self.storage.inventory.save_inventory(&self.inventory)
    }

    /// Persist the current revenue
    pub fn save_revenue(&self) -> RentalResult<()> {
        self.storage.revenue.save_revenue(self.revenue)
    }

    fn record_revenue(&mut self, amount: f64) -> RentalResult<()> {
        self.revenue += amount;
        self.save_revenue()
    }
}
