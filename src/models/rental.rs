//! Rental and return transactions
//!
//! Requests coming in from the shell or command line, and the receipts the
//! shop hands back once a transaction has been recorded.

use chrono::{DateTime, Local};

use super::category::Category;

/// A request to rent or return bikes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalRequest {
    pub category: Category,
    /// Number of bikes
    pub quantity: i64,
    /// Number of periods (hours, days or weeks depending on category)
    pub duration: i64,
}

impl RentalRequest {
    pub fn new(category: Category, quantity: i64, duration: i64) -> Self {
        Self {
            category,
            quantity,
            duration,
        }
    }

    /// Duration with its unit, e.g. "3 hour(s)"
    pub fn duration_label(&self) -> String {
        format!("{} {}", self.duration, self.category.time_unit())
    }
}

/// Confirmation of a completed rental
#[derive(Debug, Clone, PartialEq)]
pub struct RentalReceipt {
    pub request: RentalRequest,
    pub cost: f64,
    /// Shop revenue after this rental was recorded
    pub revenue: f64,
}

/// Summary of a completed return
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    pub request: RentalRequest,
    pub cost: f64,
    /// Shop revenue after this return was recorded
    pub revenue: f64,
    pub returned_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_label() {
        assert_eq!(
            RentalRequest::new(Category::Hourly, 2, 3).duration_label(),
            "3 hour(s)"
        );
        assert_eq!(
            RentalRequest::new(Category::Daily, 1, 2).duration_label(),
            "2 day(s)"
        );
        assert_eq!(
            RentalRequest::new(Category::Weekly, 1, 1).duration_label(),
            "1 week(s)"
        );
    }
}
