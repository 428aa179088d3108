//! Pricing engine
//!
//! Maps a rental category and duration to a cost. Time beyond the quoted
//! period is charged at 1.5x the unit rate.

use crate::models::Category;

/// Multiplier applied to the unit rate for time past the quoted period
pub const OVERAGE_MULTIPLIER: f64 = 1.5;

/// Unit price for one period of a category
pub fn unit_price(category: Category) -> i64 {
    match category {
        Category::Hourly => 5,
        Category::Daily => 20,
        Category::Weekly => 60,
    }
}

/// Length of a rental in hours, with the unit the period is counted in
///
/// Hourly rentals count hours, daily rentals 24 hours per period, weekly
/// rentals 168 hours per period.
pub fn get_rental_time(category: Category, period: i64) -> (i64, &'static str) {
    (period * category.hours_per_period(), category.time_unit())
}

/// Cost of renting one category for `period` periods
///
/// `hours` is the number of periods actually used and defaults to `period`.
/// Each period used beyond `period` adds the overage surcharge. Negative
/// periods are priced as given and yield a negative cost.
pub fn calculate_rental_cost(category: Category, period: i64, hours: Option<i64>) -> f64 {
    let hours = hours.unwrap_or(period);
    let price = unit_price(category) as f64;

    let mut cost = price * period as f64;

    if hours > period {
        let additional = (hours - period) as f64;
        cost += additional * price * OVERAGE_MULTIPLIER;
    }

    cost
}
