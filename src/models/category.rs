//! Rental category model
//!
//! A category is a rental duration class with its own unit price and pool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RentalError;

/// Advertised in prompts, but never priced or stocked.
const FAMILY: &str = "family";

/// Rental duration class
///
/// Declaration order is the order categories are listed and persisted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Priced per hour
    Hourly,
    /// Priced per day
    Daily,
    /// Priced per week
    Weekly,
}

impl Category {
    /// All categories, in listing order
    pub const ALL: [Category; 3] = [Self::Hourly, Self::Daily, Self::Weekly];

    /// Name as written to the inventory file and typed at prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Capitalized name for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }

    /// Unit in which a rental period of this category is counted
    pub fn time_unit(&self) -> &'static str {
        match self {
            Self::Hourly => "hour(s)",
            Self::Daily => "day(s)",
            Self::Weekly => "week(s)",
        }
    }

    /// Number of hours in one period of this category
    pub fn hours_per_period(&self) -> i64 {
        match self {
            Self::Hourly => 1,
            Self::Daily => 24,
            Self::Weekly => 24 * 7,
        }
    }

    /// Units stocked for this category on a fresh installation
    pub fn default_quantity(&self) -> i64 {
        match self {
            Self::Hourly => 7,
            Self::Daily => 49,
            Self::Weekly => 17,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            FAMILY => Err(RentalError::UnsupportedCategory(name)),
            _ => Err(RentalError::unknown_category(s.trim())),
        }
    }
}
