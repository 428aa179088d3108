//! Revenue persistence
//!
//! Reads and writes `revenue.csv`: a `Revenue` header and a single data row.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RentalError;

use super::file_io::{read_csv, write_csv_atomic};

pub const REVENUE_HEADER: [&str; 1] = ["Revenue"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RevenueRecord {
    #[serde(rename = "Revenue")]
    revenue: String,
}

/// Format a revenue value the way it is stored, always with a fractional part
///
/// `15.0` is written as "15.0", `22.5` as "22.5".
pub fn format_revenue_value(revenue: f64) -> String {
    format!("{:?}", revenue)
}

/// Store for the revenue file
pub struct RevenueStore {
    path: PathBuf,
}

impl RevenueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the revenue, creating the file with 0.0 if it is missing
    ///
    /// Every row is read; the last one wins. A file with no data rows
    /// yields 0.0.
    pub fn load_revenue(&self) -> Result<f64, RentalError> {
        let Some(records) = read_csv::<RevenueRecord, _>(&self.path)? else {
            info!(path = %self.path.display(), "revenue file missing, starting at zero");
            self.save_revenue(0.0)?;
            return Ok(0.0);
        };

        let mut revenue = 0.0;
        for record in records {
            revenue = record.revenue.trim().parse::<f64>().map_err(|e| {
                RentalError::Storage(format!(
                    "Invalid revenue value '{}' in {}: {}",
                    record.revenue,
                    self.path.display(),
                    e
                ))
            })?;
        }

        debug!(revenue, "revenue loaded");
        Ok(revenue)
    }

    /// Overwrite the revenue file with the current value
    pub fn save_revenue(&self, revenue: f64) -> Result<(), RentalError> {
        let record = RevenueRecord {
            revenue: format_revenue_value(revenue),
        };
        write_csv_atomic(&self.path, &REVENUE_HEADER, &[record])?;
        debug!(revenue, "revenue saved");
        Ok(())
    }
}
