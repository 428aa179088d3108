//! Inventory and revenue display formatting

use crate::models::Category;

/// Format an amount with a currency symbol and two decimals
pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format the quantity on hand for each category
pub fn format_inventory(pools: &[(Category, i64)]) -> String {
    if pools.is_empty() {
        return "No bikes in inventory.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Current Bike Inventory:\n");
    for (category, quantity) in pools {
        output.push_str(&format!("{}: {}\n", category.label(), quantity));
    }
    output
}

/// Format the shop revenue line
pub fn format_revenue(symbol: &str, revenue: f64) -> String {
    format!("Shop revenue: {}\n", format_money(symbol, revenue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 15.0), "$15.00");
        assert_eq!(format_money("$", 32.5), "$32.50");
        assert_eq!(format_money("€", 0.0), "€0.00");
        assert_eq!(format_money("$", -4.25), "-$4.25");
    }

    #[test]
    fn test_format_inventory() {
        let output = format_inventory(&[
            (Category::Hourly, 7),
            (Category::Daily, 49),
            (Category::Weekly, 17),
        ]);
        assert_eq!(
            output,
            "Current Bike Inventory:\nHourly: 7\nDaily: 49\nWeekly: 17\n"
        );
    }

    #[test]
    fn test_format_empty_inventory() {
        assert_eq!(format_inventory(&[]), "No bikes in inventory.\n");
    }

    #[test]
    fn test_format_revenue() {
        assert_eq!(format_revenue("$", 30.0), "Shop revenue: $30.00\n");
    }
}
