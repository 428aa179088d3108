//! Rental receipt formatting
//!
//! Confirmation and summary text shown after a rental, a return or a price
//! quote.

use crate::models::{Category, RentalReceipt, ReturnReceipt};
use crate::services::pricing::{calculate_rental_cost, get_rental_time};

use super::inventory::format_money;

/// Format the confirmation shown after a rental
pub fn format_rental_receipt(receipt: &RentalReceipt, symbol: &str) -> String {
    let request = &receipt.request;
    let mut output = String::new();

    output.push_str(&format!(
        "You have rented {} bike(s) for {} {}.\n",
        request.quantity, request.duration, request.category
    ));
    output.push_str(&format!(
        "The total cost of your rental is {}.\n",
        format_money(symbol, receipt.cost)
    ));
    output.push_str("Please return the bikes in good condition.\n");

    output
}

/// Format the summary shown after a return
pub fn format_return_receipt(
    receipt: &ReturnReceipt,
    symbol: &str,
    timestamp_format: &str,
) -> String {
    let request = &receipt.request;
    let mut output = String::new();

    output.push_str(&format!(
        "You rented {} bike(s) for {}.\n",
        request.quantity,
        request.duration_label()
    ));
    output.push_str(&format!(
        "You returned the bike(s) at {}.\n",
        receipt.returned_at.format(timestamp_format)
    ));
    output.push_str(&format!(
        "Your rental cost is {}.\n",
        format_money(symbol, receipt.cost)
    ));

    output
}

/// Format a price quote, including any overage
pub fn format_quote(category: Category, period: i64, hours: Option<i64>, symbol: &str) -> String {
    let (total_hours, unit) = get_rental_time(category, period);
    let cost = calculate_rental_cost(category, period, hours);

    let mut output = String::new();
    output.push_str(&format!(
        "{} rental for {} {} ({} hour(s) total)\n",
        category.label(),
        period,
        unit,
        total_hours
    ));

    if let Some(used) = hours.filter(|&h| h > period) {
        output.push_str(&format!(
            "  Overage: {} extra {} at the surcharge rate\n",
            used - period,
            unit
        ));
    }

    output.push_str(&format!("  Cost: {}\n", format_money(symbol, cost)));
    output
}
