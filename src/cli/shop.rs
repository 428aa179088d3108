//! Shop CLI commands
//!
//! One-shot, non-interactive counterparts of the menu entries. Commands that
//! change stock persist both revenue and inventory before returning.

use crate::config::settings::Settings;
use crate::display::{
    format_inventory, format_quote, format_rental_receipt, format_return_receipt, format_revenue,
};
use crate::error::RentalResult;
use crate::models::{Category, RentalRequest};
use crate::services::Shop;

/// Print the current inventory
pub fn handle_inventory_command(shop: &Shop) -> RentalResult<()> {
    print!("{}", format_inventory(&shop.display_inventory()));
    Ok(())
}

/// Print the shop revenue
pub fn handle_revenue_command(shop: &Shop, settings: &Settings) -> RentalResult<()> {
    print!("{}", format_revenue(&settings.currency_symbol, shop.revenue()));
    Ok(())
}

/// Rent bikes out
pub fn handle_rent_command(
    shop: &mut Shop,
    settings: &Settings,
    category: &str,
    quantity: i64,
    duration: i64,
) -> RentalResult<()> {
    let category: Category = category.parse()?;
    let receipt = shop.process_rental(RentalRequest::new(category, quantity, duration))?;
    shop.save_inventory()?;

    print!("{}", format_rental_receipt(&receipt, &settings.currency_symbol));
    Ok(())
}

/// Take bikes back
pub fn handle_return_command(
    shop: &mut Shop,
    settings: &Settings,
    category: &str,
    quantity: i64,
    duration: i64,
) -> RentalResult<()> {
    let category: Category = category.parse()?;
    let receipt = shop.process_return(RentalRequest::new(category, quantity, duration))?;
    shop.save_inventory()?;

    print!(
        "{}",
        format_return_receipt(&receipt, &settings.currency_symbol, &settings.timestamp_format)
    );
    Ok(())
}

/// Print the price of a rental without recording it
pub fn handle_quote_command(
    settings: &Settings,
    category: &str,
    duration: i64,
    hours: Option<i64>,
) -> RentalResult<()> {
    let category: Category = category.parse()?;
    print!(
        "{}",
        format_quote(category, duration, hours, &settings.currency_symbol)
    );
    Ok(())
}
