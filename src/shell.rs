//! Interactive menu shell
//!
//! Presents the numbered menu, reads choices and dispatches to the [`Shop`].
//! The shell reads from any `BufRead` and writes to any `Write`, so it runs
//! the same against a terminal or an in-memory transcript.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_inventory, format_rental_receipt, format_return_receipt, format_revenue};
use crate::error::{RentalError, RentalResult};
use crate::models::{Category, RentalRequest};
use crate::services::Shop;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayInventory,
    Rent,
    Return,
    ShowRevenue,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection ("1" through "5")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::DisplayInventory),
            "2" => Some(Self::Rent),
            "3" => Some(Self::Return),
            "4" => Some(Self::ShowRevenue),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nBike Rental Shop\n\
                    1. Display available bikes\n\
                    2. Rent a bike\n\
                    3. Return a bike\n\
                    4. Display shop revenue\n\
                    5. Exit\n";

/// The interactive menu loop
pub struct Shell<'a, R, W> {
    shop: &'a mut Shop,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(shop: &'a mut Shop, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            shop,
            settings,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends, then save inventory
    ///
    /// Non-numeric quantities or durations end the loop with an error and
    /// leave the inventory file untouched.
    pub fn run(&mut self) -> RentalResult<()> {
        writeln!(self.output, "Inventory loaded successfully.")?;

        loop {
            write!(self.output, "{}", MENU)?;

            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                debug!("input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::DisplayInventory) => {
                    let pools = self.shop.display_inventory();
                    write!(self.output, "{}", format_inventory(&pools))?;
                }
                Some(MenuChoice::Rent) => self.rent()?,
                Some(MenuChoice::Return) => self.return_bikes()?,
                Some(MenuChoice::ShowRevenue) => {
                    let revenue = self.shop.revenue();
                    write!(
                        self.output,
                        "{}",
                        format_revenue(&self.settings.currency_symbol, revenue)
                    )?;
                }
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.shop.save_inventory()?;
        self.output.flush()?;
        Ok(())
    }

    fn rent(&mut self) -> RentalResult<()> {
        let name = self.prompt_required(
            "What type of rental would you like? (hourly, daily, weekly, or family): ",
        )?;
        let quantity = self.prompt_number("How many bikes would you like to rent? ")?;
        let duration =
            self.prompt_number("How many hours/days/weeks would you like to rent for? ")?;

        let category = match name.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                debug!(rental_type = %name, error = %e, "rental for unknown type");
                writeln!(
                    self.output,
                    "Sorry, we don't have that many bikes available for {} rental.",
                    name
                )?;
                return Ok(());
            }
        };

        match self
            .shop
            .process_rental(RentalRequest::new(category, quantity, duration))
        {
            Ok(receipt) => {
                let text = format_rental_receipt(&receipt, &self.settings.currency_symbol);
                write!(self.output, "{}", text)?;
            }
            Err(e) if e.is_rejection() => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn return_bikes(&mut self) -> RentalResult<()> {
        let name = self.prompt_required(
            "What type of rental did you have? (hourly, daily, weekly, or family): ",
        )?;
        let quantity = self.prompt_number("How many bikes did you rent? ")?;
        let duration = self.prompt_number("How many hours/days/weeks did you rent for? ")?;

        let category = match name.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                debug!(rental_type = %name, error = %e, "return for unknown type");
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let receipt = self
            .shop
            .process_return(RentalRequest::new(category, quantity, duration))?;
        let text = format_return_receipt(
            &receipt,
            &self.settings.currency_symbol,
            &self.settings.timestamp_format,
        );
        write!(self.output, "{}", text)?;

        Ok(())
    }

    /// Print a prompt and read one trimmed line; None at end of input
    fn prompt(&mut self, text: &str) -> RentalResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_required(&mut self, text: &str) -> RentalResult<String> {
        self.prompt(text)?
            .ok_or_else(|| RentalError::InvalidInput("unexpected end of input".into()))
    }

    fn prompt_number(&mut self, text: &str) -> RentalResult<i64> {
        let line = self.prompt_required(text)?;
        line.parse::<i64>()
            .map_err(|_| RentalError::InvalidInput(format!("expected a whole number, got '{}'", line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ShopPaths;
    use crate::storage::Storage;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_shop() -> (TempDir, Shop) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let shop = Shop::open(Storage::new(paths).unwrap()).unwrap();
        (temp_dir, shop)
    }

    fn run_script(shop: &mut Shop, script: &str) -> (RentalResult<()>, String) {
        let settings = Settings::default();
        let mut output = Vec::new();
        let result = Shell::new(shop, &settings, Cursor::new(script.as_bytes()), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::DisplayInventory));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("rent"), None);
    }

    #[test]
    fn test_display_then_exit() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "1\n5\n");

        result.unwrap();
        assert!(output.starts_with("Inventory loaded successfully."));
        assert!(output.contains("Hourly: 7\nDaily: 49\nWeekly: 17\n"));
    }

    #[test]
    fn test_rent_and_show_revenue() {
        let (temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "2\nhourly\n2\n3\n4\n5\n");

        result.unwrap();
        assert!(output.contains("You have rented 2 bike(s) for 3 hourly."));
        assert!(output.contains("Shop revenue: $15.00"));
        assert_eq!(shop.inventory().quantity(Category::Hourly), Some(5));
        assert!(fs::read_to_string(temp_dir.path().join("inventory.csv"))
            .unwrap()
            .contains("hourly,5"));
    }

    #[test]
    fn test_return_adds_revenue() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) =
            run_script(&mut shop, "2\nhourly\n2\n3\n3\nhourly\n2\n3\n5\n");

        result.unwrap();
        assert!(output.contains("You rented 2 bike(s) for 3 hour(s)."));
        assert!(output.contains("You returned the bike(s) at "));
        assert_eq!(shop.revenue(), 30.0);
        assert_eq!(shop.inventory().quantity(Category::Hourly), Some(7));
    }

    #[test]
    fn test_too_many_bikes() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "2\nweekly\n20\n1\n5\n");

        result.unwrap();
        assert!(output.contains("Sorry, we don't have that many bikes available for weekly rental."));
        assert_eq!(shop.revenue(), 0.0);
    }

    #[test]
    fn test_family_rental_is_refused() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "2\nfamily\n1\n1\n5\n");

        result.unwrap();
        assert!(output.contains("Sorry, we don't have that many bikes available for family rental."));
        assert_eq!(shop.revenue(), 0.0);
    }

    #[test]
    fn test_unknown_return_type_is_refused() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "3\nmonthly\n1\n1\n5\n");

        result.unwrap();
        assert!(output.contains("Unknown rental type: monthly"));
        assert_eq!(shop.revenue(), 0.0);
    }

    #[test]
    fn test_invalid_choice_reprints_menu() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "9\n5\n");

        result.unwrap();
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("1. Display available bikes").count(), 2);
    }

    #[test]
    fn test_negative_quantity_is_a_whole_number() {
        let (temp_dir, mut shop) = create_test_shop();
        let (result, output) =
            run_script(&mut shop, "2\nhourly\n2\n3\n2\nhourly\n-1\n1\n5\n");

        result.unwrap();
        assert!(output.contains("You have rented -1 bike(s) for 1 hourly."));
        assert_eq!(shop.inventory().quantity(Category::Hourly), Some(6));
        assert_eq!(shop.revenue(), 20.0);
        assert!(fs::read_to_string(temp_dir.path().join("inventory.csv"))
            .unwrap()
            .contains("hourly,6"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("revenue.csv")).unwrap(),
            "Revenue\n20.0\n"
        );
    }

    #[test]
    fn test_negative_duration_gives_negative_charge() {
        let (_temp_dir, mut shop) = create_test_shop();
        let (result, output) = run_script(&mut shop, "3\ndaily\n1\n-2\n5\n");

        result.unwrap();
        assert!(output.contains("Your rental cost is -$40.00."));
        assert_eq!(shop.revenue(), -40.0);
        assert_eq!(shop.inventory().quantity(Category::Daily), Some(50));
    }

    #[test]
    fn test_non_numeric_quantity_aborts_without_saving_inventory() {
        let (temp_dir, mut shop) = create_test_shop();
        shop.reserve_bikes(Category::Daily, 1);

        let (result, _output) = run_script(&mut shop, "2\ndaily\nmany\n");

        assert!(matches!(result, Err(RentalError::InvalidInput(_))));
        assert!(fs::read_to_string(temp_dir.path().join("inventory.csv"))
            .unwrap()
            .contains("daily,49"));
    }

    #[test]
    fn test_end_of_input_exits_and_saves() {
        let (temp_dir, mut shop) = create_test_shop();
        let (result, _output) = run_script(&mut shop, "2\ndaily\n3\n1\n");

        result.unwrap();
        assert!(fs::read_to_string(temp_dir.path().join("inventory.csv"))
            .unwrap()
            .contains("daily,46"));
    }
}
