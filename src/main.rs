use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bike_rental::cli::{
    handle_inventory_command, handle_quote_command, handle_rent_command, handle_return_command,
    handle_revenue_command,
};
use bike_rental::config::{paths::ShopPaths, settings::Settings};
use bike_rental::services::Shop;
use bike_rental::shell::Shell;
use bike_rental::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bike-rental",
    version,
    about = "Inventory and revenue tracker for a bike rental shop",
    long_about = "Tracks how many hourly, daily and weekly bikes are on hand, \
                  prices rentals, and keeps the shop's running revenue in \
                  inventory.csv and revenue.csv. Run without a command for \
                  the interactive menu."
)]
struct Cli {
    /// Directory holding inventory.csv and revenue.csv (defaults to the current directory)
    #[arg(long, global = true, env = "BIKE_RENTAL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "menu")]
    Shell,

    /// Show available bikes per rental type
    Inventory,

    /// Show the shop's accumulated revenue
    Revenue,

    /// Rent bikes
    Rent {
        /// Rental type (hourly, daily or weekly)
        category: String,
        /// Number of bikes
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Number of hours, days or weeks
        #[arg(allow_negative_numbers = true)]
        duration: i64,
    },

    /// Return rented bikes
    Return {
        /// Rental type (hourly, daily or weekly)
        category: String,
        /// Number of bikes
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Number of hours, days or weeks
        #[arg(allow_negative_numbers = true)]
        duration: i64,
    },

    /// Price a rental without recording it
    Quote {
        /// Rental type (hourly, daily or weekly)
        category: String,
        /// Number of hours, days or weeks booked
        #[arg(allow_negative_numbers = true)]
        duration: i64,
        /// Number of periods actually used, if more than booked
        #[arg(long, allow_negative_numbers = true)]
        hours: Option<i64>,
    },

    /// Create the inventory, revenue and settings files with defaults
    Init,

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = ShopPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut shop = open_shop(&paths)?;
            let stdin = io::stdin();
            Shell::new(&mut shop, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Inventory => {
            let shop = open_shop(&paths)?;
            handle_inventory_command(&shop)?;
        }
        Commands::Revenue => {
            let shop = open_shop(&paths)?;
            handle_revenue_command(&shop, &settings)?;
        }
        Commands::Rent {
            category,
            quantity,
            duration,
        } => {
            let mut shop = open_shop(&paths)?;
            handle_rent_command(&mut shop, &settings, &category, quantity, duration)?;
        }
        Commands::Return {
            category,
            quantity,
            duration,
        } => {
            let mut shop = open_shop(&paths)?;
            handle_return_command(&mut shop, &settings, &category, quantity, duration)?;
        }
        Commands::Quote {
            category,
            duration,
            hours,
        } => {
            handle_quote_command(&settings, &category, duration, hours)?;
        }
        Commands::Init => {
            println!("Initializing bike rental shop at: {}", paths.base_dir().display());
            if bike_rental::storage::initialize_storage(&paths)? {
                println!("Created default inventory: hourly 7, daily 49, weekly 17.");
            } else {
                println!("Data files already exist; nothing to do.");
            }
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Bike Rental Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Inventory file: {}", paths.inventory_file().display());
            println!("Revenue file:   {}", paths.revenue_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
        }
    }

    Ok(())
}

fn open_shop(paths: &ShopPaths) -> Result<Shop> {
    let storage = Storage::new(paths.clone())?;
    Ok(Shop::open(storage)?)
}

/// Log to stderr so the menu transcript on stdout stays clean
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
