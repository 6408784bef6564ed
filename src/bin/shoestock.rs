//! shoestock binary
//!
//! Runs the interactive inventory menu, or a single listing command.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shoestock::menu::MenuController;
use shoestock::report::{format_currency, render_table, EMPTY_NOTICE};
use shoestock::{Config, InventoryStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Shoe inventory manager
#[derive(Parser, Debug)]
#[command(name = "shoestock")]
#[command(about = "Manage a shoe inventory stored in a comma-delimited file")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, default_value = Config::DEFAULT_INVENTORY_FILE)]
    file: PathBuf,

    /// Currency symbol for value columns
    #[arg(short, long, default_value = "$")]
    currency: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Run one command instead of the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every shoe
    List,

    /// List every shoe with its stock value
    Value,

    /// Show the shoe with a given code
    Search {
        /// The shoe code (case-sensitive)
        code: String,
    },

    /// Show the shoe with the highest quantity
    Sales,

    /// Show the shoe with the lowest quantity
    RestockCandidate,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so the menu on stdout stays readable
    let default_filter = if args.verbose { "warn,shoestock=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = Config::builder()
        .inventory_path(&args.file)
        .currency_symbol(&args.currency)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    tracing::debug!("shoestock v{}", shoestock::VERSION);
    tracing::debug!("Inventory file: {}", args.file.display());

    let store = InventoryStore::open(config);

    match args.command {
        Some(command) => run_command(&store, command),
        None => {
            let stdin = io::stdin();
            let mut controller = MenuController::new(store, stdin.lock(), io::stdout());
            if let Err(e) = controller.run() {
                tracing::error!("Menu stopped: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_command(store: &InventoryStore, command: Commands) {
    let symbol = &store.config().currency_symbol;

    match command {
        Commands::List => println!("{}", render_table(store.inventory(), false, symbol)),
        Commands::Value => {
            println!("{}", render_table(store.inventory(), true, symbol));
            if !store.is_empty() {
                println!();
                println!("Total value: {}", format_currency(store.total_value(), symbol));
            }
        }
        Commands::Search { code } => {
            if store.is_empty() {
                println!("{}", EMPTY_NOTICE);
                return;
            }
            match store.search_by_code(&code) {
                Some(record) => println!("{}", record),
                None => println!("Shoe code {} was not found.", code),
            }
        }
        Commands::Sales => match store.highest_quantity() {
            Some(record) => {
                println!("Due to high quantity, the following shoe is on sale:");
                println!("{}", record);
            }
            None => println!("{}", EMPTY_NOTICE),
        },
        Commands::RestockCandidate => match store.lowest_quantity() {
            Some(record) => {
                println!("The shoe with the lowest quantity is:");
                println!("{}", record);
            }
            None => println!("{}", EMPTY_NOTICE),
        },
    }
}
