use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_book::cli::{handle_history_command, run_shell, BookCommands, Session};
use expense_book::config::{paths::BookPaths, settings::Settings};
use expense_book::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense book with category budgets",
    long_about = "Record expenses, tag them with categories, give each category a \
                  budget and see how much of it is left, from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Book(BookCommands),

    /// Start an interactive session that keeps the current view between requests
    #[command(alias = "repl")]
    Shell,

    /// Initialize a new expense book
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_logger() {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("expense_book=warn,{}=warn", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let paths = BookPaths::new()?;

    match cli.command {
        Some(Commands::Init) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Initializing expense book at: {}", paths.base_dir().display());
            initialize_storage(&paths, &settings)?;
            println!("Initialization complete!");
            println!();
            println!(
                "The '{}' category has been created for untagged expenses.",
                settings.default_category
            );
            println!("Run 'expense --help' for usage information.");
        }

        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Expense Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default category: {}", settings.default_category);
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }

        Some(Commands::History { limit }) => {
            let storage = Storage::new(paths)?;
            println!("{}", handle_history_command(&storage, limit)?);
        }

        Some(Commands::Shell) => {
            let mut session = Session::open(paths)?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run_shell(&mut session, stdin.lock(), io::stdout().lock(), interactive)?;
        }

        Some(Commands::Book(cmd)) => {
            let mut session = Session::open(paths)?;
            println!("{}", session.handle(cmd)?);
        }

        None => {
            let mut session = Session::open(paths)?;
            println!("{}", session.handle(BookCommands::Summary)?);
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
