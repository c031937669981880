use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ecommerce_ledger::cli::{handle_audit_command, handle_export_command, ExportFormat, Menu};
use ecommerce_ledger::config::{LedgerPaths, Settings};
use ecommerce_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Terminal income and expense ledger for e-commerce",
    long_about = "Records income and expense transactions for a small online shop, \
                  keeps them in a binary snapshot file and reports totals, profit \
                  and the expense-to-income ratio."
)]
struct Cli {
    /// Directory holding the ledger files (defaults to the current directory)
    #[arg(long, env = "LEDGER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new(cli.data_dir)?;
    let settings = Settings::load_or_default(&paths)?;

    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let ledger = storage.load_ledger()?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(&storage, &settings, ledger, stdin.lock(), stdout.lock()).run()?;
        }
        Commands::Export { format, output } => {
            let ledger = storage.load_ledger()?;
            handle_export_command(&ledger, format, output)?;
        }
        Commands::Audit { limit } => {
            handle_audit_command(&storage, limit)?;
        }
        Commands::Init => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            if paths.settings_file().exists() {
                println!("Settings file already exists, leaving it unchanged.");
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Snapshot file:  {}", paths.snapshot_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Capacity:          {}", settings.capacity);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Description width: {}", settings.description_width);
            println!("  Audit enabled:     {}", settings.audit_enabled);
        }
    }

    Ok(())
}
