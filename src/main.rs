use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use envelope_ledger::cli::{
    handle_debt_command, handle_envelope_command, handle_export_command, handle_history_command,
    handle_import_command, handle_income_command, handle_month_command, handle_recap_command,
    handle_summary_command, handle_transaction_command, DebtCommands, EnvelopeCommands,
    ExportFormat, IncomeCommands, MonthCommands, TransactionCommands,
};
use envelope_ledger::config::{paths::EnvelopePaths, settings::Settings};
use envelope_ledger::display::format_envelope_list;
use envelope_ledger::export::RecapFormat;
use envelope_ledger::models::MonthKey;
use envelope_ledger::services::Ledger;
use envelope_ledger::storage::Storage;

const LOG_ENV: &str = "ENVELOPE_LOG";

#[derive(Parser)]
#[command(
    name = "envelope",
    author = "Kaylee Beyene",
    version,
    about = "Household envelope budgeting from the terminal",
    long_about = "Envelope Ledger tracks a household budget split into envelopes: \
                  set a monthly budget per category, record income and expenses, \
                  and see what is left in each envelope and how much you save."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger with the default envelopes
    Init,

    /// Show current configuration and paths
    Config,

    /// Envelope (category budget) commands
    #[command(subcommand)]
    Envelope(EnvelopeCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Show balances, totals and savings
    Summary {
        /// Only count one month's transactions (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },

    /// Show the monthly history
    History,

    /// Write a recap document
    Recap {
        /// Output file path
        output: PathBuf,
        /// Recap format
        #[arg(short, long, value_enum, default_value_t = RecapFormat::Html)]
        format: RecapFormat,
        /// Only count one month's transactions (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Replace the ledger with an exported JSON file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Per-month transaction files
    #[command(subcommand)]
    Month(MonthCommands),

    /// Set the household display name
    User {
        /// Display name
        name: String,
    },
}

impl Commands {
    /// Whether the command changes the ledger state and needs saving
    fn mutates_ledger(&self) -> bool {
        self.changes_figures()
            || self.recomputes()
            || matches!(
                self,
                Commands::Debt(DebtCommands::Add { .. }) | Commands::User { .. }
            )
    }

    /// Whether the command changes income, spend or envelope caps and
    /// needs a recomputation pass before saving
    fn changes_figures(&self) -> bool {
        matches!(
            self,
            Commands::Income(IncomeCommands::Set { .. })
                | Commands::Transaction(TransactionCommands::Add { .. })
                | Commands::Envelope(EnvelopeCommands::Set { .. })
                | Commands::Envelope(EnvelopeCommands::Remove { .. })
                | Commands::Month(MonthCommands::Open { .. })
                | Commands::Import { .. }
        )
    }

    /// Whether the handler runs its own recomputation pass
    fn recomputes(&self) -> bool {
        matches!(self, Commands::Summary { .. } | Commands::Recap { .. })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("envelope_ledger=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EnvelopePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Envelope Ledger - household envelope budgeting");
        println!();
        println!("Run 'envelope --help' for usage information.");
        println!("Run 'envelope init' to get started.");
        return Ok(());
    };

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match command {
        Commands::Init => {
            println!("Initializing Envelope Ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let state = storage.session.load(&settings.username)?.into_inner();
            storage.session.save(&state)?;
            println!("Initialization complete!");
            println!();
            println!("Envelopes:");
            print!(
                "{}",
                format_envelope_list(&settings.envelopes, &settings.currency_symbol)
            );
            println!();
            println!("Run 'envelope income set' and 'envelope transaction add' to begin.");
            return Ok(());
        }
        Commands::Config => {
            println!("Envelope Ledger Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", paths.session_file().display());
            println!("Month files:      {}", paths.months_dir().display());
            println!();
            println!("Settings:");
            println!("  User:                  {}", settings.username);
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Envelopes:             {}", settings.envelopes.len());
            println!(
                "  Low savings threshold: {}",
                settings.format_money(settings.low_savings_threshold)
            );
            return Ok(());
        }
        _ => {}
    }

    let loaded = storage.session.load(&settings.username)?;
    if loaded.is_fresh() && !storage.is_initialized() {
        eprintln!("Note: no ledger found, using defaults. Run 'envelope init' to set one up.");
    }
    let mut ledger = Ledger::new(loaded.into_inner(), settings.envelopes.clone());

    let mutates = command.mutates_ledger();
    let changes_figures = command.changes_figures();

    match command {
        Commands::Init | Commands::Config => {}
        Commands::Envelope(cmd) => {
            handle_envelope_command(&paths, &mut settings, &mut ledger, cmd)?;
        }
        Commands::Income(cmd) => {
            handle_income_command(&settings, &mut ledger, cmd)?;
        }
        Commands::Transaction(cmd) => {
            handle_transaction_command(&settings, &mut ledger, cmd)?;
        }
        Commands::Debt(cmd) => {
            handle_debt_command(&settings, &mut ledger, cmd)?;
        }
        Commands::Summary { month } => {
            handle_summary_command(&settings, &mut ledger, month)?;
        }
        Commands::History => {
            handle_history_command(&settings, &ledger)?;
        }
        Commands::Recap {
            output,
            format,
            month,
        } => {
            handle_recap_command(&settings, &mut ledger, output, format, month)?;
        }
        Commands::Export { output, format } => {
            handle_export_command(&ledger, output, format)?;
        }
        Commands::Import { file } => {
            handle_import_command(&mut ledger, &file)?;
        }
        Commands::Month(cmd) => {
            handle_month_command(&storage, &mut ledger, cmd)?;
        }
        Commands::User { name } => {
            let name = name.trim().to_string();
            ledger.set_username(name.clone());
            settings.username = name.clone();
            settings.save(&paths)?;
            println!("Display name set to '{}'", name);
        }
    }

    if mutates {
        if changes_figures {
            ledger.recompute(MonthKey::current());
        }
        storage.session.save(ledger.state())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        let cli = Cli::try_parse_from(std::iter::once("envelope").chain(args.iter().copied()))
            .unwrap();
        cli.command.unwrap()
    }

    #[test]
    fn test_bookkeeping_commands_skip_recomputation() {
        for args in [&["user", "Camille"][..], &["debt", "add", "Prêt", "100", "10"][..]] {
            let cmd = parse(args);
            assert!(cmd.mutates_ledger(), "{:?} should be saved", args);
            assert!(!cmd.changes_figures(), "{:?} should not recompute", args);
        }
    }

    #[test]
    fn test_figure_commands_recompute() {
        for args in [
            &["income", "set", "1", "0", "0", "0"][..],
            &["transaction", "add", "Loyer", "10"][..],
            &["envelope", "set", "Vacances", "80"][..],
            &["envelope", "remove", "Vacances"][..],
            &["month", "open", "2025-01"][..],
            &["import", "ledger.json"][..],
        ] {
            assert!(parse(args).changes_figures(), "{:?} should recompute", args);
        }
        assert!(parse(&["summary"]).recomputes());
        assert!(!parse(&["summary"]).changes_figures());
        assert!(!parse(&["history"]).mutates_ledger());
    }
}
