//! Envelope CLI commands
//!
//! Implements CLI commands for listing and editing the category budgets.

use clap::Subcommand;
use tracing::info;

use crate::config::paths::EnvelopePaths;
use crate::config::settings::Settings;
use crate::display::format_envelope_list;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::Money;
use crate::services::Ledger;

/// Envelope subcommands
#[derive(Subcommand)]
pub enum EnvelopeCommands {
    /// List all envelopes with their monthly budget
    #[command(alias = "ls")]
    List,

    /// Create an envelope or change its budget
    Set {
        /// Category name
        name: String,
        /// Monthly budget (e.g., "150" or "150,50")
        cap: String,
    },

    /// Remove an envelope
    #[command(alias = "rm")]
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle an envelope command
pub fn handle_envelope_command(
    paths: &EnvelopePaths,
    settings: &mut Settings,
    ledger: &mut Ledger,
    cmd: EnvelopeCommands,
) -> EnvelopeResult<()> {
    match cmd {
        EnvelopeCommands::List => {
            print!(
                "{}",
                format_envelope_list(&settings.envelopes, &settings.currency_symbol)
            );
            return Ok(());
        }

        EnvelopeCommands::Set { name, cap } => {
            let name = name.trim().to_string();
            let cap = Money::parse(&cap)
                .map_err(|e| EnvelopeError::Validation(format!("Invalid budget: {}", e)))?;
            let previous = settings
                .envelopes
                .set(name.clone(), cap)
                .map_err(|e| EnvelopeError::Validation(e.to_string()))?;

            match previous {
                Some(old) => println!(
                    "Updated envelope '{}': {} -> {}",
                    name,
                    settings.format_money(old),
                    settings.format_money(cap)
                ),
                None => println!(
                    "Created envelope '{}' with a budget of {}",
                    name,
                    settings.format_money(cap)
                ),
            }
        }

        EnvelopeCommands::Remove { name } => {
            if settings.envelopes.remove(&name).is_none() {
                return Err(EnvelopeError::envelope_not_found(name));
            }
            println!("Removed envelope '{}'", name);

            let orphaned = ledger
                .state()
                .transactions
                .iter()
                .filter(|txn| txn.category == name)
                .count();
            if orphaned > 0 {
                println!(
                    "Note: {} transaction(s) in '{}' are now outside every envelope.",
                    orphaned, name
                );
            }
        }
    }

    settings.save(paths)?;
    ledger.set_envelopes(settings.envelopes.clone());
    info!(envelopes = settings.envelopes.len(), "envelopes updated");
    Ok(())
}
