use clap::ValueEnum;
use miette::IntoDiagnostic;

use forge_dice::DiceRoller;
use forge_oracle::OracleSession;
use forge_shell::{ShellConfig, render};

/// Which persisted history to show.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HistoryKind {
    /// Dice rolls.
    Dice,
    /// Oracle answers, events and prompts.
    Oracle,
}

pub fn run(config: &ShellConfig, kind: HistoryKind, clear: bool, json: bool) -> miette::Result<()> {
    match kind {
        HistoryKind::Dice => {
            let store = config.dice_store().ok_or_else(not_persisted)?;
            let mut roller = DiceRoller::durable(store);
            if clear {
                roller.clear_history();
                println!("Dice history cleared.");
                return Ok(());
            }
            let entries = roller.history().entries();
            if json {
                println!("{}", serde_json::to_string_pretty(entries).into_diagnostic()?);
            } else if entries.is_empty() {
                println!("No rolls yet.");
            } else {
                println!("{}", render::dice_history_plain(entries));
            }
        }
        HistoryKind::Oracle => {
            let store = config.oracle_store().ok_or_else(not_persisted)?;
            let resolver = config.oracle_variant.resolver(config.modifier_die);
            let mut session = OracleSession::durable(resolver, store);
            if clear {
                session.clear();
                println!("Oracle history cleared.");
                return Ok(());
            }
            let entries = session.history().entries();
            if json {
                println!("{}", serde_json::to_string_pretty(entries).into_diagnostic()?);
            } else if entries.is_empty() {
                println!("No oracle history yet.");
            } else {
                println!("{}", render::oracle_history_plain(entries));
            }
        }
    }
    Ok(())
}

fn not_persisted() -> miette::Report {
    miette::miette!(
        help = "pass --data-dir or set FORGE_DATA_DIR, without --no-persist",
        "histories are not persisted in this configuration"
    )
}
