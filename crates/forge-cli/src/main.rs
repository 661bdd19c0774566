//! Command-line dice roller and oracle for tabletop sessions.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use forge_oracle::OracleVariant;
use forge_shell::{ShellConfig, WidgetKind};
use tracing_subscriber::EnvFilter;

use commands::history::HistoryKind;

#[derive(Parser)]
#[command(
    name = "forge",
    about = "Forge: dice roller and yes/no oracle for tabletop sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory holding persisted histories
    #[arg(long, global = true, env = "FORGE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep histories for this run only
    #[arg(long, global = true)]
    no_persist: bool,

    /// Use colours suited to a dark terminal
    #[arg(long, global = true)]
    dark: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Put dice in a fresh tray and roll them once (e.g. `forge roll 2d6 d20`)
    Roll {
        /// Dice to roll: d4, d6, d8, d10, d12, d20, d100, optionally with a count
        #[arg(required = true)]
        dice: Vec<String>,

        /// Roll each expression on its own, allowing any number of sides
        #[arg(long)]
        custom: bool,
    },

    /// Ask the oracle a yes/no question
    Ask {
        /// Likelihood: impossible, unlikely, even odds, likely, certain
        likelihood: Vec<String>,

        /// Use the 2d6 narrative table instead of a likelihood
        #[arg(long)]
        narrative: bool,

        /// Roll a modifier die that can add "but" or "and"
        #[arg(long)]
        modifier: bool,
    },

    /// Draw an inspiration seed
    Inspire,

    /// Show or clear a persisted history
    History {
        /// Which history: dice or oracle
        #[arg(value_enum)]
        widget: HistoryKind,

        /// Forget every entry
        #[arg(long)]
        clear: bool,

        /// Print the raw entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive dice roller
    Dice,

    /// Start an interactive oracle
    Oracle {
        /// Use the 2d6 narrative table instead of a likelihood
        #[arg(long)]
        narrative: bool,

        /// Roll a modifier die that can add "but" or "and"
        #[arg(long)]
        modifier: bool,
    },
}

impl Cli {
    fn config(&self) -> ShellConfig {
        let config = ShellConfig::default()
            .with_seed(self.seed)
            .with_persistence(!self.no_persist)
            .with_dark(self.dark);
        match &self.data_dir {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        }
    }
}

fn oracle_config(config: ShellConfig, narrative: bool, modifier: bool) -> ShellConfig {
    let variant = if narrative {
        OracleVariant::Narrative
    } else {
        OracleVariant::Likelihood
    };
    config.with_oracle_variant(variant).with_modifier_die(modifier)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("forge=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forge=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config();
    if config.data_dir.is_none() {
        tracing::debug!("no data directory, histories last for this run only");
    }

    let result = match cli.command {
        Commands::Roll { dice, custom } => commands::roll::run(&config, &dice, custom),
        Commands::Ask {
            likelihood,
            narrative,
            modifier,
        } => commands::ask::run(&oracle_config(config, narrative, modifier), &likelihood),
        Commands::Inspire => commands::ask::inspire(&config),
        Commands::History {
            widget,
            clear,
            json,
        } => commands::history::run(&config, widget, clear, json),
        Commands::Dice => commands::repl::run(WidgetKind::Dice, &config),
        Commands::Oracle {
            narrative,
            modifier,
        } => commands::repl::run(
            WidgetKind::Oracle,
            &oracle_config(config, narrative, modifier),
        ),
    };

    if let Err(report) = result {
        eprintln!("error: {report}");
        if let Some(help) = report.help() {
            eprintln!("  help: {help}");
        }
        process::exit(1);
    }
}
