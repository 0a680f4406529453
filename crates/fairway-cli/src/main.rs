use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fairway_cli::{grouped_formats, list_formats, score_path};
use fairway_core::format_registry::{FormatCategory, GameMode};
use fairway_scoring::config::ScoringRules;

#[derive(Parser)]
#[command(name = "fairway")]
#[command(about = "Score golf rounds under catalog game formats")]
#[command(version)]
struct Cli {
    /// Path to a scoring rules TOML file (defaults to $FAIRWAY_CONFIG or ./fairway.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported game formats
    Formats {
        #[arg(long)]
        category: Option<CategoryArg>,

        /// Only formats offered in this game mode
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Group by category instead of a flat list
        #[arg(long, conflicts_with_all = ["category", "mode"])]
        grouped: bool,
    },

    /// Score a JSON round file and print the ranked outcome
    Score {
        file: PathBuf,

        /// Score under this format id instead of the one in the file
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Individual,
    TwoPlayer,
    FourPlayer,
}

impl From<CategoryArg> for FormatCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Individual => FormatCategory::Individual,
            CategoryArg::TwoPlayer => FormatCategory::TwoPlayerTeam,
            CategoryArg::FourPlayer => FormatCategory::FourPlayerTeam,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    League,
    Cup,
    Scorecard,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::League => GameMode::League,
            ModeArg::Cup => GameMode::Cup,
            ModeArg::Scorecard => GameMode::Scorecard,
        }
    }
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Logs go to stderr so stdout stays parseable JSON.
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_rules(path: Option<&str>) -> Result<ScoringRules> {
    let rules = match path {
        Some(path) => {
            let mut rules = ScoringRules::from_file(path)
                .with_context(|| format!("loading scoring rules from {path}"))?;
            rules.apply_overrides(|key| std::env::var(key).ok());
            rules
        },
        None => ScoringRules::load(),
    };
    rules.validate()?;
    Ok(rules)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let output = match cli.command {
        Commands::Formats {
            category,
            mode,
            grouped,
        } => {
            if grouped {
                serde_json::to_string_pretty(&grouped_formats())?
            } else {
                let formats = list_formats(category.map(Into::into), mode.map(Into::into));
                serde_json::to_string_pretty(&formats)?
            }
        },
        Commands::Score { file, format } => {
            let rules = load_rules(cli.config.as_deref())?;
            let outcome = score_path(&file, format.as_deref(), &rules)?;
            serde_json::to_string_pretty(&outcome)?
        },
    };

    println!("{output}");
    Ok(())
}
