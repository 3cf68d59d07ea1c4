use clap::{Parser, Subcommand};
use routelint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routelint",
    version,
    about = "Naming and filter-syntax linting for routing configuration records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a batch of route records from a JSON file
    Validate {
        /// Path to a JSON file with an array of route records (or one record)
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Apply the earlier rule revision: no mandatory '__inputId' clause,
        /// unknown destinations are skipped instead of failed
        #[arg(long)]
        legacy: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all built-in rules with descriptions
    #[command(name = "list-checks")]
    ListChecks,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "filter/index-wildcard")
        rule_id: String,
    },
}
