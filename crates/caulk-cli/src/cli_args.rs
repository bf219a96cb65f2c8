use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "caulk",
    version,
    about = "Serialization-contract enforcement for virtual-actor services"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Include progress detail on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Human,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Analyze a project snapshot and report contract diagnostics
    Check {
        /// Path to the snapshot JSON (semantic model + syntax trees)
        snapshot: String,
        /// Treat warnings as errors for the exit code
        #[arg(long)]
        strict: bool,
    },

    /// Synthesize and apply fixes for fixable diagnostics
    Fix {
        /// Path to the snapshot JSON (semantic model + syntax trees)
        snapshot: String,
        /// Write fixed sources back to disk (default: summary only)
        #[arg(long)]
        write: bool,
        /// Only apply fixes for these rule codes (e.g. A005)
        #[arg(long)]
        rule: Vec<String>,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
