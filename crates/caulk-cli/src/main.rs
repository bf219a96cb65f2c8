//! caulk CLI — serialization-contract enforcement for virtual-actor services.
//!
//! This binary provides the `caulk` command with subcommands for checking a
//! project snapshot and applying synthesized fixes. See `caulk --help`.

use clap::Parser;

mod cli_args;
mod commands;
mod snapshot;

use cli_args::{Cli, Commands, Format};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn caulk_output::OutputFormatter> = match cli.format {
        Format::Json => Box::new(caulk_output::json::JsonFormatter),
        Format::Human => Box::new(caulk_output::human::HumanFormatter),
    };

    let exit_code = match cli.command {
        Commands::Check { snapshot, strict } => {
            commands::check::run(&*formatter, cli.verbose, snapshot, strict)
        }
        Commands::Fix {
            snapshot,
            write,
            rule,
        } => commands::fix::run(&*formatter, cli.verbose, snapshot, write, rule),
    };

    std::process::exit(exit_code);
}
