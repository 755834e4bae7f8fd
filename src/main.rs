//! blogconf - check, print and scaffold a blog's site configuration.

mod cli;

use anyhow::Result;
use blogconf::{Provider, config::init_provider, log, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Configuration errors are fatal
    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { dir, force, dry } => cli::init::new_config(dir.as_deref(), *force, *dry),
        Commands::Check => cli::check::check_config(load(cli)?),
        Commands::Show {
            format,
            active_only,
        } => cli::show::show_config(load(cli)?, *format, *active_only),
    }
}

/// Load, validate and install the process-wide provider.
fn load(cli: &Cli) -> Result<&'static Provider> {
    Ok(init_provider(cli::load_provider(cli)?)?)
}
