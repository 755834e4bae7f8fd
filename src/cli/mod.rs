//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, ShowFormat};

use anyhow::Result;
use blogconf::{Provider, debug};

/// Build the provider the command operates on.
///
/// `--builtin` takes precedence over `--config`.
pub fn load_provider(cli: &Cli) -> Result<Provider> {
    if cli.builtin {
        debug!("config"; "using compiled-in site data");
        return Ok(Provider::builtin()?);
    }
    Ok(Provider::discover(&cli.config)?)
}
