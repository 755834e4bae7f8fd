//! Command-line interface definitions.

use blogconf::config::CONFIG_FILE;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validated site configuration for a personal blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = CONFIG_FILE,
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Use the compiled-in site data instead of a config file
    #[arg(long, global = true)]
    pub builtin: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,

        /// Only include social links with `active = true`
        #[arg(short, long)]
        active_only: bool,
    },

    /// Write a blog.toml populated with the compiled-in site data
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    #[default]
    Toml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["blogconf", "show"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        assert!(!cli.builtin);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Toml,
                active_only: false
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["blogconf", "show", "--format", "json", "-a", "--builtin", "-v"])
                .unwrap();
        assert!(cli.builtin);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Json,
                active_only: true
            }
        ));
    }

    #[test]
    fn test_init_args() {
        let cli = Cli::try_parse_from(["blogconf", "init", "site", "--force"]).unwrap();
        match cli.command {
            Commands::Init { dir, force, dry } => {
                assert_eq!(dir, Some(PathBuf::from("site")));
                assert!(force);
                assert!(!dry);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
