//! Proofman CLI - indexes the Archive of Formal Proofs into per-package
//! dependency manifests.

mod commands;
mod config;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::index_afp::{run_index_afp, IndexAfpArgs};
use config::ProofmanSettings;
use error::{CliError, Result};

/// Proofman - dependency indexer for the Archive of Formal Proofs.
#[derive(Parser, Debug)]
#[command(name = "proofman")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve AFP package dependencies into proofman.toml manifests", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show less logging output.
    #[arg(short, long, global = true, env = "PROOFMAN_QUIET")]
    quiet: bool,

    /// Show more logging output.
    #[arg(short, long, global = true, env = "PROOFMAN_VERBOSE")]
    verbose: bool,

    /// Path to a configuration file.
    #[arg(short, long, global = true, env = "PROOFMAN_CONFIG")]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Index an AFP checkout, writing a proofman.toml into every package.
    IndexAfp(IndexAfpCommandArgs),
}

#[derive(Parser, Debug)]
struct IndexAfpCommandArgs {
    /// Path to the AFP working directory.
    #[arg(long)]
    afp_path: String,

    /// URL of the index repository the result would be pushed to.
    #[arg(long, default_value = "")]
    index_url: String,

    /// Override the detected Isabelle/AFP version instead of reading
    /// `<afp-path>/etc/version`.
    #[arg(long)]
    version_override: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose)?;

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::IndexAfp(args) => execute_index_afp(args, cli.verbose, settings),
    }
}

/// Three logging tiers, mirroring the original tool's quiet/unquiet/verbose
/// levels: `--quiet` drops to `warn`, the default is `info`, `--verbose`
/// (checked last, so it wins if both flags are given) raises it to `debug`.
fn init_logging(quiet: bool, verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::new("info");
    if quiet {
        filter = EnvFilter::new("warn");
    }
    if verbose {
        filter = EnvFilter::new("debug");
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false))
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_settings(config_path: Option<&std::path::Path>) -> Result<ProofmanSettings> {
    match config_path {
        Some(path) => ProofmanSettings::load_from_path(path),
        None => ProofmanSettings::load(),
    }
}

fn execute_index_afp(args: IndexAfpCommandArgs, verbose: bool, settings: ProofmanSettings) -> Result<()> {
    let index_afp_args = IndexAfpArgs {
        afp_path: args.afp_path,
        index_url: if args.index_url.is_empty() {
            settings.index_repository_url.unwrap_or_default()
        } else {
            args.index_url
        },
        version_override: args.version_override.or(settings.version_override),
        verbose: verbose || settings.verbose,
    };

    run_index_afp(index_afp_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_afp_subcommand() {
        let cli = Cli::parse_from(["proofman", "index-afp", "--afp-path", "/opt/afp"]);
        match cli.command {
            Commands::IndexAfp(args) => assert_eq!(args.afp_path, "/opt/afp"),
        }
    }

    #[test]
    fn parses_version_override() {
        let cli = Cli::parse_from(["proofman", "index-afp", "--afp-path", "/opt/afp", "--version-override", "2099"]);
        match cli.command {
            Commands::IndexAfp(args) => assert_eq!(args.version_override.as_deref(), Some("2099")),
        }
    }

    #[test]
    fn global_verbose_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["proofman", "--verbose", "index-afp", "--afp-path", "/opt/afp"]);
        assert!(cli.verbose);
    }

    #[test]
    fn global_quiet_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["proofman", "--quiet", "index-afp", "--afp-path", "/opt/afp"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }
}
