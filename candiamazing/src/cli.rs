//! Command-line interface.
//!
//! ```bash
//! candiamazing flux_to_mag 3631 8.9
//! candiamazing mag_to_flux 10 8.9
//! candiamazing self_test
//! candiamazing --config candiamazing.toml flux_to_mag 100 25
//! ```
//!
//! Argument errors are reported by clap with exit status 2. Values that parse
//! but fall outside a conversion's domain (flux ≤ 0) exit with status 1.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: overrides the configured log filter

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::ConverterConfig;
use crate::conversions::{flux_to_mag, mag_to_flux};
use crate::smoke::self_test;

/// Successful run, including `--help` and `--version`.
pub const EXIT_SUCCESS: i32 = 0;
/// A conversion or configuration error.
pub const EXIT_FAILURE: i32 = 1;

const EXAMPLES: &str = "Examples:
  candiamazing flux_to_mag 3631 8.9
  candiamazing mag_to_flux 10 8.9

Run `candiamazing <command> -h` for command-specific help.";

/// Convert between fluxes and magnitudes using a simple magnitude system.
#[derive(Parser, Debug)]
#[command(
    name = "candiamazing",
    version,
    after_help = EXAMPLES,
    subcommand_help_heading = "Available commands"
)]
pub struct Cli {
    /// TOML configuration file (output precision, log level)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert flux to magnitude
    #[command(name = "flux_to_mag", allow_negative_numbers = true)]
    FluxToMag {
        /// The flux value
        flux: f64,
        /// The zeropoint for the magnitude system
        zeropoint: f64,
    },

    /// Convert magnitude to flux
    #[command(name = "mag_to_flux", allow_negative_numbers = true)]
    MagToFlux {
        /// The magnitude value
        mag: f64,
        /// The zeropoint for the magnitude system
        zeropoint: f64,
    },

    /// Check that the installation computes known values correctly
    #[command(name = "self_test")]
    SelfTest,
}

/// Install the `env_logger` backend. Later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Run one parsed command and write its single line of output.
pub fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConverterConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConverterConfig::default(),
    };
    init_logging(&config.logging.level);
    if let Some(path) = &cli.config {
        log::info!(
            "Loaded configuration from {} ({} magnitude systems)",
            path.display(),
            config.systems.len()
        );
    }
    log::debug!("executing {:?}", cli.command);

    let line = match cli.command {
        Command::FluxToMag { flux, zeropoint } => {
            config.format_value(flux_to_mag(flux, zeropoint)?)
        }
        Command::MagToFlux { mag, zeropoint } => {
            config.format_value(mag_to_flux(mag, zeropoint)?)
        }
        Command::SelfTest => {
            self_test()?;
            "All tests passed!".to_string()
        }
    };
    writeln!(stdout, "{}", line)?;
    Ok(())
}

/// Parse `args` (program name first) and run, returning the process exit status.
///
/// Help and version text go to `stdout`; usage errors and conversion errors
/// go to `stderr`.
pub fn run<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let sink: &mut dyn Write = if err.use_stderr() { stderr } else { stdout };
            // Nothing left to report to if the stream is gone.
            write!(sink, "{}", err.render()).ok();
            return err.exit_code();
        }
    };

    match execute(&cli, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            writeln!(stderr, "error: {:#}", err).ok();
            EXIT_FAILURE
        }
    }
}
