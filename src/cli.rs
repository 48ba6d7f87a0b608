use std::ffi::OsString;

use clap::ArgMatches;

use crate::{error::CliError, log_utils};

pub mod checks;
pub(crate) mod cli_model;
mod config;
mod escalation;
mod gtf_features;
mod strandedness;
pub mod usage;
pub mod validate;

pub use config::{Config, EscalatingFlag, FloatParam, InputFile, IntParam, OutputFile};
pub use escalation::Escalation;
pub use gtf_features::{GtfFeatures, DEFAULT_GTF_FEATURES};
pub use strandedness::Strandedness;

fn collect_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter().map(Into::into).collect()
}

/// Stop the scan at a command line problem found after the arguments matched by `scanned`.
///
/// Those earlier arguments are applied first, so an invalid value before the problem wins.
fn stop_after(scanned: Option<&ArgMatches>, e: CliError) -> CliError {
    match scanned.map(Config::scan) {
        Some(Err(first)) => first,
        _ => e,
    }
}

/// Scan `args` left to right, applying every flag in turn.
///
/// Clap only sees the whole argument vector at once, so it is given one more
/// argument at a time: the first prefix that fails to parse or asks for help
/// ends the scan, after the arguments before it have been applied. A missing
/// value is only final at the end of the line, as the next argument may be it.
fn scan(args: &[OsString]) -> Result<Config, CliError> {
    let cmd = cli_model::cli_model();
    let mut scanned: Option<ArgMatches> = None;
    let mut end = args.len().min(1);
    loop {
        let complete = end == args.len();
        match cmd.clone().try_get_matches_from(&args[..end]).map_err(CliError::from) {
            Ok(m) if cli_model::help_requested(&m) => {
                return Err(stop_after(scanned.as_ref(), CliError::HelpRequested))
            }
            Ok(m) if complete => return Config::scan(&m),
            Ok(m) => scanned = Some(m),
            Err(CliError::MissingFlagArgument(_)) if !complete => (),
            Err(e) => return Err(stop_after(scanned.as_ref(), e)),
        }
        end += 1;
    }
}

/// Parse a full argument vector (including the program name) into a [`Config`].
///
/// Nothing is printed and the process is never terminated; logging is not initialized.
pub fn parse_args<I, T>(args: I) -> Result<Config, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = collect_args(args);
    let cfg = scan(&args)?;
    cfg.check(args.len() <= 1)?;
    Ok(cfg)
}

/// Parse the arguments of the current process, setting up logging on the way.
///
/// Command line problems are returned as a [`CliError`] inside the `anyhow::Error`.
pub fn handle_cli() -> anyhow::Result<Config> {
    let args = collect_args(std::env::args_os());
    // Errors in the arguments are reported by the scan below
    if let Ok(m) = cli_model::cli_model().try_get_matches_from(&args) {
        log_utils::init_log(&m)?;
    }
    let cfg = scan(&args)?;
    cfg.check(args.len() <= 1)?;
    Ok(cfg)
}
