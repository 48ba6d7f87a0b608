use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};

use crate::cli::cli_model::FlagSpec;

/// Everything that can stop the command line from turning into a [`Config`](crate::cli::Config).
///
/// All variants are fatal. The caller decides how to report them, see [`CliError::shows_usage`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("File '{}' not found.", .0.display())]
    FileNotReadable(PathBuf),
    #[error("Parent directory of output file '{}' does not exist.", .0.display())]
    OutputDirectoryMissing(PathBuf),
    #[error("Argument to {flag} must be {requirement}: '{value}'")]
    OutOfRangeValue {
        flag: String,
        value: String,
        requirement: String,
    },
    #[error("Invalid argument to {flag}: '{value}'")]
    MalformedValue { flag: String, value: String },
    #[error("Invalid argument to option -f: {0}")]
    UnknownFilterName(String),
    #[error("Unknown option: {0}")]
    UnknownFlag(String),
    #[error("Option {0} requires an argument.")]
    MissingFlagArgument(String),
    #[error("Missing mandatory option: {0}")]
    MissingMandatoryField(&'static str),
    #[error("Invalid argument to {flag}: {value}")]
    InvalidEnumValue { flag: String, value: String },
    #[error("Filter '{filter}' enabled, but missing option: {flag}")]
    CrossFieldConstraintViolation {
        filter: &'static str,
        flag: &'static str,
    },
    #[error("Malformed GTF features: {0}")]
    MalformedGtfFeatures(String),
    #[error("{0}")]
    CommandLine(String),
    #[error("No arguments given.")]
    NoArguments,
    #[error("Help requested")]
    HelpRequested,
}

impl CliError {
    /// True when the full usage text should be printed instead of a single error line
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::NoArguments | Self::HelpRequested)
    }

    /// Message to put above the usage text (none for an explicit help request)
    pub fn usage_message(&self) -> Option<String> {
        match self {
            Self::HelpRequested => None,
            e => Some(e.to_string()),
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        // Clap describes the argument as e.g. `--chimeric-alignments <FILE>`; keep only the flag
        let arg = e
            .get(ContextKind::InvalidArg)
            .map(|a| a.to_string())
            .and_then(|a| a.split_whitespace().next().map(String::from))
            .unwrap_or_default();
        // Known flags are reported by their short token like every other diagnostic
        let flag = || FlagSpec::find(&arg).map_or_else(|| arg.clone(), FlagSpec::token);
        match e.kind() {
            ErrorKind::UnknownArgument => Self::UnknownFlag(arg.clone()),
            ErrorKind::InvalidValue => match e.get(ContextKind::InvalidValue) {
                Some(ContextValue::String(v)) if !v.is_empty() => Self::InvalidEnumValue {
                    flag: flag(),
                    value: v.clone(),
                },
                _ => Self::MissingFlagArgument(flag()),
            },
            ErrorKind::NoEquals => Self::MissingFlagArgument(flag()),
            _ => Self::CommandLine(
                e.render()
                    .to_string()
                    .trim()
                    .trim_start_matches("error: ")
                    .to_string(),
            ),
        }
    }
}
