use std::fmt;

use clap::{builder::PossibleValue, ArgMatches, ValueEnum};

pub const DEFAULT_LOGLEVEL: &str = "warn";

/// LogLevel
///
/// Minimum level of messages that will be logged. `None` silences logging
/// completely; fatal errors are still reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

impl LogLevel {
    fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Verbosity as understood by stderrlog
    pub fn verbosity(&self) -> usize {
        if self.is_none() {
            0
        } else {
            *self as usize
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Initialize logging from command line arguments.
///
/// Level tags are not printed; messages meant for the user carry their own prefix.
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let level = m
        .get_many::<LogLevel>("loglevel")
        .and_then(|v| v.last())
        .copied()
        .unwrap_or(LogLevel::Warn);

    stderrlog::new()
        .quiet(level.is_none())
        .verbosity(level.verbosity())
        .show_level(false)
        .init()?;
    debug!("Logging initialized at level {level}");
    Ok(())
}
