use std::path::PathBuf;

use clap::ArgMatches;

use crate::error::CliError;

use super::{
    super::{
        checks::{find_index, index_candidates, is_readable, parent_directory_exists},
        cli_model::{FlagSpec, Handler, FLAGS},
        validate::{validate_float, validate_int, ValidationError},
        GtfFeatures, Strandedness,
    },
    Config, Escalation,
};

fn value_error(spec: &FlagSpec, e: ValidationError) -> CliError {
    match e {
        ValidationError::Malformed(value) => CliError::MalformedValue {
            flag: spec.token(),
            value,
        },
        ValidationError::OutOfRange { token, requirement } => CliError::OutOfRangeValue {
            flag: spec.token(),
            value: token,
            requirement,
        },
    }
}

/// Values of all value flags, in command line order
fn occurrences(m: &ArgMatches) -> Vec<(&'static FlagSpec, &str)> {
    let mut v: Vec<(usize, &'static FlagSpec, &str)> = Vec::new();
    for spec in FLAGS {
        match spec.handler {
            Handler::Escalate(_) | Handler::LogLevel | Handler::Help => (),
            _ => {
                if let (Some(ix), Some(vals)) =
                    (m.indices_of(spec.id), m.get_many::<String>(spec.id))
                {
                    v.extend(ix.zip(vals).map(|(i, s)| (i, spec, s.as_str())))
                }
            }
        }
    }
    v.sort_by_key(|(i, _, _)| *i);
    v.into_iter().map(|(_, spec, s)| (spec, s)).collect()
}

impl Config {
    /// Build the configuration from parsed command line matches.
    ///
    /// Flags are applied left to right, stopping at the first invalid one.
    /// Help is not looked at, and mandatory options are left to [`Config::check`].
    pub(crate) fn scan(m: &ArgMatches) -> Result<Self, CliError> {
        let mut cfg = Self::default();

        for (spec, value) in occurrences(m) {
            cfg.apply(spec, value)?;
        }

        for spec in FLAGS {
            if let Handler::Escalate(f) = spec.handler {
                let n = m.get_count(spec.id);
                if n > 0 {
                    debug!("{} given {} time(s)", spec.token(), n);
                }
                *cfg.escalation_mut(f) = Escalation::from_count(n);
            }
        }

        Ok(cfg)
    }

    /// Validate `value` for the flag described by `spec` and store it.
    ///
    /// On error the configuration is left unchanged.
    pub(crate) fn apply(&mut self, spec: &FlagSpec, value: &str) -> Result<(), CliError> {
        trace!("Applying {} {}", spec.token(), value);
        match spec.handler {
            Handler::Input(f) => {
                if !is_readable(value) {
                    return Err(CliError::FileNotReadable(PathBuf::from(value)));
                }
                *self.input_mut(f) = Some(PathBuf::from(value));
            }
            Handler::IndexedInput(f) => {
                if !is_readable(value) {
                    return Err(CliError::FileNotReadable(PathBuf::from(value)));
                }
                let index = find_index(value).ok_or_else(|| {
                    CliError::FileNotReadable(index_candidates(value).swap_remove(0))
                })?;
                debug!("Found index {} for {}", index.display(), value);
                *self.input_mut(f) = Some(PathBuf::from(value));
            }
            Handler::Output(f) => {
                if !parent_directory_exists(value) {
                    return Err(CliError::OutputDirectoryMissing(PathBuf::from(value)));
                }
                *self.output_mut(f) = Some(PathBuf::from(value));
            }
            Handler::Int(p, bounds) => {
                let x = validate_int(value, bounds).map_err(|e| value_error(spec, e))?;
                *self.int_mut(p) = u32::try_from(x).map_err(|_| CliError::OutOfRangeValue {
                    flag: spec.token(),
                    value: value.to_string(),
                    requirement: bounds.requirement(),
                })?;
            }
            Handler::Float(p, bounds) => {
                *self.float_mut(p) = validate_float(value, bounds).map_err(|e| value_error(spec, e))?;
            }
            Handler::Strandedness => {
                self.strandedness =
                    value
                        .parse::<Strandedness>()
                        .map_err(|value| CliError::InvalidEnumValue {
                            flag: spec.token(),
                            value,
                        })?;
            }
            Handler::Contigs => {
                let contigs = value.replace(',', " ");
                if contigs.trim().is_empty() {
                    return Err(CliError::MalformedValue {
                        flag: spec.token(),
                        value: value.to_string(),
                    });
                }
                self.interesting_contigs = contigs;
            }
            Handler::GtfFeatures => {
                let names = value.replace(',', " ");
                if names.trim().is_empty() {
                    return Err(CliError::MalformedValue {
                        flag: spec.token(),
                        value: value.to_string(),
                    });
                }
                self.gtf_features = names
                    .parse::<GtfFeatures>()
                    .map_err(|_| CliError::MalformedGtfFeatures(value.to_string()))?;
                self.gtf_feature_names = names;
            }
            Handler::DisableFilters => self
                .filters
                .disable_list(value)
                .map_err(|e| CliError::UnknownFilterName(e.0))?,
            // Counted by the scan (escalation, help) or read before it (log level)
            Handler::Escalate(_) | Handler::LogLevel | Handler::Help => (),
        }
        Ok(())
    }
}
