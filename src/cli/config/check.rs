use crate::{error::CliError, filters::Filter};

use super::{Config, InputFile, OutputFile};

impl Config {
    /// Checks run once the whole command line has been applied.
    ///
    /// The first missing mandatory option is reported. A missing read-through
    /// alignment file only triggers a warning.
    pub(crate) fn check(&self, no_args: bool) -> Result<(), CliError> {
        if no_args {
            return Err(CliError::NoArguments);
        }
        if self.input_file(InputFile::ChimericAlignments).is_none() {
            return Err(CliError::MissingMandatoryField("-c"));
        }
        if self.input_file(InputFile::ReadThroughAlignments).is_none() {
            warn!("WARNING: missing option: -r, no read-through fusions will be detected");
        }
        let mandatory = [
            (self.input_file(InputFile::RnaAlignments), "-x"),
            (self.input_file(InputFile::GeneAnnotation), "-g"),
            (self.output_file(OutputFile::Fusions), "-o"),
            (self.input_file(InputFile::Assembly), "-a"),
        ];
        if let Some((_, flag)) = mandatory.iter().find(|(p, _)| p.is_none()) {
            return Err(CliError::MissingMandatoryField(*flag));
        }
        if self.filter_enabled(Filter::Blacklist) && self.blacklist.is_none() {
            return Err(CliError::CrossFieldConstraintViolation {
                filter: Filter::Blacklist.name(),
                flag: "-b",
            });
        }
        debug!("All mandatory options present");
        Ok(())
    }
}
