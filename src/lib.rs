#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod filters;
pub mod log_utils;

pub use cli::{handle_cli, parse_args, Config};
pub use error::CliError;
pub use filters::{Filter, FilterSet};
