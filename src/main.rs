#[macro_use]
extern crate log;

use arriba_opts::{cli::usage::print_usage, handle_cli, CliError};

fn main() -> anyhow::Result<()> {
    match handle_cli() {
        Ok(cfg) => {
            debug!("{cfg:#?}");
            info!(
                "Configuration complete: {} filter(s) disabled",
                cfg.filters().disabled().count()
            );
            Ok(())
        }
        Err(e) => match e.downcast_ref::<CliError>() {
            Some(ce) if ce.shows_usage() => print_usage(ce.usage_message().as_deref()),
            Some(ce) => {
                eprintln!("ERROR: {ce}");
                std::process::exit(1)
            }
            None => Err(e),
        },
    }
}
