//! argstrip strips a known flag from its arguments and fails on leftovers.

use std::process::ExitCode;

use argstrip::{ArgstripError, Cli, Sanitizer, SanitizerConfig};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_verbatim();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("argstrip=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!("Logging initialized");

    let sanitizer = match Sanitizer::new(&SanitizerConfig::default()) {
        Ok(sanitizer) => sanitizer,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match sanitizer.check(&cli.lossy_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ArgstripError::Unconsumed(_)) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
