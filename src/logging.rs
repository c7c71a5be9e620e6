//! Initialises logging.

use tracing_subscriber::EnvFilter;

use crate::prelude::*;

/// Sets up the tracing subscriber on standard error.
///
/// The `FITLINE_LOG` environment variable overrides the verbosity flag.
pub fn init(verbosity: u8) -> Result {
    let filter = EnvFilter::try_from_env("FITLINE_LOG")
        .or_else(|_| EnvFilter::try_new(convert_verbosity_to_directive(verbosity)))?;
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn convert_verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fitline=warn",
        1 => "fitline=info",
        2 => "fitline=debug",
        _ => "fitline=trace",
    }
}
