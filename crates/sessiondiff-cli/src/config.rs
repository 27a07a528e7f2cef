use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

pub const BASELINE_ENV: &str = "SESSIONDIFF_BASELINE";
pub const HOLIDAY_ENV: &str = "SESSIONDIFF_HOLIDAY";

/// Resolves an input path: explicit argument first, then the environment.
pub fn resolve_input(
    explicit: Option<&PathBuf>,
    flag: &'static str,
    env_key: &'static str,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path.clone());
    }

    if let Some(path) = env::var_os(env_key) {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return Ok(path);
        }
    }

    Err(CliError::MissingInput { flag, env: env_key })
}

/// Installs the stderr log subscriber. `-v` flags override `RUST_LOG`.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
