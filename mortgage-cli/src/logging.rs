use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG`, falling back to `default_directive`.
fn make_filter(default_directive: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|e| anyhow!("invalid log level '{default_directive}': {e}")),
    }
}

/// Initialises the tracing subscriber. Call once at startup.
///
/// * Honours `RUST_LOG` when set.
/// * Writes to stderr so stdout only carries calculator output.
/// * Strips timestamps and target names to keep CLI output clean.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = make_filter(default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {e}"))
}
