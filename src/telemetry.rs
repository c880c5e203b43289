use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (from `--log-level`) is used
/// as the filter directive. Logs go to stderr so report output on stdout
/// stays machine-readable.
pub fn init(level: &str) -> Result<(), Error> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            Error::Telemetry(format!("invalid log level/filter '{level}': {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Telemetry(err.to_string()))
}
