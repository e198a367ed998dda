use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::{log_tracer::SetLoggerError, LogTracer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

use crate::helper::error_chain_fmt;

/// Builds the subscriber used by every binary and test suite of the workspace.
///
/// Spans and events are filtered with `RUST_LOG`, falling back to `fallback_env_filter`
/// when the variable is not set, and written as bunyan-compatible JSON lines to `sink`.
///
/// # Arguments
/// - `name`: name of the app, added to every JSON record
/// - `fallback_env_filter`: filter directive used when `RUST_LOG` is unset (ex: "info")
/// - `sink`: where the records are written (`std::io::stdout`, `std::io::sink`, ...)
pub fn get_tracing_subscriber<Sink>(
    name: String,
    fallback_env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    // The sink must be able to hand out a writer for any lifetime
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_env_filter));

    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        // Stores span fields so child spans and events inherit them in the JSON output
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Registers `subscriber` as the global default and redirects `log` records to it.
///
/// Can only succeed once per process.
pub fn init_tracing_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), TelemetryError> {
    LogTracer::init()?;
    set_global_default(subscriber)?;

    Ok(())
}

#[derive(thiserror::Error)]
pub enum TelemetryError {
    #[error("Failed to redirect log records to tracing: {0}")]
    LogTracerError(#[from] SetLoggerError),
    #[error("Failed to set the global tracing subscriber: {0}")]
    GlobalDefaultError(#[from] SetGlobalDefaultError),
}

impl std::fmt::Debug for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
