//! Structured (bunyan JSON) logging to a file for native clients

use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, Local};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt as _, EnvFilter, Registry};

/// A freshly created log file
#[derive(Debug)]
pub struct TraceFile {
    pub file: File,
    pub path: PathBuf,
}

/// Builds a subscriber that writes every event as one JSON line to `sink`.
///
/// `RUST_LOG` takes precedence over `default_directive` when it is set. For
/// the accepted syntax see <https://docs.rs/tracing-subscriber/0.3.19/tracing_subscriber/filter/struct.EnvFilter.html#directives>
pub fn json_subscriber<Sink>(
    app_name: &str,
    default_directive: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(app_name.to_string(), sink))
}

/// Installs `subscriber` for the whole process and forwards `log` records to
/// it. Fails if called a second time.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("failed to forward log records")?;
    set_global_default(subscriber).context("failed to set the global subscriber")?;
    Ok(())
}

/// Creates `log_folder` if needed and a new file in it named after the
/// current time, so every run gets its own file
pub fn create_trace_file(log_folder: &Path, app_name: &str) -> anyhow::Result<TraceFile> {
    create_dir_all(log_folder)
        .with_context(|| format!("failed to create log folder {log_folder:?}"))?;
    let path = log_folder.join(trace_filename(app_name, Local::now()));
    let file =
        File::create(&path).with_context(|| format!("failed to create log file {path:?}"))?;
    Ok(TraceFile { file, path })
}

fn trace_filename(app_name: &str, started: DateTime<Local>) -> String {
    format!("{}_{app_name}.log", started.format("%Y-%m-%dT%H-%M-%S"))
}
