use std::path::Path;

use anyhow::bail;
use beerscanner_shared::telemetry;

const APP_NAME: &str = "beerscanner";

/// Logs go to a new file in `log_folder` unless the command line asks for
/// stdout. Falls back to stdout if the file cannot be used.
pub fn init(cli: &super::cli::Cli, log_folder: &Path) -> anyhow::Result<()> {
    fn init_to_file(log_folder: &Path) -> anyhow::Result<()> {
        let trace_file = telemetry::create_trace_file(log_folder, APP_NAME)?;
        let subscriber = telemetry::json_subscriber(APP_NAME, "info", trace_file.file);

        match telemetry::init_subscriber(subscriber) {
            // Stderr so command output on stdout stays clean for scripts
            Ok(_) => {
                eprintln!("Tracing started to file {:?}", trace_file.path);
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out {
        match init_to_file(log_folder) {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    match tracing_subscriber::fmt().try_init() {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
