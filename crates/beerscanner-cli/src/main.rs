#![warn(clippy::all, rust_2018_idioms)]

use std::process::ExitCode;

use beerscanner_cli::{cli::Cli, configuration::get_configuration, App};
use clap::Parser as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = beerscanner_cli::tracing::init(&args, &configuration.logging.folder) {
        eprintln!("Failed to start tracing: {e}");
    }

    let app = match App::new(&configuration) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = std::io::stdout().lock();
    match app.run(args.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
