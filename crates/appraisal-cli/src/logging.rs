use anyhow::bail;
use appraisal_shared::telemetry;

use crate::{cli::Cli, LoggingSettings};

const APP_NAME: &str = "appraisal_cli";

pub fn init(cli: &Cli, settings: &LoggingSettings) -> anyhow::Result<()> {
    fn init_to_file(settings: &LoggingSettings) -> anyhow::Result<()> {
        let (file, filename) = telemetry::create_trace_file(&settings.directory, APP_NAME)?;
        let subscriber =
            telemetry::get_subscriber(APP_NAME.into(), &settings.default_filter, file);

        // Start logging to file
        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {filename:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out {
        // Log to file
        match init_to_file(settings) {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    // Log to stdout
    match tracing_subscriber::fmt()
        .with_env_filter(&settings.default_filter)
        .try_init()
    {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
