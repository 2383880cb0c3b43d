use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = appraisal_cli::cli::Cli::parse();
    let configuration =
        appraisal_cli::get_configuration().context("failed to read configuration")?;

    if let Err(e) = appraisal_cli::logging::init(&cli, &configuration.logging) {
        eprintln!("Failed to start tracing: {e}");
    }

    appraisal_cli::run(cli.command, &configuration).await
}
