use clap::Parser;

use courier_rs::cli::{Cli, execute_command};
use courier_rs::config::ConfigLoader;
use courier_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()?;
    if let Some(path) = &cli.config {
        loader = loader.with_file(path.clone());
    }
    if let Some(env) = cli.env {
        loader = loader.with_environment(env);
    }

    let mut settings = loader.load()?;

    // --verbose / --quiet win over the configured level
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    init_logger(&settings.logger)?;

    tracing::debug!(
        environment = %loader.environment(),
        default_channel = %settings.notifications.default_channel,
        "configuration loaded",
    );

    execute_command(&cli, &settings).await?;

    Ok(())
}
