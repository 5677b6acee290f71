use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use skustatus_cli::{Cli, CommandRunner};
use skustatus_infra::{CatalogConfig, JsonFileProductRepository};
use skustatus_status::CatalogStatusAdapter;

fn main() -> ExitCode {
    skustatus_observability::init("warn");

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CatalogConfig::from_env(cli.catalog).context("invalid configuration")?;

    let repository = JsonFileProductRepository::open(&config.catalog_path)
        .with_context(|| format!("failed to open catalog {}", config.catalog_path.display()))?;
    tracing::debug!(catalog = %config.catalog_path.display(), "catalog opened");

    let runner = CommandRunner::new(CatalogStatusAdapter::new(repository));
    let stdout = std::io::stdout();
    runner.run(&cli.command, &mut stdout.lock())?;
    Ok(())
}
