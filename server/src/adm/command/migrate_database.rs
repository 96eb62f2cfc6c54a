use anyhow::Result;
use clap::Parser;

use crate::Opts;
use depot_server::config::Config;

/// Run pending database migrations.
#[derive(Debug, Parser)]
pub struct MigrateDatabase {}

pub async fn run(config: Config, _opts: Opts) -> Result<()> {
    depot_server::run_migrations(config).await?;

    eprintln!("All migrations applied.");

    Ok(())
}
