mod command;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use enum_as_inner::EnumAsInner;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use command::list_release_files::{self, ListReleaseFiles};
use command::migrate_database::{self, MigrateDatabase};
use depot_server::config;

/// Depot server administration utilities.
#[derive(Debug, Parser)]
#[clap(version)]
#[clap(propagate_version = true)]
pub struct Opts {
    /// Path to the config file.
    #[clap(short = 'f', long)]
    config: Option<PathBuf>,

    /// The sub-command.
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, EnumAsInner)]
pub enum Command {
    MigrateDatabase(MigrateDatabase),
    ListReleaseFiles(ListReleaseFiles),
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    init_logging();

    let config = config::load_config(opts.config.as_deref())?;

    match opts.command {
        Command::MigrateDatabase(_) => migrate_database::run(config, opts).await?,
        Command::ListReleaseFiles(_) => list_release_files::run(config, opts).await?,
    }

    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(env_filter);

    let error_layer = ErrorLayer::default();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(error_layer)
        .init();
}
