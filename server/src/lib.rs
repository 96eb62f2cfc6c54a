#![deny(
    asm_sub_register,
    deprecated,
    missing_abi,
    unsafe_code,
    unused_macros,
    unused_must_use,
    unused_unsafe
)]
#![deny(clippy::from_over_into, clippy::needless_question_mark)]
#![cfg_attr(
    not(debug_assertions),
    deny(unused_imports, unused_mut, unused_variables,)
)]

pub mod config;
pub mod database;
pub mod error;

use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};

use config::Config;
use database::migration::{Migrator, MigratorTrait};
use error::{ServerError, ServerResult};

/// Connects to the database specified in the configuration.
pub async fn connect_database(config: &Config) -> ServerResult<DatabaseConnection> {
    Database::connect(&config.database.url)
        .await
        .map_err(ServerError::database_error)
}

/// Runs database migrations.
pub async fn run_migrations(config: Config) -> Result<()> {
    eprintln!("Running migrations...");

    let db = connect_database(&config).await?;
    Migrator::up(&db, None).await?;

    Ok(())
}
