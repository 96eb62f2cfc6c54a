use anyhow::Result;
use clap::Parser;

use crate::Opts;
use depot_server::config::Config;
use depot_server::database::DepotDatabase;

/// List the files attached to a release.
#[derive(Debug, Parser)]
pub struct ListReleaseFiles {
    /// ID of the release.
    #[clap(long)]
    release_id: i64,
}

pub async fn run(config: Config, opts: Opts) -> Result<()> {
    let sub = opts.command.as_list_release_files().unwrap();

    let db = depot_server::connect_database(&config).await?;

    for release_file in db.list_release_files(sub.release_id).await? {
        println!("{}\t{}", release_file.ident, release_file.name);
    }

    Ok(())
}
