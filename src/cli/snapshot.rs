use std::path::PathBuf;

use clap::Parser;

use crate::{prelude::*, snapshot::Snapshot};

#[derive(Parser)]
pub struct SnapshotArgs {
    /// JSON export of the `environments` and `equipments` tables.
    #[clap(long = "snapshot", env = "SNAPSHOT_PATH")]
    path: PathBuf,
}

impl SnapshotArgs {
    pub fn read(&self) -> Result<Snapshot> {
        Snapshot::read(&self.path)
    }
}
