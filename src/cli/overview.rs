use clap::Parser;

use crate::{
    cli::snapshot::SnapshotArgs,
    overview::Overview,
    prelude::*,
    session::SessionContext,
    tables::build_overview_table,
};

#[derive(Parser)]
pub struct OverviewArgs {
    #[clap(flatten)]
    snapshot: SnapshotArgs,

    /// Include every environment, not only the signed-in user's.
    #[clap(long)]
    all: bool,
}

impl OverviewArgs {
    #[instrument(skip_all)]
    pub fn run(self, session: &SessionContext) -> Result {
        let user = session.current();
        if let Some(user) = &user {
            info!(user_id = %user.id, email = ?user.email, "hello, {}", user.first_name());
        }
        let owner_id = if self.all { None } else { user.as_ref().map(|user| user.id.as_str()) };

        let snapshot = self.snapshot.read()?;
        let overview = Overview::try_new(snapshot.environments()?, &snapshot.equipments, owner_id)
            .context("failed to aggregate the environments")?;
        println!("{}", build_overview_table(&overview));
        Ok(())
    }
}
