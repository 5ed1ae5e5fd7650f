use clap::Parser;

use crate::{
    cli::snapshot::SnapshotArgs,
    prelude::*,
    simulation::EnvironmentSimulation,
    tables::build_environment_table,
};

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(flatten)]
    snapshot: SnapshotArgs,

    /// Environment to simulate, the first one in the snapshot by default.
    #[clap(long = "environment-id", env = "ENVIRONMENT_ID")]
    environment_id: Option<String>,

    /// Print `{"totalKwh": …, "totalCost": …}` instead of the table.
    #[clap(long)]
    json: bool,
}

impl SimulateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let snapshot = self.snapshot.read()?;
        let environment = match &self.environment_id {
            Some(environment_id) => snapshot.environment(environment_id)?,
            None => snapshot.first_environment()?,
        };
        let simulation = EnvironmentSimulation::try_new(environment, &snapshot.equipments)
            .context("failed to simulate the environment")?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&simulation.total)?);
        } else {
            println!("{}", build_environment_table(&simulation));
        }
        Ok(())
    }
}
