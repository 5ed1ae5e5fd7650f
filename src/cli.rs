mod estimate;
mod overview;
mod session;
mod simulate;
mod snapshot;

use clap::{Parser, Subcommand};

pub use self::{
    estimate::EstimateArgs,
    overview::OverviewArgs,
    session::SessionArgs,
    simulate::SimulateArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub session: SessionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Monthly consumption and cost of a single environment.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Live estimate for an equipment that is being entered.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Dashboard totals across all environments.
    #[clap(name = "overview")]
    Overview(Box<OverviewArgs>),
}
