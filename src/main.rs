#![allow(clippy::doc_markdown)]

mod cli;
mod environment;
mod equipment;
mod error;
mod fmt;
mod overview;
mod prelude;
mod quantity;
mod row;
mod session;
mod simulation;
mod snapshot;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
    session::SessionContext,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let session = SessionContext::new();
    let subscription = session.subscribe(|user| match user {
        Some(user) => debug!(user_id = %user.id, "session changed"),
        None => debug!("session ended"),
    });
    if let Some(user) = args.session.user() {
        session.sign_in(user);
    }

    match args.command {
        Command::Simulate(args) => args.run()?,
        Command::Estimate(args) => args.run()?,
        Command::Overview(args) => args.run(&session)?,
    }

    session.sign_out();
    subscription.unsubscribe();
    info!("done!");
    Ok(())
}
