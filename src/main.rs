#![allow(clippy::doc_markdown)]

mod cli;
mod core;
mod dashboard;
mod fmt;
mod insight;
mod payload;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Watch(args) => (*args).run().await?,
        Command::Step(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
