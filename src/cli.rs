mod insight;
mod simulation;
mod step;
mod watch;

use clap::{Parser, Subcommand};

use crate::cli::{step::StepArgs, watch::WatchArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: refresh the simulated inverter periodically and on Enter.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Advance a snapshot once and print the result.
    #[clap(name = "step")]
    Step(Box<StepArgs>),
}
