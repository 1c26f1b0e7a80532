use clap::{Parser, ValueEnum};

use crate::{
    cli::simulation::SimulationArgs,
    fmt::FlowLine,
    payload::{DEFAULT_DEVICE_ID, DevicePush, Readings},
    prelude::*,
    tables::build_snapshot_table,
};

#[derive(Parser)]
pub struct StepArgs {
    #[clap(flatten)]
    simulation: SimulationArgs,

    #[clap(long, value_enum, default_value = "table", env = "OUTPUT_FORMAT")]
    format: OutputFormat,

    /// Device identifier for the push document.
    #[clap(long, env = "DEVICE_ID", default_value = DEFAULT_DEVICE_ID)]
    device_id: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// Metric table and the flow line.
    Table,

    /// Snapshot as JSON.
    Json,

    /// Snapshot as TOML, suitable for `--snapshot-file`.
    Toml,

    /// Live readings document.
    Readings,

    /// Device push document.
    Push,
}

impl StepArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let current = self.simulation.initial_snapshot()?;
        let next = self.simulation.simulator().advance(&current, &mut self.simulation.rng());
        info!(
            pv = %next.pv_watts,
            load = %next.load_watts,
            battery = %next.battery_percent,
            "advanced",
        );

        match self.format {
            OutputFormat::Table => {
                println!("{}", build_snapshot_table(&next));
                println!("{}", FlowLine(&next));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&next)?),
            OutputFormat::Toml => print!("{}", toml::to_string_pretty(&next)?),
            OutputFormat::Readings => {
                println!("{}", serde_json::to_string_pretty(&Readings::from(&next))?);
            }
            OutputFormat::Push => {
                let push = DevicePush::new(&self.device_id, &next);
                println!("{}", serde_json::to_string_pretty(&push)?);
            }
        }
        Ok(())
    }
}
