use std::path::PathBuf;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    core::{InverterSnapshot, Simulator},
    prelude::*,
    quantity::power::Watts,
};

#[derive(Parser)]
pub struct SimulationArgs {
    /// TOML file with the initial snapshot, the default dashboard state is used otherwise.
    #[clap(long, env = "SNAPSHOT_FILE")]
    pub snapshot_file: Option<PathBuf>,

    /// Seed for reproducible runs.
    #[clap(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Maximal PV output change per tick.
    #[clap(
        long = "pv-amplitude-watts",
        default_value = "100",
        env = "PV_AMPLITUDE_WATTS",
        value_parser = parse_amplitude,
    )]
    pub pv_amplitude: Watts,

    /// Maximal household load change per tick.
    #[clap(
        long = "load-amplitude-watts",
        default_value = "50",
        env = "LOAD_AMPLITUDE_WATTS",
        value_parser = parse_amplitude,
    )]
    pub load_amplitude: Watts,
}

fn parse_amplitude(value: &str) -> Result<Watts> {
    let amplitude: f64 = value.parse()?;
    ensure!(amplitude.is_finite(), "the amplitude must be a finite number of watts");
    Ok(Watts(amplitude))
}

impl SimulationArgs {
    pub fn initial_snapshot(&self) -> Result<InverterSnapshot> {
        self.snapshot_file
            .as_deref()
            .map_or_else(|| Ok(InverterSnapshot::default()), InverterSnapshot::read_from)
    }

    pub fn simulator(&self) -> Simulator {
        Simulator::builder()
            .pv_amplitude(self.pv_amplitude)
            .load_amplitude(self.load_amplitude)
            .build()
    }

    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    #[test]
    fn non_finite_amplitudes_are_rejected() {
        for value in ["NaN", "inf", "-inf"] {
            let pv = format!("--pv-amplitude-watts={value}");
            assert!(Args::try_parse_from(["solar-sync", "step", &pv]).is_err(), "{value}");
            let load = format!("--load-amplitude-watts={value}");
            assert!(Args::try_parse_from(["solar-sync", "step", &load]).is_err(), "{value}");
        }
    }

    #[test]
    fn negative_amplitude_is_accepted() {
        assert!(Args::try_parse_from(["solar-sync", "step", "--pv-amplitude-watts=-10"]).is_ok());
    }
}
