use std::{fs, path::Path};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{
    core::{BatteryFlow, GridStatus},
    prelude::*,
    quantity::{power::Watts, proportions::Percent, voltage::Volts},
};

/// One point-in-time set of inverter readings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterSnapshot {
    /// Instantaneous solar array output.
    pub pv_watts: Watts,

    /// Instantaneous household consumption.
    pub load_watts: Watts,

    /// State of charge.
    pub battery_percent: Percent,

    pub battery_voltage: Volts,

    /// Positive when charging, negative when discharging.
    pub battery_watts: Watts,

    /// Positive when buying, negative when selling.
    pub grid_watts: Watts,

    #[serde(default)]
    pub grid_status: GridStatus,

    #[serde(default = "Local::now")]
    pub timestamp: DateTime<Local>,
}

impl Default for InverterSnapshot {
    /// Initial dashboard state before the first refresh.
    fn default() -> Self {
        Self {
            pv_watts: Watts(4250.0),
            load_watts: Watts(2850.0),
            battery_percent: Percent(88.0),
            battery_voltage: Volts(51.2),
            battery_watts: Watts(1200.0),
            grid_watts: Watts::ZERO,
            grid_status: GridStatus::Connected,
            timestamp: Local::now(),
        }
    }
}

impl InverterSnapshot {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the snapshot from `{}`", path.display()))?;
        let snapshot = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the snapshot from `{}`", path.display()))?;
        debug!(?snapshot, "loaded");
        Ok(snapshot)
    }

    pub fn battery_flow(&self) -> BatteryFlow {
        BatteryFlow::of(self.battery_watts)
    }
}
