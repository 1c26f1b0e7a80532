use async_trait::async_trait;

use crate::{
    core::{BatteryFlow, GridStatus, InverterSnapshot},
    insight::InsightProvider,
    prelude::*,
    quantity::{power::Watts, proportions::Percent},
};

/// Local commentary derived from simple thresholds, used when no external service is configured.
pub struct Rules;

impl Rules {
    pub const LOW_BATTERY: Percent = Percent(20.0);
    pub const FULL_BATTERY: Percent = Percent(99.5);

    pub fn remarks(snapshot: &InverterSnapshot) -> Vec<String> {
        let mut remarks = Vec::new();

        match snapshot.battery_flow() {
            BatteryFlow::Charging => remarks.push(format!(
                "Solar covers the home, the battery is charging at {}.",
                snapshot.battery_watts,
            )),
            BatteryFlow::Discharging => remarks.push(format!(
                "The home draws more than the panels produce, the battery is supplying {}.",
                -snapshot.battery_watts,
            )),
            BatteryFlow::Idle => remarks.push("Production and consumption are balanced.".to_owned()),
        }

        if snapshot.pv_watts == Watts::ZERO {
            remarks.push("No solar production right now.".to_owned());
        }
        if snapshot.battery_percent < Self::LOW_BATTERY {
            remarks.push(format!(
                "Battery is low at {}, consider shifting heavy loads.",
                snapshot.battery_percent,
            ));
        } else if snapshot.battery_percent >= Self::FULL_BATTERY {
            remarks.push("Battery is full, surplus could run deferrable loads.".to_owned());
        }
        if snapshot.grid_status != GridStatus::Connected {
            remarks.push(format!("Grid link is {}.", snapshot.grid_status));
        }

        remarks
    }
}

#[async_trait]
impl InsightProvider for Rules {
    async fn describe(&self, snapshot: &InverterSnapshot) -> Result<String> {
        Ok(Self::remarks(snapshot).join(" "))
    }
}
