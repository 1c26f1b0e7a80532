use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::power::Watts;

/// Power split between the battery and the grid at the inverter connection point.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EnergyBalance {
    /// Positive when charging, negative when discharging.
    pub battery: Watts,

    /// Positive when buying, negative when selling.
    pub grid: Watts,
}

impl EnergyBalance {
    /// The battery absorbs or supplies the entire PV/load mismatch and the grid path is not modelled.
    pub fn off_grid(pv: Watts, load: Watts) -> Self {
        Self { battery: pv - load, grid: Watts::ZERO }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BatteryFlow {
    Charging,
    Discharging,
    Idle,
}

impl BatteryFlow {
    pub fn of(battery: Watts) -> Self {
        if battery > Watts::ZERO {
            Self::Charging
        } else if battery < Watts::ZERO {
            Self::Discharging
        } else {
            Self::Idle
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Charging => Color::Green,
            Self::Discharging => Color::Blue,
            Self::Idle => Color::Reset,
        }
    }
}

impl Display for BatteryFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Charging => write!(f, "charging"),
            Self::Discharging => write!(f, "discharging"),
            Self::Idle => write!(f, "idle"),
        }
    }
}
