use std::fmt::{Debug, Display, Formatter};

use crate::{core::InverterSnapshot, quantity::power::Watts};

/// Watts with an explicit `+` for non-negative values.
pub struct SignedWatts(pub Watts);

impl Debug for SignedWatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for SignedWatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Avoid printing `-0 W` for tiny negative values:
        let rounded = self.0.0.round();
        if rounded >= 0.0 { write!(f, "+{} W", rounded.abs()) } else { write!(f, "{rounded} W") }
    }
}

/// One-line power flow: PV → home, battery, grid.
pub struct FlowLine<'a>(pub &'a InverterSnapshot);

impl Display for FlowLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.0;
        write!(
            f,
            "PV {} → Home {} · Battery {} ({}) · Grid {} ({})",
            snapshot.pv_watts,
            snapshot.load_watts,
            SignedWatts(snapshot.battery_watts),
            snapshot.battery_flow(),
            snapshot.grid_watts,
            snapshot.grid_status,
        )
    }
}
