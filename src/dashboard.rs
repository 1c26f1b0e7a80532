use bon::Builder;
use rand::rngs::StdRng;

use crate::{
    core::{History, InverterSnapshot, Simulator},
    insight::Insights,
    prelude::*,
};

/// Caller side of the simulator: owns the current snapshot and serialises the ticks.
#[derive(Builder)]
pub struct Dashboard {
    current: InverterSnapshot,
    simulator: Simulator,
    rng: StdRng,
    insights: Insights,

    #[builder(default = History::with_capacity(0))]
    history: History,
}

/// Result of a single refresh.
#[must_use]
pub struct Refresh {
    pub snapshot: InverterSnapshot,
    pub insight: String,
}

impl Dashboard {
    pub const fn current(&self) -> &InverterSnapshot {
        &self.current
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Advance once, remember the new snapshot, and only then ask for the commentary.
    #[instrument(skip_all)]
    pub async fn refresh(&mut self) -> Refresh {
        let snapshot = self.simulator.advance(&self.current, &mut self.rng);
        self.current = snapshot;
        self.history.push(snapshot);
        info!(
            pv = %snapshot.pv_watts,
            load = %snapshot.load_watts,
            battery = %snapshot.battery_percent,
            flow = %snapshot.battery_flow(),
            "advanced",
        );
        let insight = self.insights.describe(&snapshot).await;
        Refresh { snapshot, insight }
    }
}
