use std::collections::VecDeque;

use average::{Max, Mean, Min};

use crate::{
    core::InverterSnapshot,
    quantity::{power::Watts, proportions::Percent},
};

/// Bounded window of the most recent snapshots, oldest first.
#[must_use]
pub struct History {
    capacity: usize,
    snapshots: VecDeque<InverterSnapshot>,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, snapshots: VecDeque::with_capacity(capacity) }
    }

    /// Remember the snapshot, evicting the oldest one when full.
    pub fn push(&mut self, snapshot: InverterSnapshot) {
        if self.capacity == 0 {
            return;
        }
        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[cfg_attr(not(test), expect(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &InverterSnapshot> {
        self.snapshots.iter()
    }

    pub fn trend(&self) -> Option<Trend> {
        let oldest = self.snapshots.front()?;
        let newest = self.snapshots.back()?;
        Some(Trend {
            pv: Summary::of(self.snapshots.iter().map(|snapshot| snapshot.pv_watts)),
            load: Summary::of(self.snapshots.iter().map(|snapshot| snapshot.load_watts)),
            battery_percent_change: newest.battery_percent - oldest.battery_percent,
        })
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trend {
    pub pv: Summary,
    pub load: Summary,

    /// Newest minus oldest state of charge.
    pub battery_percent_change: Percent,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub mean: Watts,
    pub min: Watts,
    pub max: Watts,
}

impl Summary {
    fn of(values: impl Iterator<Item = Watts> + Clone) -> Self {
        let mean: Mean = values.clone().map(|watts| watts.0).collect();
        let min: Min = values.clone().map(|watts| watts.0).collect();
        let max: Max = values.map(|watts| watts.0).collect();
        Self { mean: Watts(mean.mean()), min: Watts(min.min()), max: Watts(max.max()) }
    }
}
