use bon::Builder;
use chrono::{DateTime, Local};
use rand::Rng;

use crate::{
    core::{EnergyBalance, InverterSnapshot},
    quantity::{power::Watts, proportions::Percent},
};

/// Produces the next plausible snapshot from the current one.
///
/// Readings fluctuate by a bounded uniform perturbation, the battery state of charge drifts by
/// a fixed step in the direction of the previous battery flow, and the energy balance is
/// recomputed from the new primary readings.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Simulator {
    /// Maximal PV output change per tick, in either direction.
    #[builder(default = Watts(100.0))]
    pub pv_amplitude: Watts,

    /// Maximal household load change per tick, in either direction.
    #[builder(default = Watts(50.0))]
    pub load_amplitude: Watts,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Random draws applied on a single tick.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Perturbation {
    pub pv: Watts,
    pub load: Watts,
}

impl Simulator {
    /// Simulated minimal household load.
    pub const MIN_LOAD: Watts = Watts(500.0);

    /// State-of-charge change per tick, independent of the surplus magnitude.
    pub const STATE_OF_CHARGE_STEP: Percent = Percent(0.1);

    /// Advance the snapshot using fresh draws from `rng` and the current time.
    pub fn advance<R: Rng>(&self, current: &InverterSnapshot, rng: &mut R) -> InverterSnapshot {
        self.advance_with(current, self.draw(rng), Local::now())
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> Perturbation {
        Perturbation {
            pv: Self::sample(rng, self.pv_amplitude),
            load: Self::sample(rng, self.load_amplitude),
        }
    }

    /// Deterministic part of [`Simulator::advance`].
    pub fn advance_with(
        &self,
        current: &InverterSnapshot,
        perturbation: Perturbation,
        now: DateTime<Local>,
    ) -> InverterSnapshot {
        let pv_watts = (current.pv_watts + perturbation.pv).max(Watts::ZERO);
        let load_watts = (current.load_watts + perturbation.load).max(Self::MIN_LOAD);

        // Direction follows the previous tick's battery flow:
        let battery_percent = if current.battery_watts > Watts::ZERO {
            current.battery_percent + Self::STATE_OF_CHARGE_STEP
        } else {
            current.battery_percent - Self::STATE_OF_CHARGE_STEP
        }
        .saturated();

        let balance = EnergyBalance::off_grid(pv_watts, load_watts);

        InverterSnapshot {
            pv_watts,
            load_watts,
            battery_percent,
            battery_voltage: current.battery_voltage,
            battery_watts: balance.battery,
            grid_watts: balance.grid,
            grid_status: current.grid_status,
            timestamp: now,
        }
    }

    fn sample<R: Rng>(rng: &mut R, amplitude: Watts) -> Watts {
        let amplitude = amplitude.0.abs();
        if !amplitude.is_finite() {
            return Watts::ZERO;
        }
        Watts(rng.gen_range(-amplitude..=amplitude))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{core::GridStatus, quantity::voltage::Volts};

    fn reference_snapshot() -> InverterSnapshot {
        InverterSnapshot {
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

    #[test]
    fn reference_scenario() {
        let mut rng = StdRng::seed_from_u64(42);
        let current = reference_snapshot();
        for _ in 0..100 {
            let next = Simulator::default().advance(&current, &mut rng);
            assert!((4150.0..=4350.0).contains(&next.pv_watts.0), "{next:?}");
            assert!((2800.0..=2900.0).contains(&next.load_watts.0), "{next:?}");
            assert_abs_diff_eq!(next.battery_percent.0, 88.1, epsilon = 1e-9);
            assert_eq!(next.grid_watts, Watts::ZERO);
            assert_eq!(next.battery_watts, next.pv_watts - next.load_watts);
            assert_eq!(next.battery_voltage, current.battery_voltage);
            assert_eq!(next.grid_status, current.grid_status);
        }
    }

    #[test]
    fn exact_arithmetic_with_fixed_draws() {
        let now = Local::now();
        let next = Simulator::default().advance_with(
            &reference_snapshot(),
            Perturbation { pv: Watts(-75.0), load: Watts(20.0) },
            now,
        );
        assert_eq!(next.pv_watts, Watts(4175.0));
        assert_eq!(next.load_watts, Watts(2870.0));
        assert_eq!(next.battery_watts, Watts(1305.0));
        assert_eq!(next.timestamp, now);
    }

    #[test]
    fn battery_clamps_at_full() {
        let current = InverterSnapshot { battery_percent: Percent(99.95), ..reference_snapshot() };
        let next = Simulator::default().advance_with(
            &current,
            Perturbation { pv: Watts::ZERO, load: Watts::ZERO },
            Local::now(),
        );
        assert_eq!(next.battery_percent, Percent::FULL);
    }

    #[test]
    fn battery_clamps_at_empty() {
        let current = InverterSnapshot {
            battery_percent: Percent(0.05),
            battery_watts: Watts(-300.0),
            ..reference_snapshot()
        };
        let next = Simulator::default().advance_with(
            &current,
            Perturbation { pv: Watts::ZERO, load: Watts::ZERO },
            Local::now(),
        );
        assert_eq!(next.battery_percent, Percent::EMPTY);
    }

    #[test]
    fn load_floors_at_minimum() {
        let current = InverterSnapshot { load_watts: Watts(500.0), ..reference_snapshot() };
        let next = Simulator::default().advance_with(
            &current,
            Perturbation { pv: Watts::ZERO, load: Watts(-30.0) },
            Local::now(),
        );
        assert_eq!(next.load_watts, Simulator::MIN_LOAD);
    }

    #[test]
    fn pv_floors_at_zero() {
        let current = InverterSnapshot { pv_watts: Watts(40.0), ..reference_snapshot() };
        let next = Simulator::default().advance_with(
            &current,
            Perturbation { pv: Watts(-90.0), load: Watts::ZERO },
            Local::now(),
        );
        assert_eq!(next.pv_watts, Watts::ZERO);
        assert_eq!(next.battery_watts, -current.load_watts);
    }

    #[test]
    fn zero_battery_flow_discharges() {
        let current = InverterSnapshot { battery_watts: Watts::ZERO, ..reference_snapshot() };
        let next = Simulator::default().advance_with(
            &current,
            Perturbation { pv: Watts::ZERO, load: Watts::ZERO },
            Local::now(),
        );
        assert_abs_diff_eq!(next.battery_percent.0, 87.9, epsilon = 1e-9);
    }

    #[test]
    fn draws_stay_within_amplitude() {
        let simulator =
            Simulator::builder().pv_amplitude(Watts(10.0)).load_amplitude(Watts(-5.0)).build();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let perturbation = simulator.draw(&mut rng);
            assert!(perturbation.pv.0.abs() <= 10.0);
            assert!(perturbation.load.0.abs() <= 5.0);
        }
    }

    #[test]
    fn zero_amplitude_keeps_readings() {
        let simulator =
            Simulator::builder().pv_amplitude(Watts::ZERO).load_amplitude(Watts::ZERO).build();
        let current = reference_snapshot();
        let next = simulator.advance(&current, &mut StdRng::seed_from_u64(1));
        assert_eq!(next.pv_watts, current.pv_watts);
        assert_eq!(next.load_watts, current.load_watts);
    }

    #[test]
    fn non_finite_amplitude_keeps_readings() {
        let simulator = Simulator::builder()
            .pv_amplitude(Watts(f64::NAN))
            .load_amplitude(Watts(f64::INFINITY))
            .build();
        let current = reference_snapshot();
        let next = simulator.advance(&current, &mut StdRng::seed_from_u64(1));
        assert_eq!(next.pv_watts, current.pv_watts);
        assert_eq!(next.load_watts, current.load_watts);
    }

    #[test]
    fn successive_ticks_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let simulator = Simulator::default();
        let first = simulator.advance(&reference_snapshot(), &mut rng);
        let second = simulator.advance(&first, &mut rng);
        assert_ne!((first.pv_watts, first.load_watts), (second.pv_watts, second.load_watts));
    }

    fn arb_snapshot() -> impl Strategy<Value = InverterSnapshot> {
        (0.0..10_000.0, 500.0..8_000.0, 0.0..=100.0, -5_000.0..5_000.0).prop_map(
            |(pv, load, percent, battery)| InverterSnapshot {
                pv_watts: Watts(pv),
                load_watts: Watts(load),
                battery_percent: Percent(percent),
                battery_watts: Watts(battery),
                ..reference_snapshot()
            },
        )
    }

    proptest! {
        #[test]
        fn invariants_hold(current in arb_snapshot(), seed in any::<u64>()) {
            let next = Simulator::default().advance(&current, &mut StdRng::seed_from_u64(seed));
            prop_assert!(next.pv_watts >= Watts::ZERO);
            prop_assert!(next.load_watts >= Simulator::MIN_LOAD);
            prop_assert!(next.battery_percent >= Percent::EMPTY);
            prop_assert!(next.battery_percent <= Percent::FULL);
            prop_assert_eq!(next.battery_watts, next.pv_watts - next.load_watts);
            prop_assert_eq!(next.grid_watts, Watts::ZERO);
        }

        #[test]
        fn charge_follows_previous_flow(current in arb_snapshot(), seed in any::<u64>()) {
            let next = Simulator::default().advance(&current, &mut StdRng::seed_from_u64(seed));
            if current.battery_watts > Watts::ZERO {
                prop_assert!(next.battery_percent >= current.battery_percent);
            } else {
                prop_assert!(next.battery_percent <= current.battery_percent);
            }
        }
    }
}
