pub mod energy_balance;
pub mod grid_status;
pub mod history;
pub mod simulator;
pub mod snapshot;

pub use self::{
    energy_balance::{BatteryFlow, EnergyBalance},
    grid_status::GridStatus,
    history::History,
    simulator::Simulator,
    snapshot::InverterSnapshot,
};
