use crate::{core::InverterSnapshot, fmt::SignedWatts};

/// Build the prompt handed to an external text service.
pub fn build(snapshot: &InverterSnapshot) -> String {
    format!(
        "Analyze this solar inverter data and provide 2-3 brief, practical insights \
         about energy usage and battery health:\n\
         - Solar production: {}\n\
         - Home consumption: {}\n\
         - Battery: {} at {} ({}, {})\n\
         - Grid: {} ({})\n\
         Keep the answer under 60 words.",
        snapshot.pv_watts,
        snapshot.load_watts,
        snapshot.battery_percent,
        snapshot.battery_voltage,
        SignedWatts(snapshot.battery_watts),
        snapshot.battery_flow(),
        snapshot.grid_watts,
        snapshot.grid_status,
    )
}
