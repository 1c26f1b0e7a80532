use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{History, InverterSnapshot, Simulator},
    fmt::SignedWatts,
    quantity::{power::Watts, proportions::Percent},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

/// Metric cards for the current snapshot.
pub fn build_snapshot_table(snapshot: &InverterSnapshot) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Solar"),
        Cell::new(snapshot.pv_watts)
            .set_alignment(CellAlignment::Right)
            .fg(if snapshot.pv_watts > Watts::ZERO { Color::Yellow } else { Color::Reset }),
    ]);
    table.add_row(vec![
        Cell::new("Load"),
        Cell::new(snapshot.load_watts).set_alignment(CellAlignment::Right).fg(
            if snapshot.load_watts > snapshot.pv_watts { Color::Red } else { Color::Reset },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Battery"),
        Cell::new(snapshot.battery_percent).set_alignment(CellAlignment::Right).fg(
            if snapshot.battery_percent < Percent(20.0) { Color::Red } else { Color::Green },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Battery voltage").add_attribute(Attribute::Dim),
        Cell::new(snapshot.battery_voltage)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Battery flow"),
        Cell::new(SignedWatts(snapshot.battery_watts))
            .set_alignment(CellAlignment::Right)
            .fg(snapshot.battery_flow().color()),
    ]);
    table.add_row(vec![
        Cell::new("Grid"),
        Cell::new(snapshot.grid_watts).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Grid status"),
        Cell::new(snapshot.grid_status)
            .set_alignment(CellAlignment::Right)
            .fg(snapshot.grid_status.color()),
    ]);
    table.add_row(vec![
        Cell::new("Updated").add_attribute(Attribute::Dim),
        Cell::new(snapshot.timestamp.format("%H:%M:%S"))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

/// Recent snapshots followed by the trend summary, if any.
pub fn build_history_table(history: &History) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Solar", "Load", "Battery", "Flow"]);
    for snapshot in history.iter() {
        table.add_row(vec![
            Cell::new(snapshot.timestamp.format("%H:%M:%S")).add_attribute(Attribute::Dim),
            Cell::new(snapshot.pv_watts).set_alignment(CellAlignment::Right),
            Cell::new(snapshot.load_watts).set_alignment(CellAlignment::Right).fg(
                if snapshot.load_watts <= Simulator::MIN_LOAD {
                    Color::Cyan
                } else {
                    Color::Reset
                },
            ),
            Cell::new(snapshot.battery_percent).set_alignment(CellAlignment::Right),
            Cell::new(SignedWatts(snapshot.battery_watts))
                .set_alignment(CellAlignment::Right)
                .fg(snapshot.battery_flow().color()),
        ]);
    }
    if let Some(trend) = history.trend() {
        table.add_row(vec![
            Cell::new("Mean").add_attribute(Attribute::Bold),
            Cell::new(trend.pv.mean).set_alignment(CellAlignment::Right),
            Cell::new(trend.load.mean).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+.1}%", trend.battery_percent_change.0))
                .set_alignment(CellAlignment::Right)
                .fg(if trend.battery_percent_change >= Percent::EMPTY {
                    Color::Green
                } else {
                    Color::Blue
                }),
            Cell::new(format!("PV {} … {}", trend.pv.min, trend.pv.max))
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
