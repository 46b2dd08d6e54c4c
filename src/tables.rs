use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{ForecastPoint, Selection, energy_to_carbon},
    fmt::FormattedPercentage,
    prelude::*,
    profile::EnergyBreakdown,
    quantity::intensity::GramsPerKilowattHour,
};

/// A component at or above this share of the total is a hotspot.
const HOTSPOT_SHARE: f64 = 0.3;

pub fn build_forecast_table(points: &[ForecastPoint]) -> Table {
    #[allow(clippy::cast_precision_loss)]
    let mean = points.iter().map(|point| point.intensity.0).sum::<f64>()
        / points.len().max(1) as f64;

    let mut table = new_table();
    table.set_header(vec!["Hour", "Start", "Intensity"]);
    for point in points {
        table.add_row(vec![
            Cell::new(point.hour).set_alignment(CellAlignment::Right),
            Cell::new(point.time.format("%Y-%m-%d %H:%M")),
            Cell::new(point.intensity).set_alignment(CellAlignment::Right).fg(
                if point.intensity.0 <= mean { Color::Green } else { Color::Red },
            ),
        ]);
    }
    table
}

pub fn build_windows_table(selection: &Selection) -> Result<Table> {
    let mut table = new_table();
    table.set_header(vec!["Start", "Average intensity", "vs now"]);
    for window in &selection.windows {
        let savings = selection.savings_percent(window)?;
        table.add_row(vec![
            Cell::new(window.start_time.format("%Y-%m-%d %H:%M")),
            Cell::new(window.average_intensity).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+.1}%", -savings)).set_alignment(CellAlignment::Right).fg(
                if savings > 0.0 {
                    Color::Green
                } else if savings < 0.0 {
                    Color::Red
                } else {
                    Color::Reset
                },
            ),
        ]);
    }
    Ok(table)
}

pub fn build_footprint_table(
    breakdown: &EnergyBreakdown,
    intensity: GramsPerKilowattHour,
) -> Result<Table> {
    let total = breakdown.total_energy;

    let mut table = new_table();
    table.set_header(vec!["Component", "Energy", "Share", "Carbon"]);
    for (name, energy) in breakdown.components() {
        let share = if total.0 > 0.0 { energy.0 / total.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(energy).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(share * 100.0))
                .set_alignment(CellAlignment::Right)
                .fg(if share >= HOTSPOT_SHARE { Color::Red } else { Color::Reset }),
            Cell::new(energy_to_carbon(energy, intensity)?).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(total).set_alignment(CellAlignment::Right),
        Cell::new(FormattedPercentage(100.0)).set_alignment(CellAlignment::Right),
        Cell::new(energy_to_carbon(total, intensity)?).set_alignment(CellAlignment::Right),
    ]);
    Ok(table)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}
