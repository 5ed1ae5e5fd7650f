use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    environment::Environment,
    equipment::Equipment,
    fmt::FormattedShare,
    overview::Overview,
    quantity::{cost::Cost, rate::KilowattHourRate},
    simulation::{EnvironmentSimulation, Simulation},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn equipment_cells(equipment: &Equipment) -> Vec<Cell> {
    vec![
        Cell::new(equipment.power()).set_alignment(CellAlignment::Right),
        Cell::new(equipment.hours_per_day()).set_alignment(CellAlignment::Right),
        Cell::new(equipment.days_per_month()).set_alignment(CellAlignment::Right),
        Cell::new(equipment.quantity()).set_alignment(CellAlignment::Right),
    ]
}

pub fn build_environment_table(simulation: &EnvironmentSimulation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Equipment", "Power", "Daily", "Days", "Qty", "Monthly", "Cost"]);
    for line in &simulation.lines {
        let mut row = vec![Cell::new(line.equipment.name().unwrap_or("-"))];
        row.extend(equipment_cells(&line.equipment));
        row.push(Cell::new(line.energy).set_alignment(CellAlignment::Right));
        row.push(
            Cell::new(line.cost)
                .set_alignment(CellAlignment::Right)
                .fg(if line.cost >= Cost::ONE_CENT { Color::Reset } else { Color::Green }),
        );
        table.add_row(row);
    }
    table.add_row(vec![
        Cell::new(simulation.environment.name()).add_attribute(Attribute::Bold),
        Cell::new(simulation.environment.tariff()).add_attribute(Attribute::Dim),
        Cell::new(""),
        Cell::new(""),
        Cell::new(simulation.lines.len()).set_alignment(CellAlignment::Right),
        Cell::new(simulation.total.total_energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(simulation.total.total_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_estimate_table(
    equipment: &Equipment,
    tariff: KilowattHourRate,
    simulation: &Simulation,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Power", "Daily", "Days", "Qty", "Tariff", "Monthly", "Cost"]);
    let mut row = equipment_cells(equipment);
    row.push(Cell::new(tariff).add_attribute(Attribute::Dim));
    row.push(Cell::new(simulation.total_energy).set_alignment(CellAlignment::Right));
    row.push(Cell::new(simulation.total_cost).set_alignment(CellAlignment::Right));
    table.add_row(row);
    table
}

pub fn build_overview_table(overview: &Overview) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Environment",
        "Type",
        "Tariff",
        "Equipment",
        "Monthly",
        "Cost",
        "Share",
    ]);
    for summary in &overview.breakdown {
        let share = FormattedShare::of(
            summary.simulation.total_cost.into_inner(),
            overview.total_cost.into_inner(),
        );
        table.add_row(vec![
            Cell::new(summary.environment.name()),
            Cell::new(describe_environment(&summary.environment)).add_attribute(Attribute::Dim),
            Cell::new(summary.environment.tariff()),
            Cell::new(summary.n_equipments).set_alignment(CellAlignment::Right),
            Cell::new(summary.simulation.total_energy).set_alignment(CellAlignment::Right),
            Cell::new(summary.simulation.total_cost.compact()).set_alignment(CellAlignment::Right),
            Cell::new(share).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("{} environments", overview.n_environments))
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("efficiency {}%", overview.efficiency))
            .fg(efficiency_color(overview.efficiency)),
        Cell::new(overview.n_equipments).set_alignment(CellAlignment::Right),
        Cell::new(overview.total_energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(overview.total_cost.compact())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("save {}", overview.savings_potential.compact())).fg(Color::Green),
    ]);
    table
}

fn describe_environment(environment: &Environment) -> String {
    match (environment.kind(), environment.area()) {
        (Some(kind), Some(area)) => format!("{kind}, {area}"),
        (Some(kind), None) => kind.to_string(),
        (None, Some(area)) => area.to_string(),
        (None, None) => String::new(),
    }
}

const fn efficiency_color(efficiency: u8) -> Color {
    if efficiency > 75 {
        Color::Green
    } else if efficiency > 40 {
        Color::DarkYellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_table_lists_environments() -> crate::prelude::Result {
        let environment =
            Environment::builder().id("office").name("Escritório").tariff_per_kwh(0.95).build()?;
        let overview = Overview::try_new(vec![environment], &[], None)?;
        let rendered = build_overview_table(&overview).to_string();
        assert!(rendered.contains("Escritório"));
        assert!(rendered.contains("1 environments"));
        Ok(())
    }
}
