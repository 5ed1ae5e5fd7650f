use serde::Serialize;

use crate::{
    environment::{Environment, validate_tariff},
    equipment::{Equipment, EquipmentRow},
    error::InvalidInput,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Monthly energy of one equipment record.
pub fn equipment_monthly_energy(equipment: &Equipment) -> KilowattHours {
    equipment.monthly_energy()
}

/// Monthly totals for a set of equipment priced at a single tariff.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    #[serde(rename = "totalKwh")]
    pub total_energy: KilowattHours,

    pub total_cost: Cost,
}

impl Simulation {
    /// Sum the monthly energy of every equipment and price it at the tariff.
    ///
    /// Either returns complete totals or fails before summing anything.
    pub fn aggregate<'a>(
        equipments: impl IntoIterator<Item = &'a Equipment>,
        tariff: KilowattHourRate,
    ) -> Result<Self, InvalidInput> {
        let tariff = validate_tariff(tariff)?;
        let total_energy: KilowattHours =
            equipments.into_iter().map(equipment_monthly_energy).sum();
        ensure_finite(total_energy.is_finite(), "total energy")?;
        let total_cost = total_energy * tariff;
        ensure_finite(total_cost.is_finite(), "total cost")?;
        Ok(Self { total_energy, total_cost })
    }

    /// Validate raw store rows and aggregate them.
    ///
    /// The first malformed row fails the whole aggregation.
    #[instrument(skip_all, fields(n_rows = rows.len(), tariff = ?tariff))]
    pub fn from_rows(rows: &[EquipmentRow], tariff: KilowattHourRate) -> Result<Self, InvalidInput> {
        let equipments = rows.iter().map(Equipment::try_from).collect::<Result<Vec<_>, _>>()?;
        let simulation = Self::aggregate(&equipments, tariff)?;
        debug!(total_energy = ?simulation.total_energy, total_cost = ?simulation.total_cost);
        Ok(simulation)
    }
}

const fn ensure_finite(is_finite: bool, what: &'static str) -> Result<(), InvalidInput> {
    if is_finite { Ok(()) } else { Err(InvalidInput::Overflow { what }) }
}

/// Environment detail: each equipment line priced at the environment's tariff.
#[must_use]
pub struct EnvironmentSimulation {
    pub environment: Environment,
    pub lines: Vec<Line>,
    pub total: Simulation,
}

#[must_use]
pub struct Line {
    pub equipment: Equipment,
    pub energy: KilowattHours,
    pub cost: Cost,
}

impl EnvironmentSimulation {
    /// Simulate the rows that belong to the environment, ignoring all the others.
    #[instrument(skip_all, fields(environment_id = environment.id()))]
    pub fn try_new(environment: Environment, rows: &[EquipmentRow]) -> Result<Self, InvalidInput> {
        let tariff = environment.tariff();
        let lines = rows
            .iter()
            .filter(|row| row.environment_id().as_deref() == Some(environment.id()))
            .map(|row| {
                let equipment = Equipment::try_from(row)?;
                let energy = equipment.monthly_energy();
                Ok::<_, InvalidInput>(Line { equipment, energy, cost: energy * tariff })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = Simulation::aggregate(lines.iter().map(|line| &line.equipment), tariff)?;
        info!(n_equipments = lines.len(), total_energy = ?total.total_energy, "simulated");
        Ok(Self { environment, lines, total })
    }
}
