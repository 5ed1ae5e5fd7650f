use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    environment::Environment,
    equipment::{Equipment, EquipmentRow},
    error::InvalidInput,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    simulation::Simulation,
};

/// Share of the monthly cost that load shifting and efficiency tips could save.
pub const SAVINGS_RATIO: f64 = 0.18;

/// Cost-per-kilowatt-hour ratio against which the efficiency score is measured.
const REFERENCE_RATE_FACTOR: f64 = 1.5;

/// Dashboard totals across every environment in scope.
#[must_use]
pub struct Overview {
    pub n_environments: usize,
    pub n_equipments: usize,
    pub total_energy: KilowattHours,
    pub total_cost: Cost,

    /// Score in `0..=100`.
    pub efficiency: u8,

    pub savings_potential: Cost,

    /// Sorted by descending cost.
    pub breakdown: Vec<EnvironmentSummary>,
}

#[must_use]
pub struct EnvironmentSummary {
    pub environment: Environment,
    pub n_equipments: usize,
    pub simulation: Simulation,
}

impl Overview {
    /// Aggregate each environment at its own tariff and sum the results.
    ///
    /// With `owner_id`, only that user's environments and their equipment are included.
    #[instrument(skip_all, fields(n_environments = environments.len(), n_rows = rows.len()))]
    pub fn try_new(
        environments: Vec<Environment>,
        rows: &[EquipmentRow],
        owner_id: Option<&str>,
    ) -> Result<Self, InvalidInput> {
        let known_ids =
            environments.iter().map(|environment| environment.id().to_owned()).collect_vec();
        let (environments, out_of_scope): (Vec<_>, Vec<_>) = environments
            .into_iter()
            .partition(|environment| owner_id.is_none_or(|owner| environment.is_owned_by(owner)));
        debug!(n_skipped = out_of_scope.len(), "filtered by owner");

        // Only the equipment being aggregated is validated.
        let mut by_environment: HashMap<String, Vec<Equipment>> = HashMap::new();
        for row in rows {
            let environment_id = row.environment_id().unwrap_or_default();
            if !known_ids.contains(&environment_id) {
                return Err(InvalidInput::UnknownEnvironment {
                    equipment_id: row.id().unwrap_or_default(),
                    environment_id,
                });
            }
            if environments.iter().any(|environment| environment.id() == environment_id) {
                by_environment.entry(environment_id).or_default().push(Equipment::try_from(row)?);
            }
        }

        let breakdown = environments
            .into_iter()
            .map(|environment| {
                let equipments = by_environment.remove(environment.id()).unwrap_or_default();
                let simulation = Simulation::aggregate(&equipments, environment.tariff())?;
                Ok::<_, InvalidInput>(EnvironmentSummary {
                    environment,
                    n_equipments: equipments.len(),
                    simulation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sorted_by(|lhs, rhs| rhs.simulation.total_cost.cmp(&lhs.simulation.total_cost))
            .collect_vec();

        let total_energy: KilowattHours =
            breakdown.iter().map(|summary| summary.simulation.total_energy).sum();
        let total_cost: Cost =
            breakdown.iter().map(|summary| summary.simulation.total_cost).sum();
        if !total_energy.is_finite() {
            return Err(InvalidInput::Overflow { what: "total energy" });
        }
        if !total_cost.is_finite() {
            return Err(InvalidInput::Overflow { what: "total cost" });
        }
        let overview = Self {
            n_environments: breakdown.len(),
            n_equipments: breakdown.iter().map(|summary| summary.n_equipments).sum(),
            total_energy,
            total_cost,
            efficiency: efficiency(total_energy, total_cost),
            savings_potential: total_cost * SAVINGS_RATIO,
            breakdown,
        };
        info!(
            n_environments = overview.n_environments,
            n_equipments = overview.n_equipments,
            total_energy = ?overview.total_energy,
            total_cost = ?overview.total_cost,
            "aggregated",
        );
        Ok(overview)
    }
}

/// `1 − cost / (energy × 1.5)` as a whole percentage, clamped to `0..=100`.
///
/// Zero when nothing is consumed.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn efficiency(total_energy: KilowattHours, total_cost: Cost) -> u8 {
    if total_energy <= KilowattHours::ZERO {
        return 0;
    }
    let ratio = total_cost.into_inner() / (total_energy.into_inner() * REFERENCE_RATE_FACTOR);
    ((1.0 - ratio) * 100.0).round().clamp(0.0, 100.0) as u8
}
