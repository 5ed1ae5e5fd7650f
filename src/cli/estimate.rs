use clap::Parser;
use serde_json::Value;

use crate::{
    environment::validate_tariff,
    equipment::{Equipment, EquipmentRow},
    error::Field,
    prelude::*,
    quantity::rate::KilowattHourRate,
    row,
    simulation::Simulation,
    tables::build_estimate_table,
};

/// Form fields, taken as typed so that they go through the same validation as stored rows.
#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(long = "power-watts")]
    power_watts: String,

    #[clap(long = "hours-per-day")]
    hours_per_day: String,

    #[clap(long = "days-per-month")]
    days_per_month: String,

    #[clap(long)]
    quantity: Option<String>,

    /// Tariff per kilowatt-hour.
    #[clap(long = "tariff", env = "ENERGY_TARIFF")]
    tariff: String,

    #[clap(long)]
    json: bool,
}

impl EstimateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let tariff = self.tariff()?;
        let equipment = Equipment::try_from(&self.to_row())?;
        let simulation = Simulation::aggregate([&equipment], tariff)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&simulation)?);
        } else {
            println!("{}", build_estimate_table(&equipment, tariff, &simulation));
        }
        Ok(())
    }

    fn tariff(&self) -> Result<KilowattHourRate> {
        let cell = Value::from(self.tariff.as_str());
        let tariff = row::required_number(Field::EnergyTariff, Some(&cell))?;
        Ok(validate_tariff(KilowattHourRate::from(tariff))?)
    }

    fn to_row(&self) -> EquipmentRow {
        EquipmentRow {
            power_watts: Some(Value::from(self.power_watts.as_str())),
            hours_per_day: Some(Value::from(self.hours_per_day.as_str())),
            days_per_month: Some(Value::from(self.days_per_month.as_str())),
            quantity: self.quantity.as_deref().map(Value::from),
            ..EquipmentRow::default()
        }
    }
}
