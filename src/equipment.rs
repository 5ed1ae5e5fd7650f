use bon::bon;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Field, InvalidInput},
    quantity::{energy::KilowattHours, power::Watts, time::Hours},
    row,
};

pub const MAX_DAYS_PER_MONTH: f64 = 31.0;

/// One class of identical devices within an environment.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Equipment {
    id: Option<String>,
    environment_id: Option<String>,
    name: Option<String>,
    power: Watts,
    hours_per_day: Hours,
    days_per_month: f64,
    quantity: u32,
}

#[bon]
impl Equipment {
    #[builder]
    pub fn new(
        #[builder(into)] id: Option<String>,
        #[builder(into)] environment_id: Option<String>,
        #[builder(into)] name: Option<String>,
        power_watts: f64,
        hours_per_day: f64,
        days_per_month: f64,
        #[builder(default = 1)] quantity: u32,
    ) -> Result<Self, InvalidInput> {
        let power_watts = row::non_negative(Field::PowerWatts, power_watts)?;
        let hours_per_day =
            row::at_most(Field::HoursPerDay, hours_per_day, Hours::ONE_DAY.into_inner())?;
        let days_per_month = row::at_most(Field::DaysPerMonth, days_per_month, MAX_DAYS_PER_MONTH)?;
        let equipment = Self {
            id,
            environment_id,
            name,
            power: Watts::from(power_watts),
            hours_per_day: Hours::from(hours_per_day),
            days_per_month,
            quantity,
        };
        // Checked for one device at least: `inf × 0` is NaN.
        if !equipment.energy_of(equipment.quantity.max(1)).is_finite() {
            return Err(InvalidInput::Overflow { what: "monthly energy" });
        }
        Ok(equipment)
    }
}

impl Equipment {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn power(&self) -> Watts {
        self.power
    }

    pub const fn hours_per_day(&self) -> Hours {
        self.hours_per_day
    }

    #[must_use]
    pub const fn days_per_month(&self) -> f64 {
        self.days_per_month
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Monthly usage of a single device.
    pub fn hours_per_month(&self) -> Hours {
        self.hours_per_day * self.days_per_month()
    }

    /// `power × hours per day × days per month × quantity`, in kilowatt-hours.
    ///
    /// Not rounded.
    pub fn monthly_energy(&self) -> KilowattHours {
        self.energy_of(self.quantity)
    }

    fn energy_of(&self, quantity: u32) -> KilowattHours {
        (self.power * self.hours_per_month()) * f64::from(quantity)
    }
}

/// Equipment as it comes from the store, before any validation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EquipmentRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_watts: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_month: Option<Value>,

    /// Absent in rows created before the column existed, meaning one device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl EquipmentRow {
    #[must_use]
    pub fn id(&self) -> Option<String> {
        row::optional_text(self.id.as_ref())
    }

    #[must_use]
    pub fn environment_id(&self) -> Option<String> {
        row::optional_text(self.environment_id.as_ref())
    }

    pub fn monthly_energy(&self) -> Result<KilowattHours, InvalidInput> {
        Equipment::try_from(self).map(|equipment| equipment.monthly_energy())
    }
}

impl TryFrom<&EquipmentRow> for Equipment {
    type Error = InvalidInput;

    fn try_from(raw: &EquipmentRow) -> Result<Self, Self::Error> {
        let quantity = row::optional_number(Field::Quantity, raw.quantity.as_ref())?
            .map(|quantity| row::whole(Field::Quantity, quantity))
            .transpose()?
            .unwrap_or(1);
        Self::builder()
            .maybe_id(raw.id())
            .maybe_environment_id(raw.environment_id())
            .maybe_name(row::optional_text(raw.name.as_ref()))
            .power_watts(row::required_number(Field::PowerWatts, raw.power_watts.as_ref())?)
            .hours_per_day(row::required_number(Field::HoursPerDay, raw.hours_per_day.as_ref())?)
            .days_per_month(row::required_number(Field::DaysPerMonth, raw.days_per_month.as_ref())?)
            .quantity(quantity)
            .build()
    }
}
