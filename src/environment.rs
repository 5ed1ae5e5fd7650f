use std::str::FromStr;

use bon::bon;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Field, InvalidInput},
    quantity::{area::SquareMetres, rate::KilowattHourRate},
    row,
};

/// Room or building with its own energy tariff.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    id: String,
    name: Option<String>,
    kind: Option<EnvironmentKind>,
    area: Option<SquareMetres>,
    tariff: KilowattHourRate,
    owner_id: Option<String>,
}

#[bon]
impl Environment {
    #[builder]
    pub fn new(
        #[builder(into)] id: String,
        #[builder(into)] name: Option<String>,
        kind: Option<EnvironmentKind>,
        area_m2: Option<f64>,
        tariff_per_kwh: f64,
        #[builder(into)] owner_id: Option<String>,
    ) -> Result<Self, InvalidInput> {
        let area = area_m2
            .map(|area| row::non_negative(Field::Area, area).map(SquareMetres::from))
            .transpose()?;
        let tariff = validate_tariff(KilowattHourRate::from(tariff_per_kwh))?;
        Ok(Self { id, name, kind, area, tariff, owner_id })
    }
}

impl Environment {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, falling back to the identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub const fn kind(&self) -> Option<EnvironmentKind> {
        self.kind
    }

    #[must_use]
    pub const fn area(&self) -> Option<SquareMetres> {
        self.area
    }

    pub const fn tariff(&self) -> KilowattHourRate {
        self.tariff
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id() == Some(user_id)
    }
}

/// Tariffs must be finite and non-negative, whichever way they were constructed.
pub fn validate_tariff(tariff: KilowattHourRate) -> Result<KilowattHourRate, InvalidInput> {
    if tariff.is_finite() && !tariff.is_negative() {
        Ok(tariff)
    } else {
        Err(InvalidInput::Negative { field: Field::EnergyTariff, value: tariff.into_inner() })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
pub enum EnvironmentKind {
    Residential,
    Commercial,
    Industrial,
}

impl FromStr for EnvironmentKind {
    type Err = InvalidInput;

    /// Accepts both the labels stored by the app and their English names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "residencial" | "residential" => Ok(Self::Residential),
            "comercial" | "commercial" => Ok(Self::Commercial),
            "industrial" => Ok(Self::Industrial),
            _ => Err(InvalidInput::UnknownKind { value: value.to_owned() }),
        }
    }
}

/// Environment as it comes from the store.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EnvironmentRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_tariff: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Value>,
}

impl TryFrom<&EnvironmentRow> for Environment {
    type Error = InvalidInput;

    fn try_from(raw: &EnvironmentRow) -> Result<Self, Self::Error> {
        let id =
            row::optional_text(raw.id.as_ref()).ok_or(InvalidInput::Missing { field: Field::Id })?;
        let kind = row::optional_text(raw.kind.as_ref())
            .as_deref()
            .map(str::parse::<EnvironmentKind>)
            .transpose()?;
        Self::builder()
            .id(id)
            .maybe_name(row::optional_text(raw.name.as_ref()))
            .maybe_kind(kind)
            .maybe_area_m2(row::optional_number(Field::Area, raw.area_m2.as_ref())?)
            .tariff_per_kwh(row::required_number(Field::EnergyTariff, raw.energy_tariff.as_ref())?)
            .maybe_owner_id(row::optional_text(raw.owner_id.as_ref()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_row_from_store() -> Result<(), InvalidInput> {
        // language=json
        let body = r#"{
            "id": "b0c1",
            "name": "Escritório",
            "type": "Comercial",
            "area_m2": 42.5,
            "energy_tariff": 0.95,
            "owner_id": "u-1"
        }"#;
        let row: EnvironmentRow = serde_json::from_str(body).unwrap();
        let environment = Environment::try_from(&row)?;
        assert_eq!(environment.id(), "b0c1");
        assert_eq!(environment.name(), "Escritório");
        assert_eq!(environment.kind(), Some(EnvironmentKind::Commercial));
        assert_eq!(environment.area(), Some(SquareMetres::from(42.5)));
        assert_eq!(environment.tariff(), KilowattHourRate::from(0.95));
        assert!(environment.is_owned_by("u-1"));
        Ok(())
    }

    #[test]
    fn test_numeric_id_and_text_tariff() -> Result<(), InvalidInput> {
        let row: EnvironmentRow =
            serde_json::from_value(json!({ "id": 7, "energy_tariff": "0.8" })).unwrap();
        let environment = Environment::try_from(&row)?;
        assert_eq!(environment.id(), "7");
        assert_eq!(environment.name(), "7");
        assert_eq!(environment.kind(), None);
        Ok(())
    }

    #[test]
    fn test_missing_tariff_is_rejected() {
        let row: EnvironmentRow = serde_json::from_value(json!({ "id": "b0c1" })).unwrap();
        assert_eq!(
            Environment::try_from(&row),
            Err(InvalidInput::Missing { field: Field::EnergyTariff }),
        );
    }

    #[test]
    fn test_negative_tariff_is_rejected() {
        let result = Environment::builder().id("b0c1").tariff_per_kwh(-0.1).build();
        assert!(matches!(result, Err(InvalidInput::Negative { field: Field::EnergyTariff, .. })));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!("residencial".parse::<EnvironmentKind>(), Ok(EnvironmentKind::Residential));
        assert_eq!(" Industrial ".parse::<EnvironmentKind>(), Ok(EnvironmentKind::Industrial));
        assert_eq!(
            "garage".parse::<EnvironmentKind>(),
            Err(InvalidInput::UnknownKind { value: "garage".into() }),
        );
    }
}
