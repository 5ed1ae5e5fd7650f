use std::fmt::{Display, Formatter};

/// Rejection of a record or parameter before it reaches the aggregation.
///
/// Carries the offending field so that a form can point at it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("`{field}` is missing")]
    Missing { field: Field },

    #[error("`{field}` is not a number: `{value}`")]
    NotNumeric { field: Field, value: String },

    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative { field: Field, value: f64 },

    #[error("`{field}` must be at most {max}, got {value}")]
    OutOfRange { field: Field, value: f64, max: f64 },

    #[error("`{field}` must be a whole number, got {value}")]
    NotInteger { field: Field, value: f64 },

    #[error("{what} is too large to compute")]
    Overflow { what: &'static str },

    #[error("unknown environment type: `{value}`")]
    UnknownKind { value: String },

    #[error("equipment `{equipment_id}` refers to an unknown environment `{environment_id}`")]
    UnknownEnvironment { equipment_id: String, environment_id: String },

    #[error("environment `{environment_id}` is not found")]
    EnvironmentNotFound { environment_id: String },

    #[error("there are no environments")]
    NoEnvironments,
}

/// Names of the validated fields, spelled as the store's columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Id,
    PowerWatts,
    HoursPerDay,
    DaysPerMonth,
    Quantity,
    Area,
    EnergyTariff,
}

impl Field {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::PowerWatts => "power_watts",
            Self::HoursPerDay => "hours_per_day",
            Self::DaysPerMonth => "days_per_month",
            Self::Quantity => "quantity",
            Self::Area => "area_m2",
            Self::EnergyTariff => "energy_tariff",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_column() {
        let error = InvalidInput::Missing { field: Field::PowerWatts };
        assert_eq!(error.to_string(), "`power_watts` is missing");
    }

    #[test]
    fn test_out_of_range_message() {
        let error = InvalidInput::OutOfRange { field: Field::HoursPerDay, value: 25.0, max: 24.0 };
        assert_eq!(error.to_string(), "`hours_per_day` must be at most 24, got 25");
    }

    #[test]
    fn test_overflow_message() {
        let error = InvalidInput::Overflow { what: "total cost" };
        assert_eq!(error.to_string(), "total cost is too large to compute");
    }
}
