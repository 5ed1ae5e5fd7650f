use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    environment::{Environment, EnvironmentRow},
    equipment::EquipmentRow,
    error::InvalidInput,
    prelude::*,
};

/// Export of the store's `environments` and `equipments` tables.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub environments: Vec<EnvironmentRow>,

    #[serde(default)]
    pub equipments: Vec<EquipmentRow>,
}

impl Snapshot {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read the snapshot from `{}`", path.display()))?;
        let snapshot: Self = serde_json::from_str(&body)
            .with_context(|| format!("failed to deserialize the snapshot `{}`", path.display()))?;
        info!(
            n_environments = snapshot.environments.len(),
            n_equipments = snapshot.equipments.len(),
            "loaded",
        );
        Ok(snapshot)
    }

    /// Validate every environment row, stopping at the first malformed one.
    pub fn environments(&self) -> Result<Vec<Environment>, InvalidInput> {
        self.environments.iter().map(Environment::try_from).collect()
    }

    pub fn environment(&self, id: &str) -> Result<Environment, InvalidInput> {
        self.environments()?
            .into_iter()
            .find(|environment| environment.id() == id)
            .ok_or_else(|| InvalidInput::EnvironmentNotFound { environment_id: id.to_owned() })
    }

    /// The environment the simulation falls back to when none is chosen.
    ///
    /// Validates all the environments, same as [`Snapshot::environment`].
    pub fn first_environment(&self) -> Result<Environment, InvalidInput> {
        self.environments()?.into_iter().next().ok_or(InvalidInput::NoEnvironments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // language=json
    const BODY: &str = r#"{
        "environments": [
            { "id": "office", "name": "Escritório", "type": "Comercial", "energy_tariff": 0.95 },
            { "id": "kitchen", "name": "Cozinha", "type": "Residencial", "energy_tariff": "0.5" }
        ],
        "equipments": [
            { "environment_id": "office", "power_watts": 1200, "hours_per_day": 8, "days_per_month": 22 }
        ]
    }"#;

    #[test]
    fn test_parse() -> Result {
        let snapshot: Snapshot = serde_json::from_str(BODY)?;
        assert_eq!(snapshot.environments()?.len(), 2);
        assert_eq!(snapshot.equipments.len(), 1);
        assert_eq!(snapshot.first_environment()?.id(), "office");
        assert_eq!(snapshot.environment("kitchen")?.name(), "Cozinha");
        Ok(())
    }

    #[test]
    fn test_environment_not_found() -> Result {
        let snapshot: Snapshot = serde_json::from_str(BODY)?;
        assert_eq!(
            snapshot.environment("attic"),
            Err(InvalidInput::EnvironmentNotFound { environment_id: "attic".into() }),
        );
        Ok(())
    }

    #[test]
    fn test_malformed_environment_fails_both_lookups() -> Result {
        let snapshot: Snapshot = serde_json::from_str(
            // language=json
            r#"{
                "environments": [
                    { "id": "office", "energy_tariff": 0.95 },
                    { "id": "kitchen", "energy_tariff": "abc" }
                ]
            }"#,
        )?;
        assert!(matches!(snapshot.first_environment(), Err(InvalidInput::NotNumeric { .. })));
        assert!(matches!(snapshot.environment("office"), Err(InvalidInput::NotNumeric { .. })));
        Ok(())
    }

    #[test]
    fn test_no_environments() {
        assert_eq!(Snapshot::default().first_environment(), Err(InvalidInput::NoEnvironments));
    }

    #[test]
    fn test_missing_tables_default_to_empty() -> Result {
        let snapshot: Snapshot = serde_json::from_str("{}")?;
        assert!(snapshot.environments.is_empty());
        assert!(snapshot.equipments.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        assert!(Snapshot::read("/nonexistent/snapshot.json").is_err());
    }
}
