use crate::domain::model::Roster;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_names, validate_required_field, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub roster: Option<RosterConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub names: Vec<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|source| DemoError::ConfigReadError {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn roster(&self) -> Result<Roster> {
        let roster = validate_required_field("roster", &self.roster)?;
        Ok(Roster::new(roster.names.iter().cloned()))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let roster = validate_required_field("roster", &self.roster)?;
        validate_names("roster.names", &roster.names)
    }
}
