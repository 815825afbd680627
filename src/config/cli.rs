use crate::config::toml_config::TomlConfig;
use crate::domain::model::Roster;
use crate::utils::error::Result;
use crate::utils::validation::{validate_names, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "multi-catch-demo")]
#[command(about = "Walks a roster one past its end and shows which handler catches the fault")]
pub struct CliConfig {
    /// Optional TOML file with a [roster] section
    #[arg(short, long)]
    pub config: Option<String>,

    /// Roster override, comma separated
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// `--names` wins over the config file, which wins over the default roster.
    pub fn resolve_roster(&self) -> Result<Roster> {
        if let Some(names) = &self.names {
            return Ok(Roster::new(names.iter().cloned()));
        }
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file.roster()
            }
            None => Ok(Roster::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(names) = &self.names {
            validate_names("names", names)?;
        }
        Ok(())
    }
}
