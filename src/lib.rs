pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sink::{CaptureSink, ConsoleSink};
pub use config::toml_config::TomlConfig;
pub use core::demo::{run, DemoEngine, Outcome, COMPLETION_MARKER, START_MARKER};
pub use core::handler::{dispatch, Handler, HANDLER_CHAIN};
pub use domain::model::{Roster, DEFAULT_NAMES};
pub use utils::error::{DemoError, Fault, Result};
