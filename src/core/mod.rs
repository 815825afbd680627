pub mod demo;
pub mod handler;

pub use crate::domain::model::Roster;
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::{Fault, Result};
pub use demo::Outcome;
