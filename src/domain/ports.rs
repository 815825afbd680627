use crate::utils::error::Result;

/// Destination for transcript lines.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
