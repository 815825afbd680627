use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
