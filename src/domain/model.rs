use crate::utils::error::Fault;

pub const DEFAULT_NAMES: [&str; 4] = ["Rohit", "Shikar", "Virat", "Dhoni"];

/// Fixed-length, read-only sequence of names walked by the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Box<[String]>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checked read; an index at or past `len()` is a fault.
    pub fn get(&self, index: usize) -> Result<&str, Fault> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(Fault::IndexOutOfRange {
                index,
                length: self.names.len(),
            })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES)
    }
}
