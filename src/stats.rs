//! Per-file dialect counters.
use std::{fs::File, io::Write, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::{dialects::Dialect, error::Error};

/// Number of sentences per dialect.
///
/// Only sentences that passed the language gate are counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectStats {
    pub central: u64,
    pub valencian: u64,
    pub balearic: u64,
    pub unknown: u64,
}

impl DialectStats {
    pub fn increment(&mut self, dialect: Dialect) {
        *self.get_mut(dialect) += 1;
    }

    pub fn get(&self, dialect: Dialect) -> u64 {
        match dialect {
            Dialect::Central => self.central,
            Dialect::Valencian => self.valencian,
            Dialect::Balearic => self.balearic,
            Dialect::Unknown => self.unknown,
        }
    }

    fn get_mut(&mut self, dialect: Dialect) -> &mut u64 {
        match dialect {
            Dialect::Central => &mut self.central,
            Dialect::Valencian => &mut self.valencian,
            Dialect::Balearic => &mut self.balearic,
            Dialect::Unknown => &mut self.unknown,
        }
    }

    pub fn total(&self) -> u64 {
        self.central + self.valencian + self.balearic + self.unknown
    }

    /// Write stats as a 4-space indented JSON object, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        let mut file = File::create(path)?;
        let mut ser =
            serde_json::Serializer::with_formatter(&mut file, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        file.flush()?;
        Ok(())
    }
}

impl std::ops::AddAssign for DialectStats {
    fn add_assign(&mut self, rhs: Self) {
        self.central += rhs.central;
        self.valencian += rhs.valencian;
        self.balearic += rhs.balearic;
        self.unknown += rhs.unknown;
    }
}
