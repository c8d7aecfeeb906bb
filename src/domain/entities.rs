//! Domain entities: core data structures

use std::fmt;

/// Year after which a conversion counts as "millennial".
pub const MILLENNIAL_YEAR: i32 = 1980;

/// Data payload of a lineage node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    /// Identifying label, treated as unique by name lookups
    pub name: String,
    /// Year the vampire was converted
    pub year_converted: i32,
}

impl Vampire {
    pub fn new(name: impl Into<String>, year_converted: i32) -> Self {
        Self {
            name: name.into(),
            year_converted,
        }
    }

    /// True if converted strictly after `year`.
    pub fn converted_after(&self, year: i32) -> bool {
        self.year_converted > year
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year_converted)
    }
}
