//! Region and year models.

use serde::{Deserialize, Serialize};

use super::Event;

/// A region (county or city) with its yearly event calendars.
///
/// The name is the lookup key and is percent-encoded when placed in a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub years: Vec<Year>,
}

/// One calendar year of events within a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Year {
    pub year: i32,
    pub events: Vec<Event>,
}

impl Region {
    /// Number of events across every year of this region.
    pub fn total_events(&self) -> usize {
        self.years.iter().map(|y| y.events.len()).sum()
    }
}

impl Year {
    /// Number of registered participants across every event of this year.
    pub fn total_participants(&self) -> usize {
        self.events.iter().map(|e| e.participants.len()).sum()
    }
}
