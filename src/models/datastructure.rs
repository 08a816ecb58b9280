//! Root document model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{iso_date, iso_timestamp};
use super::Region;

/// The whole site dataset as loaded from the JSON source.
///
/// Instances are never mutated after loading; a refresh replaces the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStructure {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub latest_events: Vec<LatestEvent>,
    #[serde(deserialize_with = "iso_timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
}

impl DataStructure {
    /// An empty but well-formed dataset stamped with the current time.
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            latest_events: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.latest_events.is_empty()
    }
}

/// Home page feed entry pointing into the region/year/event tree.
///
/// `title`, `summary` and `date` are copies made when the document was written
/// and may be stale; resolve the entry against the tree before displaying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestEvent {
    pub event_id: String,
    pub title: String,
    pub summary: String,
    #[serde(deserialize_with = "iso_date::deserialize")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
