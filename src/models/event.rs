//! Event and participant models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::iso_date;

/// A single cycling event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(deserialize_with = "iso_date::deserialize")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Structured data (schema.org JSON-LD) embedded verbatim in the event page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ld_json: Option<serde_json::Value>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// A registered participant of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub detail: ParticipantDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDetail {
    pub age: u32,
    /// Race category; groups participants on the event page.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
