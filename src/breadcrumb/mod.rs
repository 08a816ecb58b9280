//! Breadcrumb trails derived from a URL path.
//!
//! Purely syntactic: the trail is reconstructed from the shape of the path and
//! never checked against the loaded dataset, so paths naming regions or events
//! that do not exist still get a trail.

use serde::{Deserialize, Serialize};

use crate::paths::decode_segment;

pub const HOME_LABEL: &str = "Home";
pub const EVENT_LABEL: &str = "Event Details";
pub const PARTICIPANT_LABEL: &str = "Participant Profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

impl Breadcrumb {
    fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Build the breadcrumb trail for `path`.
///
/// Always starts with Home. Each further level is added only while the
/// `region`/`year`/`event`/`participant` markers sit at their expected
/// positions with a value after them; the first mismatch ends the trail.
/// Raw segments are echoed into the crumb paths without re-encoding.
pub fn breadcrumbs_for(path: &str) -> Vec<Breadcrumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut trail = vec![Breadcrumb::new(HOME_LABEL, "/")];

    let [marker, region, rest @ ..] = segments.as_slice() else {
        return trail;
    };
    if *marker != "region" {
        return trail;
    }
    let region_path = format!("/region/{}", region);
    trail.push(Breadcrumb::new(decode_segment(region), region_path.clone()));

    let [marker, year, rest @ ..] = rest else {
        return trail;
    };
    if *marker != "year" {
        return trail;
    }
    let year_path = format!("{}/year/{}", region_path, year);
    trail.push(Breadcrumb::new(format!("{}年", year), year_path.clone()));

    let [marker, event_id, rest @ ..] = rest else {
        return trail;
    };
    if *marker != "event" {
        return trail;
    }
    trail.push(Breadcrumb::new(
        EVENT_LABEL,
        format!("{}/event/{}", year_path, event_id),
    ));

    if let [marker, _participant_id, ..] = rest {
        if *marker == "participant" {
            trail.push(Breadcrumb::new(PARTICIPANT_LABEL, path));
        }
    }

    trail
}
