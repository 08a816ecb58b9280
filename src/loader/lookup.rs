//! Exact-match lookups over a loaded dataset.
//!
//! No fuzzy matching: names, years and ids must match exactly. A miss at any
//! level yields `None`; rendering a not-found state is the caller's job.

use crate::models::{DataStructure, Event, Participant, Region, Year};

pub fn find_region<'a>(data: &'a DataStructure, region_name: &str) -> Option<&'a Region> {
    data.regions.iter().find(|r| r.name == region_name)
}

pub fn find_year(region: &Region, year: i32) -> Option<&Year> {
    region.years.iter().find(|y| y.year == year)
}

/// Locate an event by region name, then year, then event id.
pub fn find_event<'a>(
    data: &'a DataStructure,
    region_name: &str,
    year: i32,
    event_id: &str,
) -> Option<&'a Event> {
    let region = find_region(data, region_name)?;
    let year = find_year(region, year)?;
    year.events.iter().find(|e| e.id == event_id)
}

pub fn find_participant<'a>(event: &'a Event, participant_id: &str) -> Option<&'a Participant> {
    event.participants.iter().find(|p| p.id == participant_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_data;

    #[test]
    fn test_find_event_for_every_present_triple() {
        let data = sample_data();
        for region in &data.regions {
            for year in &region.years {
                for event in &year.events {
                    let found = find_event(&data, &region.name, year.year, &event.id).unwrap();
                    assert_eq!(found, event);
                }
            }
        }
    }

    #[test]
    fn test_find_event_misses() {
        let data = sample_data();
        assert!(find_event(&data, "Kaohsiung", 2024, "abc").is_none());
        assert!(find_event(&data, "Taipei", 2022, "abc").is_none());
        assert!(find_event(&data, "Taipei", 2024, "nope").is_none());
        // Event exists in 2024, not 2023.
        assert!(find_event(&data, "Taipei", 2023, "abc").is_none());
        // No partial or case-insensitive matching.
        assert!(find_event(&data, "taipei", 2024, "abc").is_none());
        assert!(find_event(&data, "Taipe", 2024, "abc").is_none());
        assert!(find_event(&data, "Taipei", 2024, "ab").is_none());
    }

    #[test]
    fn test_find_participant() {
        let data = sample_data();
        let event = find_event(&data, "Taipei", 2024, "abc").unwrap();
        for participant in &event.participants {
            assert_eq!(find_participant(event, &participant.id), Some(participant));
        }
        assert!(find_participant(event, "p4").is_none());
        assert!(find_participant(event, "").is_none());
    }

    #[test]
    fn test_find_participant_in_empty_event() {
        let data = sample_data();
        let event = find_event(&data, "Taipei", 2023, "winter-crit").unwrap();
        assert!(find_participant(event, "xyz").is_none());
    }

    #[test]
    fn test_find_region_and_year() {
        let data = sample_data();
        let region = find_region(&data, "New Taipei").unwrap();
        assert_eq!(region.years.len(), 1);
        assert!(find_year(region, 2024).is_some());
        assert!(find_year(region, 2023).is_none());
        assert!(find_region(&data, "New%20Taipei").is_none());
    }
}
