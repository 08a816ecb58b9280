//! Home page view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{EventCard, PageMeta, RegionCard};
use crate::loader::find_event;
use crate::models::DataStructure;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub latest_events: Vec<EventCard>,
    pub regions: Vec<RegionCard>,
    pub last_updated: DateTime<Utc>,
    pub meta: PageMeta,
}

/// Resolve the latest-events feed against the live tree.
///
/// Feed entries only point at events; the display fields always come from the
/// tree. Entries missing a region or year, or naming an event that no longer
/// exists, are dropped.
pub fn resolve_latest_events(data: &DataStructure) -> Vec<EventCard> {
    data.latest_events
        .iter()
        .filter_map(|latest| {
            let region = latest.region.as_deref()?;
            let year = latest.year?;
            let event = find_event(data, region, year, &latest.event_id)?;
            Some(EventCard::new(region, year, event))
        })
        .collect()
}

pub fn home_view(data: &DataStructure, base_url: &str) -> HomeView {
    HomeView {
        latest_events: resolve_latest_events(data),
        regions: data.regions.iter().map(RegionCard::new).collect(),
        last_updated: data.last_updated,
        meta: PageMeta::new(base_url, "/", None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_data;
    use crate::views::SITE_TITLE;

    #[test]
    fn test_latest_events_use_live_fields() {
        let latest = resolve_latest_events(&sample_data());

        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].id, "river-loop");
        assert_eq!(latest[0].region, "New Taipei");
        assert_eq!(latest[1].id, "abc");
        assert_eq!(latest[1].title, "Yangmingshan Climb");
        assert_eq!(latest[1].summary, "Hill climb to Xiaoyoukeng");
        assert_eq!(latest[1].date.to_string(), "2024-04-20");
        assert_eq!(latest[1].path, "/region/Taipei/year/2024/event/abc");
    }

    #[test]
    fn test_home_view() {
        let data = sample_data();
        let view = home_view(&data, "https://cycling.example.org");

        assert_eq!(view.regions.len(), 2);
        assert_eq!(view.regions[0].name, "Taipei");
        assert_eq!(view.last_updated, data.last_updated);
        assert_eq!(view.meta.title, SITE_TITLE);
        assert_eq!(view.meta.canonical, "https://cycling.example.org/");
    }

    #[test]
    fn test_home_view_of_empty_dataset() {
        let view = home_view(&DataStructure::empty(), "https://cycling.example.org");
        assert!(view.latest_events.is_empty());
        assert!(view.regions.is_empty());
    }
}
