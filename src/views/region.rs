//! Region and year page views.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;

use super::PageMeta;
use crate::breadcrumb::{breadcrumbs_for, Breadcrumb};
use crate::loader::{find_region, find_year};
use crate::models::{DataStructure, Event, Region, Year};
use crate::paths::{event_path, region_path, year_path};

/// Region summary as shown on the home page and the region page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCard {
    pub name: String,
    pub path: String,
    pub total_events: usize,
    /// Most recent year first.
    pub years: Vec<YearCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCard {
    pub year: i32,
    pub path: String,
    pub event_count: usize,
    pub total_participants: usize,
}

/// Event summary used in listings and the latest-events feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub region: String,
    pub year: i32,
    pub path: String,
    pub participant_count: usize,
}

impl RegionCard {
    pub fn new(region: &Region) -> Self {
        let mut years: Vec<&Year> = region.years.iter().collect();
        years.sort_by_key(|y| Reverse(y.year));

        Self {
            name: region.name.clone(),
            path: region_path(&region.name),
            total_events: region.total_events(),
            years: years
                .into_iter()
                .map(|y| YearCard {
                    year: y.year,
                    path: year_path(&region.name, y.year),
                    event_count: y.events.len(),
                    total_participants: y.total_participants(),
                })
                .collect(),
        }
    }
}

impl EventCard {
    pub fn new(region: &str, year: i32, event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            summary: event.summary.clone(),
            date: event.date,
            location: event.location.clone(),
            region: region.to_string(),
            year,
            path: event_path(region, year, &event.id),
            participant_count: event.participants.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionView {
    pub region: RegionCard,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearView {
    pub region: String,
    pub year: i32,
    /// Earliest event first.
    pub events: Vec<EventCard>,
    pub total_participants: usize,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub meta: PageMeta,
}

pub fn region_view(data: &DataStructure, region_name: &str, base_url: &str) -> Option<RegionView> {
    let region = find_region(data, region_name)?;
    let path = region_path(&region.name);

    Some(RegionView {
        region: RegionCard::new(region),
        breadcrumbs: breadcrumbs_for(&path),
        meta: PageMeta::new(base_url, &path, Some(region.name.as_str())),
    })
}

pub fn year_view(
    data: &DataStructure,
    region_name: &str,
    year: i32,
    base_url: &str,
) -> Option<YearView> {
    let region = find_region(data, region_name)?;
    let year_data = find_year(region, year)?;
    let path = year_path(&region.name, year);

    let mut events: Vec<EventCard> = year_data
        .events
        .iter()
        .map(|e| EventCard::new(&region.name, year, e))
        .collect();
    events.sort_by_key(|e| e.date);

    let title = format!("{} {}年", region.name, year);

    Some(YearView {
        region: region.name.clone(),
        year,
        events,
        total_participants: year_data.total_participants(),
        breadcrumbs: breadcrumbs_for(&path),
        meta: PageMeta::new(base_url, &path, Some(title.as_str())),
    })
}
