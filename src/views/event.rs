//! Event and participant page views.

use serde::Serialize;

use super::PageMeta;
use crate::breadcrumb::{breadcrumbs_for, Breadcrumb};
use crate::loader::{find_event, find_participant};
use crate::models::{DataStructure, Event, Participant};
use crate::paths::{event_path, participant_path};

/// Participants sharing a race category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub participants: Vec<ParticipantCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantCard {
    #[serde(flatten)]
    pub participant: Participant,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub region: String,
    pub year: i32,
    pub path: String,
    pub event: Event,
    pub categories: Vec<CategoryGroup>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantView {
    pub region: String,
    pub year: i32,
    pub event_id: String,
    pub event_title: String,
    pub event_path: String,
    pub participant: Participant,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub meta: PageMeta,
}

/// Group an event's participants by category.
///
/// Groups appear in the order their category is first seen and keep the
/// roster order within each group.
pub fn group_by_category(region: &str, year: i32, event: &Event) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for participant in &event.participants {
        let card = ParticipantCard {
            participant: participant.clone(),
            path: participant_path(region, year, &event.id, &participant.id),
        };
        match groups
            .iter_mut()
            .find(|g| g.category == participant.detail.category)
        {
            Some(group) => group.participants.push(card),
            None => groups.push(CategoryGroup {
                category: participant.detail.category.clone(),
                participants: vec![card],
            }),
        }
    }

    groups
}

pub fn event_view(
    data: &DataStructure,
    region: &str,
    year: i32,
    event_id: &str,
    base_url: &str,
) -> Option<EventView> {
    let event = find_event(data, region, year, event_id)?;
    let path = event_path(region, year, &event.id);

    let meta = PageMeta::new(base_url, &path, Some(event.title.as_str()))
        .with_description(&event.summary)
        .with_ld_json(event.ld_json.as_ref());

    Some(EventView {
        region: region.to_string(),
        year,
        categories: group_by_category(region, year, event),
        breadcrumbs: breadcrumbs_for(&path),
        event: event.clone(),
        path,
        meta,
    })
}

pub fn participant_view(
    data: &DataStructure,
    region: &str,
    year: i32,
    event_id: &str,
    participant_id: &str,
    base_url: &str,
) -> Option<ParticipantView> {
    let event = find_event(data, region, year, event_id)?;
    let participant = find_participant(event, participant_id)?;
    let path = participant_path(region, year, &event.id, &participant.id);

    Some(ParticipantView {
        region: region.to_string(),
        year,
        event_id: event.id.clone(),
        event_title: event.title.clone(),
        event_path: event_path(region, year, &event.id),
        participant: participant.clone(),
        breadcrumbs: breadcrumbs_for(&path),
        meta: PageMeta::new(base_url, &path, Some(participant.name.as_str())),
    })
}
