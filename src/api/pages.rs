//! Page data endpoints, one per page of the site.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::views::{
    event_view, home_view, participant_view, region_view, year_view, EventView, HomeView,
    ParticipantView, RegionView, YearView,
};
use crate::AppState;

fn parse_year(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid year: {}", raw)))
}

/// GET /api/home - Latest events feed and region list.
pub async fn get_home(State(state): State<AppState>) -> ApiResult<HomeView> {
    let data = state.loader.load(false).await;
    success(
        home_view(&data, &state.config.base_url),
        Some(data.last_updated),
    )
}

/// GET /api/regions/{region}
pub async fn get_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> ApiResult<RegionView> {
    let data = state.loader.load(false).await;
    let last_updated = Some(data.last_updated);

    match region_view(&data, &region, &state.config.base_url) {
        Some(view) => success(view, last_updated),
        None => error(
            AppError::NotFound(format!("Region {} not found", region)),
            last_updated,
        ),
    }
}

/// GET /api/regions/{region}/years/{year}
pub async fn get_year(
    State(state): State<AppState>,
    Path((region, year)): Path<(String, String)>,
) -> ApiResult<YearView> {
    let year = parse_year(&year)?;
    let data = state.loader.load(false).await;
    let last_updated = Some(data.last_updated);

    match year_view(&data, &region, year, &state.config.base_url) {
        Some(view) => success(view, last_updated),
        None => error(
            AppError::NotFound(format!("Year {} of {} not found", year, region)),
            last_updated,
        ),
    }
}

/// GET /api/regions/{region}/years/{year}/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    Path((region, year, event_id)): Path<(String, String, String)>,
) -> ApiResult<EventView> {
    let year = parse_year(&year)?;
    let data = state.loader.load(false).await;
    let last_updated = Some(data.last_updated);

    match event_view(&data, &region, year, &event_id, &state.config.base_url) {
        Some(view) => success(view, last_updated),
        None => error(
            AppError::NotFound(format!("Event {} not found", event_id)),
            last_updated,
        ),
    }
}

/// GET /api/regions/{region}/years/{year}/events/{event_id}/participants/{participant_id}
pub async fn get_participant(
    State(state): State<AppState>,
    Path((region, year, event_id, participant_id)): Path<(String, String, String, String)>,
) -> ApiResult<ParticipantView> {
    let year = parse_year(&year)?;
    let data = state.loader.load(false).await;
    let last_updated = Some(data.last_updated);

    match participant_view(
        &data,
        &region,
        year,
        &event_id,
        &participant_id,
        &state.config.base_url,
    ) {
        Some(view) => success(view, last_updated),
        None => error(
            AppError::NotFound(format!(
                "Participant {} of event {} not found",
                participant_id, event_id
            )),
            last_updated,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024").unwrap(), 2024);
        assert!(matches!(parse_year("20x4"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_year(""), Err(AppError::BadRequest(_))));
    }
}
