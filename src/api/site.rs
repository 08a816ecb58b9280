//! Site-wide endpoints: raw dataset, navigation helpers, sitemap and robots.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use super::{success, ApiResult};
use crate::breadcrumb::{breadcrumbs_for, Breadcrumb};
use crate::models::DataStructure;
use crate::routes::enumerate_routes;
use crate::sitemap::{generate_robots_txt, generate_sitemap};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    /// Bypass the cache and re-read the source.
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    pub path: String,
}

/// GET /api/data - The full dataset.
pub async fn get_data(
    State(state): State<AppState>,
    Query(params): Query<DataQuery>,
) -> ApiResult<DataStructure> {
    let data = state.loader.load(params.refresh).await;
    success((*data).clone(), Some(data.last_updated))
}

/// GET /api/breadcrumbs?path=... - Trail for an arbitrary site path.
pub async fn get_breadcrumbs(Query(params): Query<BreadcrumbQuery>) -> ApiResult<Vec<Breadcrumb>> {
    success(breadcrumbs_for(&params.path), None)
}

/// GET /api/routes - Every page path of the current dataset.
pub async fn get_routes(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let data = state.loader.load(false).await;
    success(enumerate_routes(&data), Some(data.last_updated))
}

/// GET /sitemap.xml
pub async fn get_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.loader.load(false).await;
    let routes = enumerate_routes(&data);
    let xml = generate_sitemap(&state.config.base_url, &routes, Utc::now().date_naive());

    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

/// GET /robots.txt
pub async fn get_robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        generate_robots_txt(&state.config.base_url),
    )
}
