//! Regional Cycling Events Backend
//!
//! Read-only data index, navigation and sitemap service for the regional cycling events site.

mod api;
mod breadcrumb;
mod config;
mod errors;
mod loader;
mod models;
mod paths;
mod routes;
mod sitemap;
mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use loader::{DataLoader, SiteSource};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DataLoader<SiteSource>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting Regional Cycling Events Backend");
    tracing::info!("Data source: {}", config.data_source);
    tracing::info!("Base URL: {}", config.base_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    let source = SiteSource::from_location(&config.data_source);
    let loader = Arc::new(DataLoader::new(source, config.cache_ttl));

    // Write crawler files for the static build
    if let Some(output_dir) = &config.output_dir {
        let routes = routes::enumerate_routes_from_source(loader.source()).await;
        sitemap::write_static_artifacts(
            output_dir,
            &config.base_url,
            &routes,
            Utc::now().date_naive(),
        )
        .await?;
    }

    // Warm the cache
    let data = loader.load(false).await;
    if data.is_empty() {
        tracing::warn!("Dataset is empty; pages will report data unavailable");
    }

    let state = AppState {
        loader,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/data", get(api::get_data))
        .route("/home", get(api::get_home))
        .route("/regions/{region}", get(api::get_region))
        .route("/regions/{region}/years/{year}", get(api::get_year))
        .route(
            "/regions/{region}/years/{year}/events/{event_id}",
            get(api::get_event),
        )
        .route(
            "/regions/{region}/years/{year}/events/{event_id}/participants/{participant_id}",
            get(api::get_participant),
        )
        .route("/breadcrumbs", get(api::get_breadcrumbs))
        .route("/routes", get(api::get_routes));

    let site_routes = Router::new()
        .route("/health", get(health_check))
        .route("/sitemap.xml", get(api::get_sitemap))
        .route("/robots.txt", get(api::get_robots));

    Router::new()
        .nest("/api", api_routes)
        .merge(site_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod testdata;
