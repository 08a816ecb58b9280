//! Enumeration of every concrete page path in a dataset.
//!
//! Feeds sitemap generation and static pre-rendering.

use crate::loader::DataSource;
use crate::models::DataStructure;
use crate::paths::{event_path, participant_path, region_path, year_path};

/// Every page path, depth-first in dataset order: home, then each region
/// followed by its years, each year by its events, each event by its
/// participants.
pub fn enumerate_routes(data: &DataStructure) -> Vec<String> {
    let mut routes = vec!["/".to_string()];

    for region in &data.regions {
        routes.push(region_path(&region.name));

        for year in &region.years {
            routes.push(year_path(&region.name, year.year));

            for event in &year.events {
                routes.push(event_path(&region.name, year.year, &event.id));

                routes.extend(
                    event
                        .participants
                        .iter()
                        .map(|p| participant_path(&region.name, year.year, &event.id, &p.id)),
                );
            }
        }
    }

    routes
}

/// Read the source directly and enumerate its routes.
///
/// Any read or parse failure degrades to the home route alone so a build is
/// never blocked by bad data.
pub async fn enumerate_routes_from_source<S: DataSource>(source: &S) -> Vec<String> {
    match source.fetch().await {
        Ok(data) => enumerate_routes(&data),
        Err(e) => {
            tracing::error!(
                source = %source.describe(),
                error = %e,
                "Failed to enumerate routes, falling back to home only"
            );
            vec!["/".to_string()]
        }
    }
}
