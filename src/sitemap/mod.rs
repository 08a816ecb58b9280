//! sitemap.xml and robots.txt generation.
//!
//! Pure formatting over an enumerated route list.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::path::Path;

use chrono::NaiveDate;

use crate::errors::AppError;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// One entry per route; home is crawled daily at top priority, the rest weekly.
pub fn sitemap_entries(base_url: &str, routes: &[String]) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    routes
        .iter()
        .map(|route| {
            let (changefreq, priority) = if route == "/" {
                ("daily", "1.0")
            } else {
                ("weekly", "0.8")
            };
            SitemapEntry {
                loc: format!("{}{}", base_url, route),
                changefreq,
                priority,
            }
        })
        .collect()
}

pub fn generate_sitemap(base_url: &str, routes: &[String], lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::with_capacity(128 + routes.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in sitemap_entries(base_url, routes) {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.changefreq);
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(entry.priority);
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn generate_robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

/// Write sitemap.xml and robots.txt into `dir`, creating it if needed.
pub async fn write_static_artifacts(
    dir: &Path,
    base_url: &str,
    routes: &[String],
    lastmod: NaiveDate,
) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create {}: {}", dir.display(), e)))?;

    let sitemap_path = dir.join("sitemap.xml");
    tokio::fs::write(&sitemap_path, generate_sitemap(base_url, routes, lastmod))
        .await
        .map_err(|e| {
            AppError::Internal(format!("Failed to write {}: {}", sitemap_path.display(), e))
        })?;

    let robots_path = dir.join("robots.txt");
    tokio::fs::write(&robots_path, generate_robots_txt(base_url))
        .await
        .map_err(|e| {
            AppError::Internal(format!("Failed to write {}: {}", robots_path.display(), e))
        })?;

    tracing::info!(
        dir = %dir.display(),
        routes = routes.len(),
        "Generated sitemap.xml and robots.txt"
    );
    Ok(())
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::enumerate_routes;
    use crate::testdata::{sample_data, SAMPLE_ROUTE_COUNT};
    use tempfile::TempDir;

    const BASE: &str = "https://cycling.example.org";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[test]
    fn test_entries_priorities() {
        let routes = enumerate_routes(&sample_data());
        let entries = sitemap_entries(BASE, &routes);

        assert_eq!(entries.len(), routes.len());
        assert_eq!(entries[0].loc, "https://cycling.example.org/");
        assert_eq!(entries[0].changefreq, "daily");
        assert_eq!(entries[0].priority, "1.0");
        for entry in &entries[1..] {
            assert_eq!(entry.changefreq, "weekly");
            assert_eq!(entry.priority, "0.8");
        }
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let routes = vec!["/region/Taipei".to_string()];
        let entries = sitemap_entries("https://cycling.example.org/", &routes);
        assert_eq!(entries[0].loc, "https://cycling.example.org/region/Taipei");
    }

    #[test]
    fn test_sitemap_xml() {
        let routes = enumerate_routes(&sample_data());
        let xml = generate_sitemap(BASE, &routes, date());

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert_eq!(xml.matches("<url>").count(), SAMPLE_ROUTE_COUNT);
        assert_eq!(
            xml.matches("<lastmod>2024-05-06</lastmod>").count(),
            SAMPLE_ROUTE_COUNT
        );
        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 1);
        assert_eq!(xml.matches("<changefreq>daily</changefreq>").count(), 1);
        assert!(xml.contains("<loc>https://cycling.example.org/region/New%20Taipei</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let xml = generate_sitemap(BASE, &["/region/a&b".to_string()], date());
        assert!(xml.contains("<loc>https://cycling.example.org/region/a&amp;b</loc>"));
    }

    #[test]
    fn test_empty_route_list() {
        let xml = generate_sitemap(BASE, &[], date());
        assert!(!xml.contains("<url>"));
        assert!(xml.contains("</urlset>"));
    }

    #[test]
    fn test_robots_txt() {
        assert_eq!(
            generate_robots_txt("https://cycling.example.org/"),
            "User-agent: *\nAllow: /\nSitemap: https://cycling.example.org/sitemap.xml\n"
        );
    }

    #[tokio::test]
    async fn test_write_static_artifacts() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");
        let routes = enumerate_routes(&sample_data());

        write_static_artifacts(&out, BASE, &routes, date()).await.unwrap();

        let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), SAMPLE_ROUTE_COUNT);
        let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://cycling.example.org/sitemap.xml"));
    }
}
