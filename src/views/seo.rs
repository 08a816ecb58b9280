//! Page metadata for search engines and link previews.

use serde::Serialize;

pub const SITE_TITLE: &str = "台灣單車賽事 - Taiwan Cycling Events";
pub const SITE_DESCRIPTION: &str =
    "台灣各縣市單車比賽活動資訊平台，提供最新活動資訊與參賽選手資料";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// Structured data embedded verbatim, when the page has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ld_json: Option<serde_json::Value>,
}

impl PageMeta {
    pub fn new(base_url: &str, path: &str, title: Option<&str>) -> Self {
        Self {
            title: page_title(title),
            description: SITE_DESCRIPTION.to_string(),
            canonical: format!("{}{}", base_url.trim_end_matches('/'), path),
            ld_json: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_ld_json(mut self, ld_json: Option<&serde_json::Value>) -> Self {
        self.ld_json = ld_json.cloned();
        self
    }
}

/// `"{title} | {site}"`, or the bare site title for the home page.
pub fn page_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{} | {}", title, SITE_TITLE),
        None => SITE_TITLE.to_string(),
    }
}
