//! Data sources the loader can read the site document from.

use std::future::Future;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::DataStructure;

/// Somewhere the site document can be fetched from.
pub trait DataSource: Send + Sync {
    /// Fetch and parse the whole document.
    fn fetch(&self) -> impl Future<Output = Result<DataStructure, AppError>> + Send;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<DataStructure, AppError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// JSON document served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<DataStructure, AppError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        // Parse from bytes so a bad body is reported as malformed, not unavailable.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// The source configured for the running site.
#[derive(Debug, Clone)]
pub enum SiteSource {
    File(FileSource),
    Http(HttpSource),
}

impl SiteSource {
    /// Pick a source from a configured location: http(s) URLs are fetched,
    /// anything else is treated as a filesystem path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SiteSource::Http(HttpSource::new(location))
        } else {
            SiteSource::File(FileSource::new(location))
        }
    }
}

impl DataSource for SiteSource {
    async fn fetch(&self) -> Result<DataStructure, AppError> {
        match self {
            SiteSource::File(source) => source.fetch().await,
            SiteSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            SiteSource::File(source) => source.describe(),
            SiteSource::Http(source) => source.describe(),
        }
    }
}
