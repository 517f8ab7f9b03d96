//! Search against the external book catalogs.
//!
//! Two sources are queried one after the other: a Google Books volumes endpoint and the
//! Mann-Ivanov-Ferber publisher search. Each answers in its own shape; both are
//! normalized into [`ExternalBookRecord`] and concatenated, Google first.
//!
//! A source that fails (transport error, non-2xx status, undecodable body) is logged and
//! contributes nothing, so one broken catalog never fails the whole search.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::CatalogSettings;
use crate::models::ExternalBookRecord;

/// Response of the Google Books volumes endpoint. Only the fields we keep.
#[derive(Debug, Deserialize)]
struct GoogleVolumes {
    #[serde(default)]
    items: Option<Vec<GoogleVolume>>,
}

#[derive(Debug, Deserialize)]
struct GoogleVolume {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "volumeInfo")]
    volume_info: Option<GoogleVolumeInfo>,
}

#[derive(Debug, Deserialize)]
struct GoogleVolumeInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "infoLink")]
    info_link: Option<String>,
}

/// One entry of the publisher search response, a bare JSON array.
#[derive(Debug, Deserialize)]
struct PublisherBook {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

pub struct CatalogClient {
    http: Client,
    google_books_url: String,
    publisher_search_url: String,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            google_books_url: settings.google_books_url.clone(),
            publisher_search_url: settings.publisher_search_url.clone(),
        })
    }

    /// Searches every catalog for `query` and merges the results.
    pub async fn search(&self, query: &str) -> Vec<ExternalBookRecord> {
        let mut books = Vec::new();

        match self.fetch::<GoogleVolumes>(&self.google_books_url, query).await {
            Ok(volumes) => books.extend(normalize_google(volumes)),
            Err(e) => log::warn!("Google Books search for {:?} failed: {}", query, e),
        }

        match self
            .fetch::<Vec<PublisherBook>>(&self.publisher_search_url, query)
            .await
        {
            Ok(found) => books.extend(normalize_publisher(found)),
            Err(e) => log::warn!("Publisher search for {:?} failed: {}", query, e),
        }

        log::debug!("Catalog search for {:?} returned {} books", query, books.len());
        books
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &str,
    ) -> Result<T, reqwest::Error> {
        self.http
            .get(url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}

fn normalize_google(volumes: GoogleVolumes) -> Vec<ExternalBookRecord> {
    volumes
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|volume| {
            let (title, info_link) = match volume.volume_info {
                Some(info) => (info.title, info.info_link),
                None => (None, None),
            };
            ExternalBookRecord {
                external_id: volume.id.unwrap_or_default(),
                title: title.unwrap_or_default(),
                description_or_url: info_link.unwrap_or_default(),
            }
        })
        .collect()
}

fn normalize_publisher(found: Vec<PublisherBook>) -> Vec<ExternalBookRecord> {
    found
        .into_iter()
        .map(|book| ExternalBookRecord {
            external_id: id_to_string(book.id),
            title: book.title.unwrap_or_default(),
            description_or_url: book.url.unwrap_or_default(),
        })
        .collect()
}

// The publisher sends numeric ids for some books and string ids for others.
fn id_to_string(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
