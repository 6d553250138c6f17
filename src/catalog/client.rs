use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::catalog::error::CatalogError;
use crate::catalog::model::{CatalogSummary, DetailRecord, ItemDetail, SummaryPage};
use crate::config::CatalogConfig;

/// HTTP access to the catalog's listing and detail endpoints.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/pokemon?limit={limit}`
    pub async fn fetch_page(&self, limit: u32) -> Result<Vec<CatalogSummary>, CatalogError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let page: SummaryPage = self.get_json(url).await?;
        Ok(page.into_summaries())
    }

    /// `GET {base}/pokemon/{name}` with the name lower-cased.
    pub async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError> {
        let key = name.to_lowercase();
        let url = self.endpoint(&["pokemon", &key])?;
        let record: DetailRecord = self.get_json(url).await?;
        Ok(record.into())
    }

    /// Fetch a detail record from a summary's own reference URL.
    pub async fn fetch_detail_at(&self, detail_url: &str) -> Result<ItemDetail, CatalogError> {
        let url = Url::parse(detail_url).map_err(|e| CatalogError::InvalidUrl {
            url: detail_url.to_string(),
            reason: e.to_string(),
        })?;
        let record: DetailRecord = self.get_json(url).await?;
        Ok(record.into())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        match timeout(self.request_timeout, self.do_get(url)).await {
            Ok(result) => result,
            Err(_) => Err(CatalogError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let url_text = url.to_string();
        tracing::debug!(url = %url_text, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url_text,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Connection { source: e })?;

        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode {
            url: url_text,
            source: e,
        })
    }
}
