//! Catalog fetched from a remote PhiloLogic API.
//!
//! API: {base_url}/api/philosophers
//!      {base_url}/api/philosophers/{id}/modules

use std::time::Duration;

use async_trait::async_trait;
use philologic_common::{LearningModule, PhilosopherRecord};
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::source::{CatalogError, CatalogSource};

pub struct RemoteCatalog {
    base_url: String,
    client: Client,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    /// GET a JSON document; any non-success status is a failure.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        debug!(%url, "catalog response received");
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn philosophers(&self) -> Result<Vec<PhilosopherRecord>, CatalogError> {
        self.fetch_json("/api/philosophers").await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn modules(&self, philosopher_id: i64) -> Result<Vec<LearningModule>, CatalogError> {
        match self.fetch_json(&format!("/api/philosophers/{}/modules", philosopher_id)).await {
            Err(CatalogError::Status(code)) if code == StatusCode::NOT_FOUND.as_u16() => {
                Err(CatalogError::NotFound(philosopher_id))
            }
            other => other,
        }
    }

    fn describe(&self) -> String { format!("remote ({})", self.base_url) }
}
