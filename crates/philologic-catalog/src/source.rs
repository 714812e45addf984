use async_trait::async_trait;
use philologic_common::{LearningModule, PhilosopherRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed ({0})")]
    Status(u16),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Philosopher not found: {0}")]
    NotFound(i64),
}

/// Where the philosopher catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All philosophers, in display order.
    async fn philosophers(&self) -> Result<Vec<PhilosopherRecord>, CatalogError>;

    /// Learning modules for one philosopher, in display order.
    async fn modules(&self, philosopher_id: i64) -> Result<Vec<LearningModule>, CatalogError>;

    /// Short label for logs and the health endpoint.
    fn describe(&self) -> String;
}
