use std::sync::Arc;

use async_trait::async_trait;
use models::Campaign;
use tokio::sync::RwLock;

use super::CampaignStore;
use crate::errors::ServiceError;

/// In-memory collection; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Vec<Campaign>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(campaigns) })
    }
}

#[async_trait]
impl CampaignStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Campaign>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, campaigns: &[Campaign]) -> Result<(), ServiceError> {
        *self.inner.write().await = campaigns.to_vec();
        Ok(())
    }
}
