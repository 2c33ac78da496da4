//! Campaign operations. Each one is a single load/modify/save round trip
//! over the whole collection.

use std::sync::Arc;

use common::metrics;
use models::{Campaign, CampaignInput, CampaignStatus, StatusUpdate};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::errors::ServiceError;
use crate::storage::CampaignStore;

pub struct CampaignService {
    store: Arc<dyn CampaignStore>,
    // Serializes read-modify-write cycles inside this process. Another process
    // sharing the same file can still interleave and lose updates.
    write_lock: Mutex<()>,
}

impl CampaignService {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    /// Full collection, unmodified, in stored order.
    pub async fn list(&self) -> Result<Vec<Campaign>, ServiceError> {
        let res = self.store.load().await;
        observe("list", &res, |all| all.len());
        res
    }

    /// Validate `input` and store it, replacing any campaign with the same name.
    pub async fn create(&self, input: CampaignInput) -> Result<Campaign, ServiceError> {
        let campaign = match input.into_campaign() {
            Ok(c) => c,
            Err(e) => {
                let err = ServiceError::from(e);
                record_failure("create", &err);
                return Err(err);
            }
        };

        let _guard = self.write_lock.lock().await;
        let res: Result<usize, ServiceError> = async {
            let mut all = self.store.load().await?;
            let before = all.len();
            all.retain(|c| c.name != campaign.name);
            let replaced = all.len() != before;
            all.push(campaign.clone());
            self.store.save(&all).await?;
            info!(name = %campaign.name, client = %campaign.client, status = %campaign.status, replaced, "campaign created");
            Ok(all.len())
        }
        .await;
        observe("create", &res, |n| *n);
        res.map(|_| campaign)
    }

    /// Validate a `{"status": ...}` body, then apply it like `update_status`.
    pub async fn apply_status_update(&self, name: &str, update: StatusUpdate) -> Result<Campaign, ServiceError> {
        let status = match update.into_status() {
            Ok(s) => s,
            Err(e) => {
                let err = ServiceError::from(e);
                record_failure("update", &err);
                return Err(err);
            }
        };
        self.update_status(name, status).await
    }

    /// Set the status of the campaign called `name`. Nothing is written when
    /// no such campaign exists.
    pub async fn update_status(&self, name: &str, status: CampaignStatus) -> Result<Campaign, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let res: Result<(Campaign, usize), ServiceError> = async {
            let mut all = self.store.load().await?;
            let found = all
                .iter_mut()
                .find(|c| c.name == name)
                .ok_or_else(|| ServiceError::not_found("campaign"))?;
            let previous = found.status;
            found.status = status;
            let updated = found.clone();
            self.store.save(&all).await?;
            info!(%name, from = %previous, to = %status, "campaign status updated");
            Ok((updated, all.len()))
        }
        .await;
        observe("update", &res, |(_, n)| *n);
        res.map(|(c, _)| c)
    }

    /// Remove every campaign called `name`; returns how many were removed.
    /// Removing a name that doesn't exist is not an error.
    pub async fn delete(&self, name: &str) -> Result<usize, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let res: Result<(usize, usize), ServiceError> = async {
            let mut all = self.store.load().await?;
            let before = all.len();
            all.retain(|c| c.name != name);
            let removed = before - all.len();
            self.store.save(&all).await?;
            info!(%name, removed, "campaign deleted");
            Ok((removed, all.len()))
        }
        .await;
        observe("delete", &res, |(_, n)| *n);
        res.map(|(removed, _)| removed)
    }
}

fn observe<T>(op: &str, res: &Result<T, ServiceError>, count: impl FnOnce(&T) -> usize) {
    match res {
        Ok(v) => {
            metrics::record_operation(op);
            metrics::set_campaign_count(count(v));
        }
        Err(e) => record_failure(op, e),
    }
}

// Every failure is also an operation, so errors never exceed the totals.
fn record_failure(op: &str, err: &ServiceError) {
    metrics::record_operation(op);
    metrics::record_error(op);
    if let ServiceError::Io(msg) = err {
        error!(op, err = %msg, "campaign store failure");
    }
}
