#![cfg(test)]
use std::path::PathBuf;

use models::{Campaign, CampaignStatus};

/// Unique path under the system temp dir; the file itself is not created.
pub fn temp_data_file(prefix: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("{prefix}_{}", uuid::Uuid::new_v4()))
        .join("campaigns.json")
}

pub async fn cleanup(path: &std::path::Path) {
    if let Some(dir) = path.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}

pub fn campaign(name: &str, client: &str, status: CampaignStatus) -> Campaign {
    Campaign {
        name: name.into(),
        client: client.into(),
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        status,
    }
}
