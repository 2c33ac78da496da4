use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::Campaign;
use tokio::fs;
use tracing::{debug, error, info};

use super::CampaignStore;
use crate::errors::ServiceError;

/// JSON file-backed campaign collection.
///
/// The file holds a pretty-printed JSON array of records. A missing file is
/// created as `[]` on first load; malformed content is reported, never
/// overwritten.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Point the store at `path`, creating parent directories if needed.
    /// The file itself is created lazily by the first `load`.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::io(format!("create {}", parent.display()), e))?;
        }
        Ok(Arc::new(Self { file_path }))
    }

    // unique per write: concurrent writers must not rename each other's temp file
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
        self.file_path.with_file_name(name)
    }

    async fn write_all(&self, campaigns: &[Campaign]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(campaigns)
            .map_err(|e| ServiceError::io("encode campaigns", e))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data)
            .await
            .map_err(|e| ServiceError::io(format!("write {}", tmp.display()), e))?;
        // rename is atomic on the same filesystem, so readers see old or new, never half
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::io(format!("replace {}", self.file_path.display()), e));
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Campaign>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!(path = %self.file_path.display(), err = %e, "campaign file is corrupt");
                ServiceError::io(format!("parse {}", self.file_path.display()), e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.file_path.display(), "campaign file missing; initializing empty collection");
                self.write_all(&[]).await?;
                Ok(Vec::new())
            }
            Err(e) => Err(ServiceError::io(format!("read {}", self.file_path.display()), e)),
        }
    }

    async fn save(&self, campaigns: &[Campaign]) -> Result<(), ServiceError> {
        self.write_all(campaigns).await?;
        debug!(path = %self.file_path.display(), count = campaigns.len(), "campaigns saved");
        Ok(())
    }
}
