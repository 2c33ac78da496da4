//! Storage abstractions for the service layer
//!
//! A store persists the entire campaign collection as one unit. Callers load
//! everything, mutate in memory, and save everything back.

use async_trait::async_trait;
use models::Campaign;

use crate::errors::ServiceError;

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// Whole-collection persistence. Implementations can be file-backed,
/// in-memory, or a real database.
///
/// Each call is atomic for its caller, but nothing here serializes a
/// `load`/`save` pair across callers; see `CampaignService` for that.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// All persisted records, in stored order. Initializes empty state on first use.
    async fn load(&self) -> Result<Vec<Campaign>, ServiceError>;
    /// Replace the persisted collection with `campaigns`.
    async fn save(&self, campaigns: &[Campaign]) -> Result<(), ServiceError>;
}
