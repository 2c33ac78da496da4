//! Service layer for the campaign tracker.
//! - `storage`: whole-collection load/save behind the `CampaignStore` trait.
//! - `campaign_service`: list/create/update-status/delete, each one store round trip.
//! - Request handling never touches files directly.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod campaign_service;

pub use campaign_service::CampaignService;
pub use errors::ServiceError;
