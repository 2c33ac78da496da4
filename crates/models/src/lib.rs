pub mod errors;
pub mod campaign;

pub use campaign::{Campaign, CampaignInput, CampaignStatus, StatusUpdate};
