//! Campaign record and the candidate shapes accepted from clients.
//!
//! On the wire and on disk a campaign is `{name, client, startDate, status}`
//! with `startDate` as an ISO `YYYY-MM-DD` string.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [Self::Active, Self::Paused, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = ModelError;

    /// Exact match only; `active` is not `Active`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| {
                ModelError::Validation(format!(
                    "status must be one of Active, Paused, Completed (got {s:?})"
                ))
            })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub name: String,
    pub client: String,
    pub start_date: NaiveDate,
    pub status: CampaignStatus,
}

/// Create payload as received. Every field is optional here so that a
/// missing field surfaces as a validation error naming it, rather than a
/// generic deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CampaignInput {
    /// Validate and convert. `name` and `client` are trimmed.
    pub fn into_campaign(self) -> Result<Campaign, ModelError> {
        let name = required_text("name", self.name)?;
        let client = required_text("client", self.client)?;
        let start_date = required_text("startDate", self.start_date)?;
        let start_date = parse_iso_date(&start_date)?;
        let status = self
            .status
            .ok_or_else(|| ModelError::missing("status"))?
            .parse::<CampaignStatus>()?;
        Ok(Campaign { name, client, start_date, status })
    }
}

/// Body of a status update: `{"status": "..."}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusUpdate {
    pub fn into_status(self) -> Result<CampaignStatus, ModelError> {
        self.status.ok_or_else(|| ModelError::missing("status"))?.parse()
    }
}

/// Strict `YYYY-MM-DD`: chrono alone also takes unpadded `2024-1-1`, which
/// would then be stored as a different string than the one submitted.
fn parse_iso_date(s: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|d| d.format("%Y-%m-%d").to_string() == s)
        .ok_or_else(|| ModelError::Validation(format!("startDate must be an ISO date (YYYY-MM-DD), got {s:?}")))
}

fn required_text(field: &str, value: Option<String>) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::missing(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::empty(field));
    }
    Ok(trimmed.to_string())
}
