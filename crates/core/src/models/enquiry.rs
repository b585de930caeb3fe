//! Enquiry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Space;

/// A renter's contact request against a space, routed to its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,
    pub space_id: String,
    pub space_title: String,
    pub owner_id: String,
    pub user_name: String,
    pub user_mobile: String,
    pub user_email: String,
    pub message: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Enquiry {
    /// Create an enquiry addressed to the owner of `space`
    pub fn new(
        space: &Space,
        user_name: String,
        user_mobile: String,
        user_email: String,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            space_id: space.id.clone(),
            space_title: space.title.clone(),
            owner_id: space.owner_id.clone().unwrap_or_default(),
            user_name,
            user_mobile,
            user_email,
            message,
            created_at: Utc::now(),
        }
    }
}
