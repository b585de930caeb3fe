//! Space model - a rentable listing

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Billing period for a listing's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Hour,
    Day,
    #[default]
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Period::Hour),
            "day" => Ok(Period::Day),
            "month" => Ok(Period::Month),
            other => Err(crate::Error::Validation(format!(
                "Unknown billing period: {}",
                other
            ))),
        }
    }
}

/// Listing category label.
///
/// The known labels are listed in [`Category::KNOWN`], but any string is
/// accepted so new categories can be introduced without a schema change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    /// Sentinel meaning "no category filter"
    pub const ALL: &'static str = "All";

    /// Category assigned to drafts that don't pick one
    pub const DEFAULT: &'static str = "Hot Desk";

    pub const KNOWN: &'static [&'static str] = &[
        "Hot Desk",
        "Dedicated Desk",
        "Private Cabin / Private Office",
        "Meeting Rooms",
        "Conference / Training Rooms",
        "Virtual Office",
        "Day Pass / Hourly Pass Areas",
        "Event Spaces",
        "Creator / Studio Rooms",
        "Phone Booths / Quiet Pods",
        "Flexi Zones",
        "Dedicated Team Suites",
        "Pantry / Café Zones",
        "Breakout Spaces",
        "Storage / Locker Zones",
        "Parking Slots",
        "Outdoor Working Spaces",
        "Utility / Service Rooms",
        "Managed Office",
        "Enterprise Suites",
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label belongs to the enumerated set
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// All known categories, in display order
    pub fn known() -> impl Iterator<Item = Category> {
        Self::KNOWN.iter().map(|label| Category::new(*label))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// A rentable listing.
///
/// Owner contact fields are a denormalized copy taken when the listing is
/// created, not a join against the owner collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub title: String,
    pub category: Category,
    pub price: f64,
    pub period: Period,
    pub location: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
    pub sq_ft: u32,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// View counter; `None` only for records persisted without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Absent for seed listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Kilometres from the observer, set only by a ranked discovery query
    #[serde(skip)]
    pub distance: Option<f64>,
}

impl Space {
    /// Coordinates, if both latitude and longitude are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn views(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// Seed listings carry no creation timestamp
    pub fn is_seed(&self) -> bool {
        self.created_at.is_none()
    }

    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id.as_deref() == Some(owner_id)
    }

    /// Fill an absent view counter with zero
    pub fn with_default_views(mut self) -> Self {
        self.views.get_or_insert(0);
        self
    }
}
