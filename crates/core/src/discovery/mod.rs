//! Listing discovery
//!
//! Turns the full inventory plus the renter's filter, search text and
//! (optionally) position into the ordered result list:
//!
//! 1. category filter (exact, case-sensitive; `"All"` disables it)
//! 2. text filter over title, location and address (case-insensitive)
//! 3. distance ranking when an observer coordinate is known
//!
//! Every step is total: empty inputs and missing coordinates just mean
//! fewer results or no ranking.

mod geo;
mod recent;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::invariants::assert_ranked_order;
use crate::models::{Category, Coordinates, Space};

pub use geo::{format_distance, haversine_km, EARTH_RADIUS_KM};
pub use recent::{recent, RECENT_FEED_LEN};

/// What the renter is looking for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Exact category label, or [`Category::ALL`]
    pub category: String,
    pub search_text: String,
    pub observer: Option<Coordinates>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            category: Category::ALL.to_string(),
            search_text: String::new(),
            observer: None,
        }
    }
}

impl Query {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn near(mut self, observer: Coordinates) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Optional observer, for callers whose location lookup may have failed
    pub fn near_opt(mut self, observer: Option<Coordinates>) -> Self {
        self.observer = observer;
        self
    }
}

/// Run a discovery query over `spaces`, preserving input order unless an
/// observer is present
pub fn discover(spaces: &[Space], query: &Query) -> Vec<Space> {
    let filtered: Vec<Space> = spaces
        .iter()
        .filter(|s| matches_category(s, &query.category))
        .filter(|s| matches_text(s, &query.search_text))
        .cloned()
        .collect();

    match query.observer {
        Some(observer) => rank_by_distance(filtered, observer),
        None => filtered,
    }
}

/// Category filter predicate; [`Category::ALL`] matches everything
pub fn matches_category(space: &Space, category: &str) -> bool {
    category == Category::ALL || space.category.as_str() == category
}

/// Text filter predicate; blank text matches everything
pub fn matches_text(space: &Space, text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    let needle = text.to_lowercase();
    [&space.title, &space.location, &space.address]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Annotate each space with its distance from `observer` and sort nearest
/// first. Spaces without coordinates keep `distance = None` and trail the
/// ranked ones in their original order.
pub fn rank_by_distance(mut spaces: Vec<Space>, observer: Coordinates) -> Vec<Space> {
    for space in &mut spaces {
        space.distance = space.coordinates().map(|c| haversine_km(observer, c));
    }

    // sort_by is stable, so ties keep their input order
    spaces.sort_by(|a, b| compare_distance(a.distance, b.distance));

    assert_ranked_order(&spaces);
    spaces
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
