//! NearbySpace Network Library
//!
//! Asynchronous collaborators around the listing core.
//!
//! # Services
//!
//! - **Geolocation**: resolves the renter's position for distance ranking
//! - **Summary**: AI-written listing blurbs with a static fallback
//! - **Status**: reachability probe for the remote database service
//!
//! # Usage
//!
//! ```ignore
//! let locator = Locator::new(FixedLocation(coords));
//! let query = Query::default().near_opt(locator.observer_or_none().await);
//! let results = nearby_core::discover(&spaces, &query);
//! ```

pub mod error;
pub mod geolocation;
pub mod status;
pub mod summary;

pub use error::{Error, Result};
pub use geolocation::{FixedLocation, GeoError, GeolocationProvider, Locator, Unsupported};
pub use status::{Connectivity, StatusConfig, StatusProbe};
pub use summary::{GeminiClient, NoSummary, SummaryConfig, SummaryProvider};
