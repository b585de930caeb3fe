//! Data models for NearbySpace

mod enquiry;
mod location;
mod owner;
mod space;

pub use enquiry::*;
pub use location::*;
pub use owner::*;
pub use space::*;
