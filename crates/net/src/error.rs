//! Network error types

use std::io;

use crate::geolocation::GeoError;

/// Network result type
pub type Result<T> = std::result::Result<T, Error>;

/// Network errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Geolocation error: {0}")]
    Geolocation(#[from] GeoError),

    #[error("Not configured: {0}")]
    NotConfigured(&'static str),
}
