//! Application error type

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] nearby_core::Error),

    #[error(transparent)]
    Net(#[from] nearby_net::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine {0} directory")]
    NoProjectDirs(&'static str),

    #[error("Not signed in; run `nearby login` or `nearby register` first")]
    NotSignedIn,

    #[error("No owner registered with email {0}")]
    UnknownEmail(String),
}
