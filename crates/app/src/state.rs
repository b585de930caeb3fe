//! Application state management

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use directories::ProjectDirs;
use nearby_core::{InventoryStore, Owner, SqliteStore};
use nearby_net::{FixedLocation, GeolocationProvider, Locator, Unsupported};

use crate::config::{Config, CONFIG_FILE};
use crate::error::{AppError, Result};

pub const DB_FILE: &str = "nearby.db";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "nearbyspace", "nearby")
}

/// Default location of the config file
pub fn config_path() -> Result<PathBuf> {
    let dirs = project_dirs().ok_or(AppError::NoProjectDirs("config"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

/// Main application state
pub struct AppState {
    pub config: Config,
    pub store: Arc<Mutex<InventoryStore<SqliteStore>>>,
    data_dir: PathBuf,
}

impl AppState {
    /// Open the store in the configured data directory, or the platform
    /// default when none is configured
    pub fn new(config: Config) -> Result<Self> {
        let data_dir = match config.data_dir.clone() {
            Some(dir) => dir,
            None => Self::data_path()?,
        };
        Self::open(data_dir, config)
    }

    pub fn open(data_dir: PathBuf, config: Config) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;

        let kv = SqliteStore::open(data_dir.join(DB_FILE))?;
        let store = InventoryStore::new(kv).with_options(config.store);
        tracing::debug!(data_dir = %data_dir.display(), "Store opened");

        Ok(Self {
            config,
            store: Arc::new(Mutex::new(store)),
            data_dir,
        })
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = project_dirs().ok_or(AppError::NoProjectDirs("data"))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> MutexGuard<'_, InventoryStore<SqliteStore>> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The signed-in owner, required by owner-only commands
    pub fn require_owner(&self) -> Result<Owner> {
        self.store().current_user()?.ok_or(AppError::NotSignedIn)
    }

    /// Position source for `--locate`: the configured fixed position, or
    /// none on this platform
    pub fn locator(&self) -> Result<Locator<Box<dyn GeolocationProvider>>> {
        let geo = &self.config.geolocation;
        let provider: Box<dyn GeolocationProvider> = match geo.fixed_position()? {
            Some(coords) => Box::new(FixedLocation(coords)),
            None => Box::new(Unsupported),
        };
        Ok(Locator::with_timeout(provider, geo.timeout()))
    }
}
