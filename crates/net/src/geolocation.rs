//! Observer position acquisition
//!
//! The position lookup is the one asynchronous, failure-prone input to
//! discovery. [`Locator`] bounds it with a timeout, allows a single request
//! in flight, and caches the result so toggling "locate me" off simply
//! forgets the position instead of querying again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use nearby_core::Coordinates;
use tracing::{debug, info, warn};

/// How long a position request may take before it counts as timed out
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why no position is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable")]
    Unavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("A location request is already in progress")]
    Busy,
}

/// Source of the searching user's position
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Resolve the current position once
    async fn current_position(&self) -> Result<Coordinates, GeoError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<P: GeolocationProvider + ?Sized> GeolocationProvider for Box<P> {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        (**self).current_position().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A position supplied up front (configuration or command line)
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl GeolocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Platform without any position source
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

#[async_trait]
impl GeolocationProvider for Unsupported {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "unsupported"
    }
}

/// Clears the in-flight flag even if the request future is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Cached, time-bounded position lookups over a provider
pub struct Locator<P> {
    provider: P,
    timeout: Duration,
    active: Mutex<Option<Coordinates>>,
    in_flight: AtomicBool,
}

impl<P: GeolocationProvider> Locator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_timeout(provider, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(provider: P, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            active: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    fn active(&self) -> std::sync::MutexGuard<'_, Option<Coordinates>> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The cached position, if one is active
    pub fn observer(&self) -> Option<Coordinates> {
        *self.active()
    }

    /// Forget the cached position
    pub fn clear(&self) {
        *self.active() = None;
    }

    /// Return the active position, or request one from the provider.
    ///
    /// Fails with [`GeoError::Busy`] while another request is pending and
    /// with [`GeoError::Timeout`] when the provider takes too long.
    pub async fn acquire(&self) -> Result<Coordinates, GeoError> {
        if let Some(coords) = self.observer() {
            return Ok(coords);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(GeoError::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        debug!(provider = self.provider.name(), "Requesting position");
        let result = match tokio::time::timeout(self.timeout, self.provider.current_position()).await
        {
            Ok(result) => result,
            Err(_) => Err(GeoError::Timeout),
        };

        match result {
            Ok(coords) => {
                *self.active() = Some(coords);
                info!(position = %coords, "Position acquired");
            }
            Err(e) => warn!(provider = self.provider.name(), error = %e, "Position unavailable"),
        }

        result
    }

    /// "Locate me" button: clears an active position, otherwise acquires one.
    /// Returns the new position state.
    pub async fn toggle(&self) -> Result<Option<Coordinates>, GeoError> {
        if self.observer().is_some() {
            self.clear();
            return Ok(None);
        }
        self.acquire().await.map(Some)
    }

    /// Position for a discovery query; failures degrade to unranked results
    pub async fn observer_or_none(&self) -> Option<Coordinates> {
        self.acquire().await.ok()
    }
}
