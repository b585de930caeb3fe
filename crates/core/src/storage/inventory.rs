//! Inventory store: owners, spaces, enquiries and the signed-in owner

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::ownership;
use super::traits::KeyValueStore;
use super::StorageKey;
use crate::error::{Error, Result};
use crate::invariants::{
    assert_enquiry_invariants, assert_owner_invariants, assert_space_persistable,
};
use crate::models::{Enquiry, Owner, SocialProvider, Space};
use crate::seed;

/// Store behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Reject registrations whose email (case-insensitive) is already taken
    pub unique_emails: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            unique_emails: true,
        }
    }
}

/// A persisted blob that failed to decode and was replaced by an empty value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub key: StorageKey,
    pub reason: String,
}

/// Owns every persisted collection and the current-session pointer.
///
/// Each mutation rewrites the whole collection blob. There is no writer
/// coordination: with several writers the last write wins.
pub struct InventoryStore<K> {
    kv: K,
    options: StoreOptions,
    seed: Vec<Space>,
    recoveries: Mutex<Vec<Recovery>>,
}

impl<K: KeyValueStore> InventoryStore<K> {
    /// Store over `kv` with the built-in seed listings
    pub fn new(kv: K) -> Self {
        Self::with_seed(kv, seed::spaces())
    }

    pub fn with_seed(kv: K, seed: Vec<Space>) -> Self {
        Self {
            kv,
            options: StoreOptions::default(),
            seed: seed.into_iter().map(Space::with_default_views).collect(),
            recoveries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Underlying medium
    pub fn medium(&self) -> &K {
        &self.kv
    }

    /// Corrupt blobs that were read as empty since this store was opened
    pub fn recoveries(&self) -> Vec<Recovery> {
        self.recovery_log().clone()
    }

    fn recovery_log(&self) -> std::sync::MutexGuard<'_, Vec<Recovery>> {
        self.recoveries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Decode the blob under `key`, treating absence and corruption as
    /// `T::default()`. Corruption is logged and recorded, never returned.
    fn load<T: DeserializeOwned + Default>(&self, key: StorageKey) -> Result<T> {
        let Some(blob) = self.kv.get(key.as_str())? else {
            return Ok(T::default());
        };

        match serde_json::from_str(&blob) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key = %key, error = %e, "Corrupt collection, treating as empty");
                self.recovery_log().push(Recovery {
                    key,
                    reason: e.to_string(),
                });
                Ok(T::default())
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<()> {
        let blob = serde_json::to_string(value)?;
        self.kv.set(key.as_str(), &blob)
    }

    // Owners and session

    /// All registered owners, in registration order
    pub fn list_owners(&self) -> Result<Vec<Owner>> {
        self.load(StorageKey::Owners)
    }

    /// Append `owner` and make it the current session
    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub fn register_owner(&self, owner: Owner) -> Result<()> {
        assert_owner_invariants(&owner);

        let mut owners = self.list_owners()?;
        if self.options.unique_emails && owners.iter().any(|o| o.email_matches(&owner.email)) {
            return Err(Error::EmailTaken(owner.email));
        }

        owners.push(owner.clone());
        self.save(StorageKey::Owners, &owners)?;
        self.set_current_user(Some(&owner))?;

        info!(owners = owners.len(), "Owner registered");
        Ok(())
    }

    /// Sign in by email (case-insensitive). The first matching owner wins;
    /// with no match the session is left untouched.
    #[instrument(skip(self))]
    pub fn login(&self, email: &str) -> Result<Option<Owner>> {
        let owner = self
            .list_owners()?
            .into_iter()
            .find(|o| o.email_matches(email));

        match &owner {
            Some(owner) => {
                self.set_current_user(Some(owner))?;
                info!(owner_id = %owner.id, "Owner signed in");
            }
            None => debug!("No owner with that email"),
        }

        Ok(owner)
    }

    /// Simulated OAuth sign-in: log in the provider's demo identity,
    /// registering it on first use
    #[instrument(skip(self))]
    pub fn social_login(&self, provider: SocialProvider) -> Result<Owner> {
        if let Some(owner) = self.login(provider.demo_email())? {
            return Ok(owner);
        }

        let owner = provider.new_owner();
        self.register_owner(owner.clone())?;
        Ok(owner)
    }

    pub fn logout(&self) -> Result<()> {
        self.set_current_user(None)
    }

    pub fn current_user(&self) -> Result<Option<Owner>> {
        self.load(StorageKey::CurrentUser)
    }

    fn set_current_user(&self, owner: Option<&Owner>) -> Result<()> {
        match owner {
            Some(owner) => self.save(StorageKey::CurrentUser, owner),
            None => self.kv.remove(StorageKey::CurrentUser.as_str()),
        }
    }

    // Enquiries

    /// Enquiries routed to `owner_id`, oldest first
    pub fn list_enquiries(&self, owner_id: &str) -> Result<Vec<Enquiry>> {
        let all: Vec<Enquiry> = self.load(StorageKey::Enquiries)?;
        Ok(all.into_iter().filter(|e| e.owner_id == owner_id).collect())
    }

    #[instrument(skip(self, enquiry), fields(space_id = %enquiry.space_id))]
    pub fn record_enquiry(&self, enquiry: Enquiry) -> Result<()> {
        assert_enquiry_invariants(&enquiry);

        let mut all: Vec<Enquiry> = self.load(StorageKey::Enquiries)?;
        all.push(enquiry);
        self.save(StorageKey::Enquiries, &all)
    }

    // Spaces

    /// Append a runtime listing, filling an absent view counter with zero
    #[instrument(skip(self, space), fields(space_id = %space.id))]
    pub fn save_space(&self, space: Space) -> Result<()> {
        let mut space = space.with_default_views();
        space.distance = None;
        assert_space_persistable(&space);

        let mut saved: Vec<Space> = self.load(StorageKey::Spaces)?;
        if saved.iter().chain(&self.seed).any(|s| s.id == space.id) {
            return Err(Error::InvalidOperation(format!(
                "Space id {} is already in use",
                space.id
            )));
        }

        saved.push(space);
        self.save(StorageKey::Spaces, &saved)?;

        info!(saved = saved.len(), "Space saved");
        Ok(())
    }

    /// Seed listings followed by runtime listings, each in insertion order
    pub fn list_all_spaces(&self) -> Result<Vec<Space>> {
        let saved: Vec<Space> = self.load(StorageKey::Spaces)?;
        Ok(self
            .seed
            .iter()
            .cloned()
            .chain(saved.into_iter().map(Space::with_default_views))
            .collect())
    }

    /// Listings shown on `owner_id`'s dashboard; see [`ownership`]
    pub fn list_owner_spaces(&self, owner_id: &str) -> Result<Vec<Space>> {
        let session = self.current_user()?;
        let all = self.list_all_spaces()?;
        Ok(ownership::owned_spaces(all, owner_id, session.as_ref()))
    }

    pub fn find_space(&self, id: &str) -> Result<Option<Space>> {
        Ok(self.list_all_spaces()?.into_iter().find(|s| s.id == id))
    }
}
