//! Snapshot persistence
//!
//! The store has no storage of its own: the host (browser localStorage in
//! the product, a file or memory map elsewhere) implements
//! [`SnapshotStorage`] and the core hands it a JSON payload under a fixed
//! key on every mutation it wants durable. On startup the host loads the
//! last payload, or the store starts from defaults.
//!
//! Round-trip guarantee: decoding an encoded snapshot reproduces the
//! profile, the weight-entry order, and the workout set exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::{DailyStats, Theme, UserProfile, WeightEntry, Workout};
use crate::store::FitnessStore;

/// Storage key the host persists the snapshot under
pub const STORAGE_KEY: &str = "neofit-storage";

/// Snapshot schema version, bumped on breaking layout changes
const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of the full store state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub profile: UserProfile,
    /// In stored order (descending by date)
    pub weight_entries: Vec<WeightEntry>,
    pub workouts: Vec<Workout>,
    pub daily_stats: Vec<DailyStats>,
    pub theme: Theme,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        serde_json::from_str(payload).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}

/// Host-side storage seam
///
/// Implemented by the persistence collaborator; the core never assumes
/// anything about the medium beyond load/save of an opaque string.
pub trait SnapshotStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, payload: String);
}

/// In-memory storage, used in tests and as a null host
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, payload: String) {
        self.entries.insert(key.to_string(), payload);
    }
}

impl FitnessStore {
    /// Capture the full state as a serializable snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            profile: self.profile().clone(),
            weight_entries: self.weight_entries().to_vec(),
            workouts: self.workouts().to_vec(),
            daily_stats: self.daily_stats().to_vec(),
            theme: self.theme(),
        }
    }

    /// Rebuild a store from a snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::from_parts(
            snapshot.profile,
            snapshot.weight_entries,
            snapshot.workouts,
            snapshot.daily_stats,
            snapshot.theme,
        )
    }

    /// Load from the host's storage, or start from defaults
    ///
    /// An unreadable payload is an error; an absent one is not.
    pub fn load_from(storage: &dyn SnapshotStorage) -> Result<Self, CoreError> {
        match storage.load(STORAGE_KEY) {
            Some(payload) => {
                let snapshot = Snapshot::from_json(&payload)?;
                debug!(version = snapshot.version, "snapshot loaded");
                Ok(Self::from_snapshot(snapshot))
            }
            None => Ok(Self::new()),
        }
    }

    /// Serialize the full state to the host's storage
    pub fn save_to(&self, storage: &mut dyn SnapshotStorage) -> Result<(), CoreError> {
        storage.save(STORAGE_KEY, self.snapshot().to_json()?);
        Ok(())
    }
}
