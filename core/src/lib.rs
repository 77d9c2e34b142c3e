//! NeoFit Core Library
//!
//! This crate contains the computation core of the NeoFit fitness tracker:
//! the profile/history store, derived health metrics, the parametric
//! body-scale mapper for the 3D avatar, and reporting helpers. The UI,
//! renderer, and storage host consume it through plain values.

pub mod body_scale;
pub mod errors;
pub mod export;
pub mod health_metrics;
pub mod models;
pub mod persistence;
pub mod reports;
pub mod store;
pub mod validation;

// Re-export commonly used items
pub use body_scale::*;
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use reports::*;
pub use store::FitnessStore;

// Export persistence items (snapshot codec and storage seam)
pub use persistence::{MemoryStorage, Snapshot, SnapshotStorage, STORAGE_KEY};
