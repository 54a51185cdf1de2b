//! Stable DTOs and IDs used across the orgguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted policy result
//! - opt-in/opt-out configuration shared by every policy
//! - configuration precedence levels
//! - stable string IDs (policy names, file names, actions)

#![forbid(unsafe_code)]

pub mod ids;
pub mod level;
pub mod opt;
pub mod result;

pub use level::ConfigLevel;
pub use opt::{OrgOptConfig, RepoOptConfig};
pub use result::{CatalogDetails, PolicyResult};
