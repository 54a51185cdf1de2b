//! Pure policy evaluation (no IO).
//!
//! Input: resolved configuration layers plus the answers of external lookups.
//! Output: a policy result with remediation text.

#![forbid(unsafe_code)]

pub mod catalog;

pub use catalog::{CatalogLookup, NOTIFY_TEXT, evaluate_catalog, notify_text};
