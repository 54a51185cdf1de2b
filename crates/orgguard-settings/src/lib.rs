//! Layered configuration for orgguard policies.
//!
//! Three layers feed every policy: org-wide, org-authored per-repo, and repo-authored.
//! This crate decodes them, fetches them through a [`ConfigSource`], and merges them
//! into the effective configuration. It performs no IO of its own.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod source;

#[cfg(test)]
mod proptest;

pub use model::{OrgConfig, RepoConfig};
pub use resolve::{MergedConfig, merge_config};
pub use source::{ConfigLayers, ConfigSource, MemoryConfigSource, fetch_config};

use serde::de::DeserializeOwned;

/// Decode one layer document. Blank documents decode to the default value.
pub fn parse_layer_toml<T>(input: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
{
    if input.trim().is_empty() {
        return Ok(T::default());
    }
    let cfg: T = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse an org-level `catalog.toml`.
pub fn parse_org_config_toml(input: &str) -> anyhow::Result<OrgConfig> {
    parse_layer_toml(input)
}

/// Parse an org-repo or repo-level `catalog.toml`.
pub fn parse_repo_config_toml(input: &str) -> anyhow::Result<RepoConfig> {
    parse_layer_toml(input)
}
