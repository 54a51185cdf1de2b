use crate::model::{OrgConfig, RepoConfig};
use crate::resolve::{MergedConfig, merge_config};
use anyhow::Context;
use async_trait::async_trait;
use orgguard_types::ConfigLevel;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Where layer documents come from (a config repository, an API, a cache).
///
/// `fetch` returns the raw document for `level`, or `None` when that level has no
/// configuration. For [`ConfigLevel::Org`] the `repo` argument is informational.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        level: ConfigLevel,
    ) -> anyhow::Result<Option<String>>;
}

/// Fetch and decode one layer. A missing document yields `T::default()`.
///
/// Source errors are returned as-is; decode errors name the level and path.
pub async fn fetch_config<T, S>(
    source: &S,
    owner: &str,
    repo: &str,
    path: &str,
    level: ConfigLevel,
) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
    S: ConfigSource + ?Sized,
{
    let Some(text) = source.fetch(owner, repo, path, level).await? else {
        return Ok(T::default());
    };
    crate::parse_layer_toml(&text)
        .with_context(|| format!("decode {level} config {path} for {owner}/{repo}"))
}

/// The three layers of one policy's configuration for one repository.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigLayers {
    pub org: OrgConfig,
    pub org_repo: RepoConfig,
    pub repo: RepoConfig,
}

impl ConfigLayers {
    /// Fetch all layers, broadest first. The first failure aborts the load.
    pub async fn load<S>(source: &S, owner: &str, repo: &str, path: &str) -> anyhow::Result<Self>
    where
        S: ConfigSource + ?Sized,
    {
        let org: OrgConfig = fetch_config(source, owner, repo, path, ConfigLevel::Org).await?;
        let org_repo: RepoConfig =
            fetch_config(source, owner, repo, path, ConfigLevel::OrgRepo).await?;
        let repo_layer: RepoConfig =
            fetch_config(source, owner, repo, path, ConfigLevel::Repo).await?;
        Ok(Self {
            org,
            org_repo,
            repo: repo_layer,
        })
    }

    pub fn merge(&self) -> MergedConfig {
        merge_config(&self.org, &self.org_repo, &self.repo)
    }
}

/// Serves documents registered up front. Useful when the documents are already in hand.
#[derive(Clone, Debug, Default)]
pub struct MemoryConfigSource {
    documents: BTreeMap<(ConfigLevel, String, String), String>,
}

impl MemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        level: ConfigLevel,
        owner: &str,
        repo: &str,
        path: &str,
        text: impl Into<String>,
    ) {
        self.documents
            .insert(Self::key(level, owner, repo, path), text.into());
    }

    pub fn with_org(mut self, owner: &str, path: &str, text: impl Into<String>) -> Self {
        self.insert(ConfigLevel::Org, owner, "", path, text);
        self
    }

    pub fn with_org_repo(
        mut self,
        owner: &str,
        repo: &str,
        path: &str,
        text: impl Into<String>,
    ) -> Self {
        self.insert(ConfigLevel::OrgRepo, owner, repo, path, text);
        self
    }

    pub fn with_repo(
        mut self,
        owner: &str,
        repo: &str,
        path: &str,
        text: impl Into<String>,
    ) -> Self {
        self.insert(ConfigLevel::Repo, owner, repo, path, text);
        self
    }

    fn key(
        level: ConfigLevel,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> (ConfigLevel, String, String) {
        let scope = match level {
            ConfigLevel::Org => owner.to_string(),
            ConfigLevel::OrgRepo | ConfigLevel::Repo => format!("{owner}/{repo}"),
        };
        (level, scope, path.to_string())
    }
}

#[async_trait]
impl ConfigSource for MemoryConfigSource {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        level: ConfigLevel,
    ) -> anyhow::Result<Option<String>> {
        Ok(self
            .documents
            .get(&Self::key(level, owner, repo, path))
            .cloned())
    }
}
