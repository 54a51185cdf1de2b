use crate::ports::{EnablementOracle, GraphqlClient, GraphqlRequest};
use async_trait::async_trait;
use orgguard_settings::{ConfigSource, MemoryConfigSource};
use orgguard_types::{ConfigLevel, OrgOptConfig, RepoOptConfig, ids};
use serde_json::{Value as JsonValue, json};
use std::sync::Mutex;

pub const OWNER: &str = "acme";
pub const REPO: &str = "thisrepo";

/// Layer documents for `OWNER/REPO`; `None` leaves a level unconfigured.
pub fn catalog_source(
    org: Option<&str>,
    org_repo: Option<&str>,
    repo: Option<&str>,
) -> MemoryConfigSource {
    let path = ids::CONFIG_FILE_CATALOG;
    let mut source = MemoryConfigSource::new();
    if let Some(text) = org {
        source = source.with_org(OWNER, path, text);
    }
    if let Some(text) = org_repo {
        source = source.with_org_repo(OWNER, REPO, path, text);
    }
    if let Some(text) = repo {
        source = source.with_repo(OWNER, REPO, path, text);
    }
    source
}

/// A config source that fails at one level and serves empty layers elsewhere.
pub struct FailingSource {
    pub level: ConfigLevel,
    pub message: &'static str,
}

#[async_trait]
impl ConfigSource for FailingSource {
    async fn fetch(
        &self,
        _owner: &str,
        _repo: &str,
        _path: &str,
        level: ConfigLevel,
    ) -> anyhow::Result<Option<String>> {
        if level == self.level {
            anyhow::bail!(self.message);
        }
        Ok(None)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnablementCall {
    pub org: OrgOptConfig,
    pub org_repo: RepoOptConfig,
    pub repo: RepoOptConfig,
    pub owner: String,
    pub name: String,
}

/// Answers every enablement question the same way and records the questions.
pub struct FixedEnablement {
    answer: Result<bool, &'static str>,
    calls: Mutex<Vec<EnablementCall>>,
}

impl FixedEnablement {
    pub fn enabled() -> Self {
        Self::answering(Ok(true))
    }

    pub fn disabled() -> Self {
        Self::answering(Ok(false))
    }

    pub fn failing(message: &'static str) -> Self {
        Self::answering(Err(message))
    }

    fn answering(answer: Result<bool, &'static str>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<EnablementCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnablementOracle for FixedEnablement {
    async fn is_enabled(
        &self,
        org: &OrgOptConfig,
        org_repo: &RepoOptConfig,
        repo: &RepoOptConfig,
        owner: &str,
        name: &str,
    ) -> anyhow::Result<bool> {
        self.calls.lock().unwrap().push(EnablementCall {
            org: org.clone(),
            org_repo: org_repo.clone(),
            repo: repo.clone(),
            owner: owner.to_string(),
            name: name.to_string(),
        });
        self.answer.map_err(|message| anyhow::anyhow!(message))
    }
}

/// Returns one canned GraphQL response and records every request.
pub struct BlobClient {
    response: Result<JsonValue, &'static str>,
    requests: Mutex<Vec<GraphqlRequest>>,
}

impl BlobClient {
    pub fn with_text(text: &str) -> Self {
        Self::with_data(json!({ "repository": { "object": { "text": text } } }))
    }

    pub fn missing() -> Self {
        Self::with_data(json!({ "repository": { "object": null } }))
    }

    pub fn with_data(data: JsonValue) -> Self {
        Self {
            response: Ok(data),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            response: Err(message),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlClient for BlobClient {
    async fn query(&self, request: &GraphqlRequest) -> anyhow::Result<JsonValue> {
        self.requests.lock().unwrap().push(request.clone());
        self.response
            .clone()
            .map_err(|message| anyhow::anyhow!(message))
    }
}
