use async_trait::async_trait;
use orgguard_types::{OrgOptConfig, RepoOptConfig};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Decides whether a policy is active for one repository.
///
/// Owns the opt-in/opt-out semantics, including how `disable_repo_override` limits the
/// repo's own opt settings. Policies never second-guess the answer.
#[async_trait]
pub trait EnablementOracle: Send + Sync {
    async fn is_enabled(
        &self,
        org: &OrgOptConfig,
        org_repo: &RepoOptConfig,
        repo: &RepoOptConfig,
        owner: &str,
        name: &str,
    ) -> anyhow::Result<bool>;
}

/// A GraphQL request body: query document plus variables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: JsonValue,
}

/// Executes GraphQL queries against the forge.
///
/// Returns the response's `data` payload. GraphQL-level `errors` must be reported as `Err`.
#[async_trait]
pub trait GraphqlClient: Send + Sync {
    async fn query(&self, request: &GraphqlRequest) -> anyhow::Result<JsonValue>;
}
