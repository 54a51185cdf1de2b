use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Organization-level opt-in/opt-out settings shared by every policy.
///
/// Only `disable_repo_override` is read by configuration merging. The rest is
/// forwarded verbatim to the enablement decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OrgOptConfig {
    /// Policy is active for every repository unless opted out.
    pub opt_out_strategy: bool,

    /// Repositories opted in when `opt_out_strategy` is false.
    pub opt_in_repos: Vec<String>,

    /// Repositories opted out when `opt_out_strategy` is true.
    pub opt_out_repos: Vec<String>,

    pub opt_out_private_repos: bool,
    pub opt_out_public_repos: bool,
    pub opt_out_archived_repos: bool,

    /// Ignore every repository-level override, including the repo's own opt settings.
    pub disable_repo_override: bool,
}

/// Per-repository opt settings. Appears at both the org-repo and the repo level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RepoOptConfig {
    pub opt_in: bool,
    pub opt_out: bool,
}
