use orgguard_types::{OrgOptConfig, RepoOptConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Org-level `catalog.toml`.
///
/// Permissive on input: unknown keys are ignored and missing keys default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OrgConfig {
    pub opt_config: OrgOptConfig,

    /// Remediation action: `log`, `issue`, `email` or `fix`. Empty means unset.
    pub action: String,
}

/// Org-repo or repo-level `catalog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RepoConfig {
    pub opt_config: RepoOptConfig,

    /// `None` leaves the action to broader levels. `Some("")` clears it.
    pub action: Option<String>,
}
