use crate::model::{OrgConfig, RepoConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Effective configuration after precedence merging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MergedConfig {
    pub action: String,
}

/// Merge the three layers: repo beats org-repo beats org.
///
/// When the org sets `disable_repo_override`, the repo layer is ignored entirely and the
/// org-repo value (or the org value, if that is unset too) is final.
pub fn merge_config(org: &OrgConfig, org_repo: &RepoConfig, repo: &RepoConfig) -> MergedConfig {
    let mut action = org.action.clone();

    if let Some(a) = &org_repo.action {
        action = a.clone();
    }

    if !org.opt_config.disable_repo_override
        && let Some(a) = &repo.action
    {
        action = a.clone();
    }

    MergedConfig { action }
}
