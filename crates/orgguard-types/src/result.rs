use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of one policy check against one repository.
///
/// `enabled` says whether the check ran at all. A disabled check always passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyResult<D> {
    pub enabled: bool,
    pub pass: bool,
    /// Remediation text for humans; empty when passing.
    pub notify_text: String,
    /// Policy-specific payload.
    pub details: D,
}

/// Details reported by the catalog policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDetails {
    /// Whether `catalog-info.yaml` was found.
    ///
    /// Reported as `true` when the policy itself is disabled: the lookup is skipped
    /// and the field keeps its non-failing value. Consumers rely on this.
    pub enabled: bool,
}
