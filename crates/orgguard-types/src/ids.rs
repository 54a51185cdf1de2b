//! Stable identifiers for policies, their config files, and remediation actions.

// Policies
pub const POLICY_CATALOG: &str = "Catalog";

// Config files (one per policy, looked up at every level)
pub const CONFIG_FILE_CATALOG: &str = "catalog.toml";

// Catalog descriptor
pub const CATALOG_DESCRIPTOR_PATH: &str = "catalog-info.yaml";
pub const DEFAULT_REF: &str = "HEAD";

// Actions
pub const ACTION_LOG: &str = "log";
pub const ACTION_ISSUE: &str = "issue";
pub const ACTION_EMAIL: &str = "email";
pub const ACTION_FIX: &str = "fix";

/// All actions a policy may be configured with. The empty string means "unset".
pub fn all_actions() -> &'static [&'static str] {
    &[ACTION_LOG, ACTION_ISSUE, ACTION_EMAIL, ACTION_FIX]
}
