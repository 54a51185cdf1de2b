use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration precedence tier, broadest first.
///
/// - `Org`: organization-wide settings.
/// - `OrgRepo`: organization-authored override for one repository.
/// - `Repo`: override authored inside the target repository itself.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfigLevel {
    Org,
    OrgRepo,
    Repo,
}

impl ConfigLevel {
    pub const ALL: [ConfigLevel; 3] = [ConfigLevel::Org, ConfigLevel::OrgRepo, ConfigLevel::Repo];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigLevel::Org => "org",
            ConfigLevel::OrgRepo => "org_repo",
            ConfigLevel::Repo => "repo",
        }
    }
}

impl fmt::Display for ConfigLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
