use orgguard_settings::{ConfigLayers, OrgConfig, RepoConfig};
use orgguard_types::{CatalogDetails, PolicyResult};
use serde::Serialize;

/// Remediation template for a missing catalog descriptor.
pub const NOTIFY_TEXT: &str = "catalog-info.yaml file not found.
A catalog-info.yaml file can give users information about which team is responsible for the maintenance of the repository.

To fix this, add a catalog-info.yaml file to your repository, following the official documentation.";

/// What is known about the catalog descriptor when the verdict is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogLookup {
    /// The policy is not enabled for this repository; nothing was looked up.
    Skipped,
    Found,
    Missing,
}

impl CatalogLookup {
    /// Any non-empty blob text counts as present.
    pub fn from_blob_text(text: &str) -> Self {
        if text.is_empty() {
            CatalogLookup::Missing
        } else {
            CatalogLookup::Found
        }
    }
}

pub fn evaluate_catalog(
    lookup: CatalogLookup,
    layers: &ConfigLayers,
) -> PolicyResult<CatalogDetails> {
    match lookup {
        CatalogLookup::Skipped => PolicyResult {
            enabled: false,
            pass: true,
            notify_text: String::new(),
            details: CatalogDetails { enabled: true },
        },
        CatalogLookup::Found => PolicyResult {
            enabled: true,
            pass: true,
            notify_text: String::new(),
            details: CatalogDetails { enabled: true },
        },
        CatalogLookup::Missing => PolicyResult {
            enabled: true,
            pass: false,
            notify_text: notify_text(&layers.org, &layers.repo),
            details: CatalogDetails { enabled: false },
        },
    }
}

#[derive(Serialize)]
struct ConfigDump<'a> {
    org: &'a OrgConfig,
    repo: &'a RepoConfig,
}

/// Remediation template followed by a one-line JSON dump of the org and repo layers.
pub fn notify_text(org: &OrgConfig, repo: &RepoConfig) -> String {
    let dump = serde_json::to_string(&ConfigDump { org, repo }).unwrap_or_default();
    format!("{NOTIFY_TEXT}\n\n{dump}")
}
