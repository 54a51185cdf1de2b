//! Property-based tests for layer merging.
//!
//! These tests use proptest to verify:
//! - strict precedence when repo overrides are allowed
//! - repo overrides never leak through when the org disables them
//! - merging is a pure function of its inputs

use crate::model::{OrgConfig, RepoConfig};
use crate::resolve::merge_config;
use orgguard_types::{OrgOptConfig, RepoOptConfig, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Known actions plus the empty string and the occasional unknown value.
fn arb_action() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(ids::all_actions()).prop_map(str::to_string),
        Just(String::new()),
        prop::string::string_regex("[a-z]{1,8}").unwrap(),
    ]
}

fn arb_org(disable_repo_override: impl Strategy<Value = bool>) -> impl Strategy<Value = OrgConfig> {
    (arb_action(), any::<bool>(), disable_repo_override).prop_map(
        |(action, opt_out_strategy, disable_repo_override)| OrgConfig {
            opt_config: OrgOptConfig {
                opt_out_strategy,
                disable_repo_override,
                ..OrgOptConfig::default()
            },
            action,
        },
    )
}

fn arb_repo() -> impl Strategy<Value = RepoConfig> {
    (prop::option::of(arb_action()), any::<bool>(), any::<bool>()).prop_map(
        |(action, opt_in, opt_out)| RepoConfig {
            opt_config: RepoOptConfig { opt_in, opt_out },
            action,
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn narrowest_set_level_wins(org in arb_org(Just(false)), org_repo in arb_repo(), repo in arb_repo()) {
        let merged = merge_config(&org, &org_repo, &repo);
        let expected = repo
            .action
            .clone()
            .or(org_repo.action.clone())
            .unwrap_or(org.action.clone());
        prop_assert_eq!(merged.action, expected);
    }

    #[test]
    fn disabled_repo_override_ignores_repo_layer(
        org in arb_org(Just(true)),
        org_repo in arb_repo(),
        repo in arb_repo(),
    ) {
        let merged = merge_config(&org, &org_repo, &repo);
        let expected = org_repo.action.clone().unwrap_or(org.action.clone());
        prop_assert_eq!(&merged.action, &expected);

        // The repo layer has no influence at all.
        let without_repo = merge_config(&org, &org_repo, &RepoConfig::default());
        prop_assert_eq!(merged, without_repo);
    }

    #[test]
    fn merge_is_deterministic(org in arb_org(any::<bool>()), org_repo in arb_repo(), repo in arb_repo()) {
        let first = merge_config(&org, &org_repo, &repo);
        let second = merge_config(&org, &org_repo, &repo);
        prop_assert_eq!(first, second);
    }
}
