//! Fuzz target for layer config decoding.
//!
//! Goal: decoding should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(org) = orgguard_settings::parse_org_config_toml(text) {
            // Whatever decodes must merge.
            let _ = orgguard_settings::merge_config(
                &org,
                &orgguard_settings::RepoConfig::default(),
                &orgguard_settings::RepoConfig::default(),
            );
        }
        let _ = orgguard_settings::parse_repo_config_toml(text);
    }
});
