// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration file and persisted settings drive profile selection.

use std::fs;

use netaccess_core::{
    CensorshipMode, FileSettings, NetworkAccess, NetworkAccessConfig, SettingsStore, TrustStores,
};

const CONFIG_JSON: &str = r#"{
    "urls": {
        "service": "https://chat.staging.example.org",
        "cdn2": "https://cdn2.staging.example.org"
    },
    "public_params": {
        "zkgroup": "AQIDBA==",
        "generic": "BQYHCA==",
        "backup": "CQoLDA=="
    }
}"#;

fn access_from_file(dir: &std::path::Path) -> NetworkAccess {
    let path = dir.join("network.json");
    fs::write(&path, CONFIG_JSON).unwrap();

    let config = NetworkAccessConfig::load(&path).unwrap();
    NetworkAccess::new(&config, TrustStores::default()).unwrap()
}

#[test]
fn test_config_file_overrides_direct_urls() {
    let dir = tempfile::tempdir().unwrap();
    let access = access_from_file(dir.path());

    let direct = access.uncensored();
    assert_eq!(direct.service_urls()[0].url(), "https://chat.staging.example.org");
    assert_eq!(
        direct.cdn_urls_by_number(2).unwrap()[0].url(),
        "https://cdn2.staging.example.org"
    );
    // Untouched URLs keep production defaults
    assert_eq!(direct.storage_urls()[0].url(), "https://storage.signal.org");
    assert_eq!(direct.public_params().backup(), &[9, 10, 11, 12]);

    let hosts: Vec<&str> = access.known_hostnames().collect();
    assert!(hosts.contains(&"chat.staging.example.org"));
    assert!(!hosts.contains(&"chat.signal.org"));
}

#[test]
fn test_settings_changes_switch_profiles_without_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let access = access_from_file(dir.path());
    let settings = FileSettings::new(dir.path().join("settings.json"));

    // Fresh install: no number yet
    assert!(!access.is_censored_with(&settings).unwrap());

    // Registered in Qatar: censored by default
    settings.set_local_number(Some("+974 3312 3456")).unwrap();
    let qatar = access.configuration(&settings).unwrap();
    assert_eq!(qatar.service_urls()[0].url(), "https://www.google.com.qa/service");

    // User turns circumvention off
    settings.set_censorship_mode(CensorshipMode::Disabled).unwrap();
    assert_eq!(access.configuration(&settings).unwrap(), access.uncensored());

    // Moves to Germany and forces circumvention on
    settings.set_local_number(Some("+49 30 1234567")).unwrap();
    settings.set_censorship_mode(CensorshipMode::Enabled).unwrap();
    let forced = access.configuration(&settings).unwrap();
    assert_eq!(forced, access.routing_table().default_fronted());
}

#[test]
fn test_invalid_stored_number_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let access = access_from_file(dir.path());
    let settings = FileSettings::new(dir.path().join("settings.json"));

    settings.set_local_number(Some("0301234567")).unwrap();

    assert!(access.configuration(&settings).is_err());
    assert!(access.is_censored_with(&settings).is_err());
}
