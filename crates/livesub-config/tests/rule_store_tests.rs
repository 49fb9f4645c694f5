//! Rule store tests against the file-backed settings store.

use livesub_config::{sanitize_flags, Configuration, Rule, RuleStore, RECOGNIZED_FLAGS};
use livesub_store::FileSettingsStore;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_first_run_has_seed_rule() {
    let temp_dir = TempDir::new().unwrap();
    let store = RuleStore::load(FileSettingsStore::new(temp_dir.path().join("data.json"))).await;

    assert_eq!(store.config().rules, vec![Rule::windchill()]);
    assert!(store.config().live_update_enabled);
}

#[tokio::test]
async fn test_persist_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");

    let mut store = RuleStore::load(FileSettingsStore::new(&path)).await;
    store.add_rule(Rule::new("arrow", "->", "→"));
    store.set_advanced_toggle(true);
    store.save().await.unwrap();

    let reloaded = RuleStore::load(FileSettingsStore::new(&path)).await;
    assert_eq!(reloaded.config(), store.config());
}

#[tokio::test]
async fn test_legacy_data_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    // Written by an early version that only knew two toggles
    fs::write(
        &path,
        r#"{"enableLiveUpdate": false, "excludeCodeAndYaml": true}"#,
    )
    .unwrap();

    let store = RuleStore::load(FileSettingsStore::new(&path)).await;

    assert!(!store.config().live_update_enabled);
    assert_eq!(store.config().flag_characters, "g");
    assert!(store.config().force_global_flag);
    assert_eq!(store.config().rules, vec![Rule::windchill()]);
}

#[tokio::test]
async fn test_empty_rule_list_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, r#"{"regex_patterns": []}"#).unwrap();

    let store = RuleStore::load(FileSettingsStore::new(&path)).await;

    assert!(store.config().rules.is_empty());
}

#[tokio::test]
async fn test_truncated_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, r#"{"enableLiveUpdate": fal"#).unwrap();

    let store = RuleStore::load(FileSettingsStore::new(&path)).await;

    assert_eq!(store.config(), &Configuration::default());
}

proptest! {
    #[test]
    fn sanitized_flags_only_contain_recognized_letters(raw in ".{0,32}") {
        let clean = sanitize_flags(&raw);
        prop_assert!(clean.chars().all(|c| RECOGNIZED_FLAGS.contains(c)));
    }

    #[test]
    fn sanitize_is_idempotent(raw in ".{0,32}") {
        let once = sanitize_flags(&raw);
        prop_assert_eq!(sanitize_flags(&once), once.clone());
    }
}
