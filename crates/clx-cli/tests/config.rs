use clx_cli::config::{
    ClxConfig, CURRENT_VERSION, LogFormat, default_pillar_fallbacks, load_config, migrate,
    save_config,
};
use serde_json::json;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(loaded.config, ClxConfig::default());
    assert_eq!(loaded.migrated_from, None);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = ClxConfig::default();
    config.log_format = LogFormat::Json;
    config.pillar_fallbacks.governance = 55.0;
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config, config);
    assert_eq!(loaded.migrated_from, None);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn v0_config_gains_pillar_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "log_format": "json" }"#).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.migrated_from, Some(0));
    let config = loaded.config;
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.pillar_fallbacks, default_pillar_fallbacks());
}

#[test]
fn migration_keeps_existing_fallbacks() {
    let custom = json!({
        "qualitative": 1.0,
        "quantitative": 2.0,
        "cost_benefit": 3.0,
        "governance": 4.0,
        "architecture": 5.0
    });
    let migrated = migrate(json!({ "pillar_fallbacks": custom.clone() }), 0).unwrap();
    assert_eq!(migrated["pillar_fallbacks"], custom);
    assert_eq!(migrated["config_version"], 1);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({ "config_version": 99 }), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn version_beyond_u32_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
