use std::path::{Path, PathBuf};

use clx_core::models::scorecard::PillarScores;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClxConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Baselines used for pillars the caller did not score. Added in v1.
    pub pillar_fallbacks: PillarScores,
}

impl Default for ClxConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_format: LogFormat::default(),
            pillar_fallbacks: default_pillar_fallbacks(),
        }
    }
}

pub fn default_pillar_fallbacks() -> PillarScores {
    PillarScores {
        qualitative: 70.0,
        quantitative: 65.0,
        cost_benefit: 75.0,
        governance: 80.0,
        architecture: 85.0,
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.cyberlockx.clx").join("config.json"))
}

/// A config as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ClxConfig,
    /// The on-disk version, when migrations had to run. Reported by the
    /// caller once logging is set up.
    pub migrated_from: Option<u32>,
}

/// Load the config at `path`, or defaults when no file exists yet.
pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: ClxConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(raw_version).map_err(|_| {
        eyre::eyre!(
            "config_version {raw_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update clx."
        )
    })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: ClxConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update clx."
        ));
    }

    // v0 → v1: add pillar_fallbacks
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("pillar_fallbacks")
            .or_insert(serde_json::to_value(default_pillar_fallbacks())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ClxConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
