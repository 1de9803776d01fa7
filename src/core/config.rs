//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.misbaha/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::tracker::DEFAULT_SESSION_COOLDOWN_MS;
use crate::providers::aladhan::{DEFAULT_ALADHAN_BASE_URL, DEFAULT_QURAN_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MisbahaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub show_daily_content: Option<bool>,
    pub show_hijri_date: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrackerConfig {
    pub session_cooldown_ms: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedbackConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    pub provider: Option<String>,
    pub aladhan_base_url: Option<String>,
    pub quran_base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub session_cooldown_ms: i64,
    pub audio_enabled: bool,
    pub show_daily_content: bool,
    pub show_hijri_date: bool,
    pub content_provider: String,
    pub aladhan_base_url: String,
    pub quran_base_url: String,
}

/// CLI flags that participate in resolution (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub content_provider: Option<String>,
    pub muted: bool,
    pub no_content: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.misbaha/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".misbaha").join("config.toml"))
}

/// Load config from `~/.misbaha/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MisbahaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MisbahaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MisbahaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MisbahaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MisbahaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Misbaha Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# show_daily_content = true
# show_hijri_date = true

# [tracker]
# session_cooldown_ms = 1000         # Duplicate-session suppression window

# [feedback]
# enabled = true                     # Click / completion tones

# [content]
# provider = "mock"                  # "mock" or "aladhan"
# aladhan_base_url = "https://api.aladhan.com"
# quran_base_url = "https://api.alquran.cloud"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MisbahaConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Content provider: CLI → env → config → default
    let content_provider = cli
        .content_provider
        .clone()
        .or_else(|| std::env::var("MISBAHA_CONTENT_PROVIDER").ok())
        .or_else(|| config.content.provider.clone())
        .unwrap_or_else(|| "mock".to_string());

    // Base URLs: env → config → default
    let aladhan_base_url = std::env::var("ALADHAN_BASE_URL")
        .ok()
        .or_else(|| config.content.aladhan_base_url.clone())
        .unwrap_or_else(|| DEFAULT_ALADHAN_BASE_URL.to_string());
    let quran_base_url = std::env::var("QURAN_BASE_URL")
        .ok()
        .or_else(|| config.content.quran_base_url.clone())
        .unwrap_or_else(|| DEFAULT_QURAN_BASE_URL.to_string());

    // --muted always wins over the config file
    let audio_enabled = !cli.muted && config.feedback.enabled.unwrap_or(true);

    // --no-content suppresses both auxiliary panels for this run
    let show_daily_content = !cli.no_content && config.general.show_daily_content.unwrap_or(true);
    let show_hijri_date = !cli.no_content && config.general.show_hijri_date.unwrap_or(true);

    ResolvedConfig {
        session_cooldown_ms: config
            .tracker
            .session_cooldown_ms
            .unwrap_or(DEFAULT_SESSION_COOLDOWN_MS)
            .max(0),
        audio_enabled,
        show_daily_content,
        show_hijri_date,
        content_provider,
        aladhan_base_url,
        quran_base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MisbahaConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.session_cooldown_ms, DEFAULT_SESSION_COOLDOWN_MS);
        assert!(resolved.audio_enabled);
        assert!(resolved.show_daily_content);
        assert!(resolved.show_hijri_date);
        assert_eq!(resolved.content_provider, "mock");
        assert_eq!(resolved.aladhan_base_url, DEFAULT_ALADHAN_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MisbahaConfig {
            tracker: TrackerConfig {
                session_cooldown_ms: Some(250),
            },
            feedback: FeedbackConfig {
                enabled: Some(false),
            },
            content: ContentConfig {
                provider: Some("aladhan".to_string()),
                aladhan_base_url: Some("http://localhost:9000".to_string()),
                quran_base_url: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.session_cooldown_ms, 250);
        assert!(!resolved.audio_enabled);
        assert_eq!(resolved.content_provider, "aladhan");
        assert_eq!(resolved.aladhan_base_url, "http://localhost:9000");
        assert_eq!(resolved.quran_base_url, DEFAULT_QURAN_BASE_URL);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = MisbahaConfig {
            feedback: FeedbackConfig {
                enabled: Some(true),
            },
            content: ContentConfig {
                provider: Some("aladhan".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            content_provider: Some("mock".to_string()),
            muted: true,
            no_content: true,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.content_provider, "mock");
        assert!(!resolved.audio_enabled);
        assert!(!resolved.show_daily_content);
        assert!(!resolved.show_hijri_date);
    }

    #[test]
    fn test_negative_cooldown_clamps_to_zero() {
        let config = MisbahaConfig {
            tracker: TrackerConfig {
                session_cooldown_ms: Some(-100),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.session_cooldown_ms, 0);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[tracker]
session_cooldown_ms = 2000
"#;
        let config: MisbahaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tracker.session_cooldown_ms, Some(2000));
        assert!(config.feedback.enabled.is_none());
        assert!(config.content.provider.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
show_daily_content = false
show_hijri_date = true

[tracker]
session_cooldown_ms = 500

[feedback]
enabled = false

[content]
provider = "aladhan"
aladhan_base_url = "http://127.0.0.1:8080"
"#;
        let config: MisbahaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.show_daily_content, Some(false));
        assert_eq!(config.tracker.session_cooldown_ms, Some(500));
        assert_eq!(config.content.provider.as_deref(), Some("aladhan"));
    }
}
