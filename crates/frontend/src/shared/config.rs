//! Frontend configuration
//!
//! Defaults are embedded in the bundle. A JSON object stored under
//! [`CONFIG_STORAGE_KEY`] in localStorage overrides individual keys, which is
//! how a front-desk workstation points at a different backend.

use serde::Deserialize;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "pms-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "api_port": 3000,
    "api_prefix": "/api",
    "success_modal_ms": 2500,
    "log_level": "debug"
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Backend port on the page's host. `None` uses the page origin.
    pub api_port: Option<u16>,
    pub api_prefix: String,
    /// Auto-close delay of the "saved" modal.
    pub success_modal_ms: u32,
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Merge `overrides` onto the embedded defaults.
fn merge(overrides: Option<&str>) -> Result<AppConfig, serde_json::Error> {
    let mut base: serde_json::Value = serde_json::from_str(DEFAULT_CONFIG)?;
    if let Some(raw) = overrides {
        let patch: serde_json::Value = serde_json::from_str(raw)?;
        if let (Some(base), Some(patch)) = (base.as_object_mut(), patch.as_object()) {
            for (k, v) in patch {
                base.insert(k.clone(), v.clone());
            }
        }
    }
    serde_json::from_value(base)
}

fn stored_overrides() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Load configuration.
///
/// Search order:
/// 1. localStorage overrides merged onto the defaults
/// 2. Falls back to the embedded defaults alone
pub fn load_config() -> AppConfig {
    let overrides = stored_overrides();
    match merge(overrides.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid {} override: {}", CONFIG_STORAGE_KEY, e);
            default_config()
        }
    }
}

pub fn default_config() -> AppConfig {
    // DEFAULT_CONFIG is a literal checked by the tests below
    merge(None).unwrap_or(AppConfig {
        api_port: Some(3000),
        api_prefix: "/api".to_string(),
        success_modal_ms: 2500,
        log_level: "debug".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = merge(None).unwrap();
        assert_eq!(config.api_port, Some(3000));
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_overrides_replace_single_keys() {
        let config = merge(Some(r#"{ "api_port": null, "success_modal_ms": 800 }"#)).unwrap();
        assert_eq!(config.api_port, None);
        assert_eq!(config.success_modal_ms, 800);
        assert_eq!(config.api_prefix, "/api");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(merge(Some("not json")).is_err());
        assert!(merge(Some(r#"{ "api_port": "x" }"#)).is_err());
    }
}
