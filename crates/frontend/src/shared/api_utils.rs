//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs from the loaded
//! [`AppConfig`](super::config::AppConfig).

use super::config::{load_config, AppConfig};
use once_cell::sync::Lazy;

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

fn base_for(config: &AppConfig, protocol: &str, hostname: &str, origin: &str) -> String {
    match config.api_port {
        Some(port) => format!("{}//{}:{}{}", protocol, hostname, port, config.api_prefix),
        None => format!("{}{}", origin, config.api_prefix),
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Just the configured prefix if window is not available
pub fn api_base() -> String {
    let config = app_config();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.api_prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let origin = location.origin().unwrap_or_default();
    base_for(config, &protocol, &hostname, &origin)
}

/// Build a full API URL from a path relative to the prefix
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&format!("/guests/{}", id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode one path segment (ids taken from the URL bar).
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_base_uses_configured_port() {
        let config = default_config();
        assert_eq!(
            base_for(&config, "https:", "recepcion.local", "https://recepcion.local"),
            "https://recepcion.local:3000/api"
        );
    }

    #[test]
    fn test_base_without_port_uses_origin() {
        let config = AppConfig {
            api_port: None,
            ..default_config()
        };
        assert_eq!(
            base_for(&config, "https:", "pms.example", "https://pms.example"),
            "https://pms.example/api"
        );
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}
