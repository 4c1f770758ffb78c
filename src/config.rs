//! Site Configuration
//!
//! Tunables read from an optional `window.PORTFOLIO_CONFIG` object. Every
//! field has a default, so a partial object only overrides what it names.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global JS property consulted at startup
const CONFIG_GLOBAL: &str = "PORTFOLIO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed PORTFOLIO_CONFIG: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub log_level: String,
    pub typing: TypingConfig,
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub delay_between_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    pub scroll_debounce_ms: u32,
    pub hide_threshold_px: f64,
    pub active_lookahead_px: f64,
    /// Used when the navbar height cannot be measured
    pub header_offset_px: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub root_margin: String,
    pub threshold: f64,
    pub skill_fill_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub notice_duration_ms: u32,
    pub simulated_latency_ms: u32,
    /// Make the simulated submitter reject every message.
    pub simulate_failure: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "portfolio-theme".to_string(),
            log_level: "info".to_string(),
            typing: TypingConfig::default(),
            navigation: NavigationConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_speed_ms: 100,
            delete_speed_ms: 50,
            delay_between_ms: 2000,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_debounce_ms: 10,
            hide_threshold_px: 100.0,
            active_lookahead_px: 100.0,
            header_offset_px: 70.0,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "-10% 0px -10% 0px".to_string(),
            threshold: 0.1,
            skill_fill_delay_ms: 300,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 5000,
            simulated_latency_ms: 1500,
            simulate_failure: false,
        }
    }
}

fn default_phrases() -> Vec<String> {
    ["Full Stack Developer", "Rust Enthusiast", "Problem Solver", "Open Source Contributor"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl SiteConfig {
    /// Read `window.PORTFOLIO_CONFIG`, falling back to defaults.
    ///
    /// Runs before the logger exists, so a decode failure is handed back for
    /// the caller to report once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let Some(win) = web_sys::window() else {
            return (Self::default(), None);
        };
        let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return (Self::default(), None);
        }
        Self::or_defaults(Self::from_js(raw))
    }

    /// Keep a decoded config, or swap a failed decode for the defaults.
    pub fn or_defaults(decoded: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match decoded {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        serde_wasm_bindgen::from_value::<Self>(value)
            .map(Self::normalized)
            .map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Repair values the controllers cannot run with.
    pub fn normalized(mut self) -> Self {
        self.typing.phrases.retain(|p| !p.is_empty());
        if self.typing.phrases.is_empty() {
            self.typing.phrases = default_phrases();
        }
        if self.theme_storage_key.trim().is_empty() {
            self.theme_storage_key = Self::default().theme_storage_key;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme_storage_key, "portfolio-theme");
        assert_eq!(config.navigation.scroll_debounce_ms, 10);
        assert_eq!(config.reveal.skill_fill_delay_ms, 300);
        assert_eq!(config.contact.notice_duration_ms, 5000);
        assert!(!config.contact.simulate_failure);
    }

    #[test]
    fn test_partial_override() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "logLevel": "debug", "typing": { "typeSpeedMs": 60, "phrases": ["Hi"] }, "contact": { "simulateFailure": true } }"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.typing.type_speed_ms, 60);
        assert_eq!(config.typing.delete_speed_ms, 50);
        assert_eq!(config.typing.phrases, vec!["Hi".to_string()]);
        assert!(config.contact.simulate_failure);
        assert_eq!(config.contact.simulated_latency_ms, 1500);
    }

    #[test]
    fn test_normalized_restores_phrases() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "typing": { "phrases": ["", ""] }, "themeStorageKey": " " }"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.typing.phrases, default_phrases());
        assert_eq!(config.theme_storage_key, "portfolio-theme");
    }

    #[test]
    fn test_malformed_config_falls_back_and_reports() {
        let failed = Err(ConfigError::Malformed("invalid type: string, expected a map".to_string()));
        let (config, err) = SiteConfig::or_defaults(failed);
        assert_eq!(config, SiteConfig::default());
        let err = err.expect("decode error is handed back");
        assert_eq!(
            err.to_string(),
            "malformed PORTFOLIO_CONFIG: invalid type: string, expected a map"
        );

        let custom = SiteConfig {
            log_level: "debug".to_string(),
            ..SiteConfig::default()
        };
        let (config, err) = SiteConfig::or_defaults(Ok(custom.clone()));
        assert_eq!(config, custom);
        assert!(err.is_none());
    }
}
