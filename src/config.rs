use serde::Deserialize;
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Name of the optional global object the hosting page can use to override defaults.
pub const CONFIG_GLOBAL: &str = "__TALWAR_CONFIG__";

/// Runtime settings for the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand_name: String,
    /// Local-storage key holding the theme preference
    pub theme_storage_key: String,
    /// BCP 47 tag handed to the speech recognizer
    pub speech_language: String,
    /// Silence after a final transcript before voice input stops
    pub quiet_period_ms: u32,
    /// How long a voice error stays on screen
    pub error_dismiss_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "TALWAR".to_string(),
            theme_storage_key: "theme".to_string(),
            speech_language: "en-US".to_string(),
            quiet_period_ms: 1000,
            error_dismiss_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read `window.__TALWAR_CONFIG__`, falling back to defaults when absent or malformed
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }

        match Self::from_js(raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("{e}; using defaults").into());
                Self::default()
            }
        }
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.max_log_level()?;
        Ok(config)
    }

    pub fn max_log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
