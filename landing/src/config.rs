//! Site configuration.
//!
//! Defaults cover everything; `index.html` may override them with a JSON
//! blob in `<script id="site-config" type="application/json">`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Element id of the embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Max tracing level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub reveal: RevealOptions,
    pub carousel: CarouselOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            reveal: RevealOptions::default(),
            carousel: CarouselOptions::default(),
        }
    }
}

/// Options handed to the intersection observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealOptions {
    /// Fraction of a section that must be visible to count as intersecting.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Item centred on mount; clamped to the last item.
    pub initial_index: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self { initial_index: 1 }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Read the embedded config. A missing or empty tag yields defaults; a
    /// broken one is reported so the caller can log it once logging is up.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }
}
