use serde::Deserialize;

use crate::errors::Result;

/// Platform family as far as Shift reporting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Mac,
    #[default]
    Other,
}

impl Platform {
    /// Classify a `navigator.platform` string ("MacIntel", "Win32", ...).
    pub fn from_navigator(platform: &str) -> Self {
        if platform.contains("Mac") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    pub fn is_mac(self) -> bool {
        self == Platform::Mac
    }
}

/// Per-page options for the case corrector.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorrectorOptions {
    /// Raw navigator platform string.
    pub platform: String,
    pub enabled_on_load: bool,
    /// Upper bound on wrapper elements walked through in a content-editable tree.
    pub max_descent_depth: usize,
    /// Verbose logging of every decision.
    pub debug: bool,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            platform: String::new(),
            enabled_on_load: true,
            max_descent_depth: 32,
            debug: false,
        }
    }
}

impl CorrectorOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Resolved evaluation context handed to the corrector.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub platform: Platform,
    pub options: CorrectorOptions,
}

impl PageContext {
    pub fn new(options: CorrectorOptions) -> Self {
        Self {
            platform: Platform::from_navigator(&options.platform),
            options,
        }
    }
}
