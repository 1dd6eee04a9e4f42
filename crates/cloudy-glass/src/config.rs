//! Session configuration.
//!
//! Configuration is read from TOML. Every field is optional; anything left
//! out keeps its built-in value.
//!
//! ```toml
//! [selection]
//! eligible_kinds = ["RECTANGLE", "FRAME", "ELLIPSE"]
//!
//! [notices]
//! timeout_ms = 2000
//! report_node_failures = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use cloudy_glass_core::NodeKind;
use serde::{Deserialize, Serialize};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration for a [`GlassSession`](crate::GlassSession).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    /// Selection gating.
    pub selection: SelectionConfig,
    /// User-facing notice texts and behaviour.
    pub notices: NoticeConfig,
}

impl GlassConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Which node kinds may head a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub eligible_kinds: Vec<NodeKind>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            eligible_kinds: vec![NodeKind::Rectangle, NodeKind::Frame],
        }
    }
}

/// Notice texts and behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Shown when the selection changes to an ineligible node.
    pub select_layer: String,
    /// Shown when a check or apply request finds no eligible selection.
    pub select_at_least_one: String,
    /// Shown for the explicit "nothing selected" warning request.
    pub no_selection: String,
    /// Prefix for per-node failure notices.
    pub apply_failed: String,
    pub easter_egg: String,
    /// Timeout for warnings that ask for one, in milliseconds.
    pub timeout_ms: u64,
    /// Raise one notice per failed node.
    pub report_node_failures: bool,
}

impl NoticeConfig {
    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            select_layer: "Please select 👉 a rectangle or Frame layer 👈 first".to_string(),
            select_at_least_one: "Please select at least one 👉 Frame or layer 👈 first"
                .to_string(),
            no_selection: "Please select a layer first".to_string(),
            apply_failed: "Error applying preset: ".to_string(),
            easter_egg: "🥚🌟-- YOU FIND IT! --🌟🥚".to_string(),
            timeout_ms: 3000,
            report_node_failures: true,
        }
    }
}
