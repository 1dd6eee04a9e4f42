//! Messages exchanged with the UI panel.
//!
//! Both directions are JSON objects tagged by a `type` field.

use cloudy_glass_style::apply::ApplySummary;
use cloudy_glass_style::selection::SelectionStatus;
use serde::{Deserialize, Serialize};

/// Requests sent by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    /// Apply a preset to the current selection.
    ApplyEffect {
        #[serde(rename = "selectedStyle")]
        selected_style: String,
        #[serde(rename = "isDarkMode", default)]
        is_dark_mode: bool,
    },
    /// Ask whether the current selection is eligible.
    CheckLayerType,
    /// Forward a message to the user.
    Notification { message: String },
    /// Remind the user to select a rectangle or frame.
    SimpleWarning,
    /// Tell the user nothing is selected.
    ShowSelectionWarning,
    /// A style button was toggled; no text means it was deselected.
    StyleSelected {
        #[serde(rename = "buttonText", default, skip_serializing_if = "Option::is_none")]
        button_text: Option<String>,
    },
    EasterEgg {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<serde_json::Value>,
    },
}

impl UiRequest {
    /// Parse a request from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Messages sent to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Sent at startup and after every selection change.
    SelectionStatus {
        #[serde(rename = "hasSelection")]
        has_selection: bool,
        #[serde(rename = "isValidLayerType")]
        is_valid_layer_type: bool,
    },
    /// Reply to [`UiRequest::CheckLayerType`].
    LayerTypeCheckResult {
        #[serde(rename = "isValidLayerType")]
        is_valid_layer_type: bool,
    },
    /// Reply to [`UiRequest::ApplyEffect`].
    ApplySummary {
        #[serde(rename = "appliedCount")]
        applied_count: usize,
        #[serde(rename = "skippedCount")]
        skipped_count: usize,
        #[serde(rename = "failedCount")]
        failed_count: usize,
    },
    /// Tell the UI to drop its preview.
    ResetPreview { message: String },
}

impl UiMessage {
    /// Serialize to JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<SelectionStatus> for UiMessage {
    fn from(status: SelectionStatus) -> Self {
        Self::SelectionStatus {
            has_selection: status.has_selection,
            is_valid_layer_type: status.eligible,
        }
    }
}

impl From<ApplySummary> for UiMessage {
    fn from(summary: ApplySummary) -> Self {
        Self::ApplySummary {
            applied_count: summary.applied,
            skipped_count: summary.skipped,
            failed_count: summary.failed,
        }
    }
}
