//! Editor preferences forwarded to the editing widget.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::{DEFAULT_FONT_SIZE, FONT_SIZE_RANGE};

/// Color theme of the editing widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme name understood by the widget.
    pub fn widget_name(&self) -> &'static str {
        match self {
            Self::Dark => "vs-dark",
            Self::Light => "light",
        }
    }
}

/// User-adjustable editor settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    pub theme: Theme,
    pub font_size: u8,
    pub minimap: bool,
    pub line_numbers: bool,
    /// Mirror every keystroke into the stored file.
    pub auto_save: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: DEFAULT_FONT_SIZE,
            minimap: true,
            line_numbers: true,
            auto_save: true,
        }
    }
}

impl EditorSettings {
    /// Set the font size, clamped to the supported range.
    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
    }

    /// Option payload for the widget's `updateOptions` call.
    pub fn widget_options(&self) -> Value {
        json!({
            "theme": self.theme.widget_name(),
            "fontSize": self.font_size,
            "minimap": { "enabled": self.minimap },
            "lineNumbers": if self.line_numbers { "on" } else { "off" },
        })
    }
}
