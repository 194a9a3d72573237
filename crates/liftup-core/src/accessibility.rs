//! The accessibility configuration value object.
//!
//! A config is an immutable snapshot of four settings; every change
//! replaces the whole snapshot. Wire names and literal values match
//! the record the app has always persisted (`theme`, `letterSpacing`,
//! `lineHeight`, `textAlign`).

use serde::{Deserialize, Serialize};

/// Storage key under which the config is persisted.
pub const STATE_STORAGE_KEY: &str = "@app_state";

/// Color theme, toggled from the accessibility sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Horizontal text alignment, cycled from the accessibility sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// The forward cycle: center → right → justify → left → center.
    pub fn cycled(self) -> Self {
        match self {
            Self::Center => Self::Right,
            Self::Right => Self::Justify,
            Self::Justify => Self::Left,
            Self::Left => Self::Center,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// The accessibility settings snapshot.
///
/// Exactly one config is current at any time; the store replaces it
/// atomically on every update. The stepper methods return a complete
/// new snapshot so callers never hand out a half-updated record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityConfig {
    pub theme: Theme,
    /// Letter spacing in px. Stepping cycles through 1.0..=2.5.
    pub letter_spacing: f32,
    /// Line height in px. Stepping cycles through 24..=40.
    pub line_height: u32,
    pub text_align: TextAlign,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            letter_spacing: 0.5,
            line_height: 24,
            text_align: TextAlign::Left,
        }
    }
}

impl AccessibilityConfig {
    /// The config active at process start: the built-in default with
    /// the ambient system color scheme applied. `None` means the
    /// platform reported no preference.
    pub fn startup(ambient: Option<Theme>) -> Self {
        Self {
            theme: ambient.unwrap_or(Theme::Light),
            ..Self::default()
        }
    }

    pub fn with_toggled_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Step letter spacing by 0.5 px, wrapping from 2.5 back to 1.0.
    pub fn with_stepped_letter_spacing(self) -> Self {
        let letter_spacing = if self.letter_spacing >= 2.5 {
            1.0
        } else {
            self.letter_spacing + 0.5
        };
        Self {
            letter_spacing,
            ..self
        }
    }

    /// Step line height by 8 px, wrapping from 40 back to 24.
    pub fn with_stepped_line_height(self) -> Self {
        let line_height = if self.line_height >= 40 {
            24
        } else {
            self.line_height + 8
        };
        Self {
            line_height,
            ..self
        }
    }

    pub fn with_cycled_text_align(self) -> Self {
        Self {
            text_align: self.text_align.cycled(),
            ..self
        }
    }
}
