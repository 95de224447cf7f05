#![forbid(unsafe_code)]

//! Style selection from the environment.
//!
//! | Variable      | Meaning                                              |
//! |---------------|------------------------------------------------------|
//! | `NKUI_THEME`  | Theme name (`default`, `white`, `red`, `dark`) or index |
//! | `NKUI_SCALE`  | Positive metric scale factor, e.g. `1.5`             |
//!
//! Unparseable values are logged at `warn` and ignored.

use crate::style::Style;
use crate::theme::{ThemeId, style_for_theme};

/// Environment variable selecting the theme.
pub const ENV_THEME: &str = "NKUI_THEME";
/// Environment variable selecting the metric scale factor.
pub const ENV_SCALE: &str = "NKUI_SCALE";

/// Theme and scale chosen by the host or the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleConfig {
    pub theme: ThemeId,
    pub scale: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: ThemeId::Default,
            scale: 1.0,
        }
    }
}

impl StyleConfig {
    #[must_use]
    pub fn new(theme: ThemeId) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read configuration using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = get_env(ENV_THEME) {
            match parse_theme(&raw) {
                Some(theme) => config.theme = theme,
                None => tracing::warn!(message = "config.invalid", var = ENV_THEME, value = %raw),
            }
        }
        if let Some(raw) = get_env(ENV_SCALE) {
            match parse_scale(&raw) {
                Some(scale) => config.scale = scale,
                None => tracing::warn!(message = "config.invalid", var = ENV_SCALE, value = %raw),
            }
        }
        config
    }

    /// Build the configured style.
    pub fn build(&self) -> Style {
        let mut style = style_for_theme(self.theme);
        if let Err(err) = style.scale(self.scale) {
            tracing::warn!(message = "config.scale_rejected", error = %err);
        }
        style
    }
}

/// Name (case-insensitive) or index. Out-of-range indices select the default theme.
fn parse_theme(raw: &str) -> Option<ThemeId> {
    let raw = raw.trim();
    if let Ok(index) = raw.parse::<i64>() {
        return Some(ThemeId::from_raw(index));
    }
    raw.parse().ok()
}

fn parse_scale(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
