#![forbid(unsafe_code)]

//! Built-in themes.
//!
//! Each [`ThemeId`] names one palette. [`style_for_theme`] looks the palette
//! up and runs the builder; the palette tables themselves are shared
//! process-wide and never rebuilt.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;
use crate::palette::{self, ColorTable};
use crate::style::{Style, build_from};

/// Identifier of a built-in theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeId {
    #[default]
    Default,
    White,
    Red,
    Dark,
}

impl ThemeId {
    pub const ALL: [ThemeId; 4] = [Self::Default, Self::White, Self::Red, Self::Dark];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::White => "white",
            Self::Red => "red",
            Self::Dark => "dark",
        }
    }

    /// Map a raw selector to a theme. Anything outside `0..=3` is the default theme.
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::White,
            2 => Self::Red,
            3 => Self::Dark,
            _ => Self::Default,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cycle to the next theme, wrapping around.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeId {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::UnknownTheme(wanted.to_owned()))
    }
}

/// Palette backing `theme`.
pub fn palette(theme: ThemeId) -> &'static ColorTable {
    match theme {
        ThemeId::Default => palette::default(),
        ThemeId::White => palette::white(),
        ThemeId::Red => palette::red(),
        ThemeId::Dark => palette::dark(),
    }
}

/// Build the complete style for a built-in theme.
pub fn style_for_theme(theme: ThemeId) -> Style {
    tracing::debug!(message = "theme.select", theme = theme.name());
    build_from(palette(theme), Some(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{DEFAULT_TABLE, StyleColor};
    use crate::style::build_style;
    use nkui_render::Rgba;
    use tracing_test::traced_test;

    #[test]
    fn raw_selector_falls_back_to_default() {
        assert_eq!(ThemeId::from_raw(0), ThemeId::Default);
        assert_eq!(ThemeId::from_raw(1), ThemeId::White);
        assert_eq!(ThemeId::from_raw(2), ThemeId::Red);
        assert_eq!(ThemeId::from_raw(3), ThemeId::Dark);
        assert_eq!(ThemeId::from_raw(4), ThemeId::Default);
        assert_eq!(ThemeId::from_raw(-1), ThemeId::Default);
        assert_eq!(ThemeId::from_raw(i64::MAX), ThemeId::Default);
    }

    #[test]
    fn names_round_trip() {
        for theme in ThemeId::ALL {
            assert_eq!(theme.name().parse::<ThemeId>(), Ok(theme));
            assert_eq!(theme.to_string().to_uppercase().parse::<ThemeId>(), Ok(theme));
            assert_eq!(ThemeId::from_raw(theme.index() as i64), theme);
        }
        assert_eq!(
            "solarized".parse::<ThemeId>(),
            Err(StyleError::UnknownTheme("solarized".into()))
        );
    }

    #[test]
    fn next_wraps() {
        assert_eq!(ThemeId::Default.next(), ThemeId::White);
        assert_eq!(ThemeId::Dark.next(), ThemeId::Default);
    }

    #[test]
    fn default_theme_uses_literal_table() {
        assert_eq!(*palette(ThemeId::Default), DEFAULT_TABLE);
        assert!(std::ptr::eq(palette(ThemeId::Default), palette(ThemeId::Default)));
        assert_eq!(style_for_theme(ThemeId::Default), build_style(None));
    }

    #[test]
    fn each_theme_routes_its_own_palette() {
        let white = style_for_theme(ThemeId::White);
        assert_eq!(white.text.color, Rgba::rgb(70, 70, 70));
        assert_eq!(white.edit.cursor_normal, Rgba::rgb(70, 70, 70));
        assert_eq!(white.property.edit.cursor_hover, Rgba::rgb(70, 70, 70));
        assert_ne!(palette(ThemeId::White)[StyleColor::EditCursor], white.edit.cursor_normal);

        let red = style_for_theme(ThemeId::Red);
        assert_eq!(red.normal_window.background, Rgba::rgba(30, 33, 40, 215));

        let dark = style_for_theme(ThemeId::Dark);
        assert_eq!(
            dark.slider.cursor_normal.as_color(),
            Some(palette(ThemeId::Dark)[StyleColor::SliderCursor])
        );
    }

    #[traced_test]
    #[test]
    fn selection_is_logged() {
        let _ = style_for_theme(ThemeId::Red);
        assert!(logs_contain("theme.select"));
        assert!(logs_contain("style.build"));
        assert!(logs_contain("theme=\"red\""));
    }
}
