//! Interaction state of a widget.
//!
//! Every style record stores its fills and text colors once per state
//! (`normal`, `hover`, `active`). [`WidgetState`] names those three slots so a
//! renderer can ask a record for "the fill to use right now" without matching
//! on field names.
//!
//! # Example
//!
//! ```
//! use nkui_style::{WidgetState, style_for_theme, ThemeId};
//!
//! let style = style_for_theme(ThemeId::Dark);
//! let state = WidgetState::resolve(true, false);
//! assert_eq!(state, WidgetState::Hovered);
//! assert_eq!(style.button.fill(state), &style.button.hover);
//! ```

#![forbid(unsafe_code)]

/// The interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidgetState {
    /// No interaction; the `normal` slot.
    #[default]
    Inactive,
    /// Pointer is over the widget; the `hover` slot.
    Hovered,
    /// Widget is pressed or being dragged; the `active` slot.
    Active,
}

impl WidgetState {
    pub const ALL: [WidgetState; 3] = [Self::Inactive, Self::Hovered, Self::Active];

    /// Derive the state from raw input flags. Pressing wins over hovering.
    #[inline]
    pub const fn resolve(hovered: bool, pressed: bool) -> Self {
        if pressed {
            Self::Active
        } else if hovered {
            Self::Hovered
        } else {
            Self::Inactive
        }
    }

    /// Select the slot matching this state.
    #[inline]
    pub fn pick<T>(self, normal: T, hover: T, active: T) -> T {
        match self {
            Self::Inactive => normal,
            Self::Hovered => hover,
            Self::Active => active,
        }
    }

    #[inline]
    pub const fn is_hovered(self) -> bool {
        matches!(self, Self::Hovered)
    }

    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
