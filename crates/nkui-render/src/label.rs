#![forbid(unsafe_code)]

//! Label symbols and text alignment.

use bitflags::bitflags;

/// Built-in glyphs drawn by buttons, scrollbars, tabs and window headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolType {
    #[default]
    None,
    X,
    Underscore,
    CircleFilled,
    CircleOutline,
    RectFilled,
    RectOutline,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Plus,
    Minus,
}

impl SymbolType {
    /// Whether drawing this symbol produces anything.
    #[inline]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}

bitflags! {
    /// Text alignment inside a widget's content rectangle.
    ///
    /// One horizontal and one vertical flag are normally combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Align: u8 {
        const LEFT = 1 << 0;
        const CENTERED = 1 << 1;
        const RIGHT = 1 << 2;
        const TOP = 1 << 3;
        const MIDDLE = 1 << 4;
        const BOTTOM = 1 << 5;

        /// Left aligned, vertically centered.
        const LEFT_MIDDLE = Self::LEFT.bits() | Self::MIDDLE.bits();
        /// Centered on both axes.
        const CENTER_MIDDLE = Self::CENTERED.bits() | Self::MIDDLE.bits();
    }
}

impl Align {
    /// Horizontal offset of a run of `text_width` inside `avail` pixels.
    pub fn horizontal_offset(self, avail: i32, text_width: i32) -> i32 {
        let slack = avail.saturating_sub(text_width).max(0);
        if self.contains(Align::RIGHT) {
            slack
        } else if self.contains(Align::CENTERED) {
            slack / 2
        } else {
            0
        }
    }

    /// Vertical offset of a line of `line_height` inside `avail` pixels.
    pub fn vertical_offset(self, avail: i32, line_height: i32) -> i32 {
        let slack = avail.saturating_sub(line_height).max(0);
        if self.contains(Align::BOTTOM) {
            slack
        } else if self.contains(Align::MIDDLE) {
            slack / 2
        } else {
            0
        }
    }
}
