#![forbid(unsafe_code)]

//! Window, window header and tree tab styles.

use nkui_render::{Buffer, Point, Rect, Rgba, SymbolType};

use crate::item::Item;
use crate::state::WidgetState;

use super::button::Button;

/// Appearance of tree nodes and tabs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tab {
    pub background: Item,
    pub border_color: Rgba,
    pub text: Rgba,
    pub tab_button: Button,
    pub node_button: Button,
    pub sym_minimize: SymbolType,
    pub sym_maximize: SymbolType,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub spacing: Point,
    /// Horizontal offset applied to each nesting level.
    pub indent: i32,
}

impl Tab {
    /// Expand/collapse glyph for a node.
    pub fn symbol(&self, expanded: bool) -> SymbolType {
        if expanded {
            self.sym_minimize
        } else {
            self.sym_maximize
        }
    }
}

/// Side of the header the close and minimize buttons sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderAlign {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowHeader {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub close_button: Button,
    pub minimize_button: Button,
    pub close_symbol: SymbolType,
    pub minimize_symbol: SymbolType,
    pub maximize_symbol: SymbolType,
    pub label_normal: Rgba,
    pub label_hover: Rgba,
    pub label_active: Rgba,
    pub align: HeaderAlign,
    pub padding: Point,
    pub label_padding: Point,
    pub spacing: Point,
}

impl WindowHeader {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn label(&self, state: WidgetState) -> Rgba {
        state.pick(self.label_normal, self.label_hover, self.label_active)
    }
}

/// Appearance of a window or window-like panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Window {
    pub header: WindowHeader,
    pub fixed_background: Item,
    pub background: Rgba,
    pub border_color: Rgba,
    /// Fill of the resize grip in the bottom-right corner.
    pub scaler: Item,
    pub footer_padding: Point,
    pub border: i32,
    pub rounding: u16,
    pub scaler_size: Point,
    pub padding: Point,
    pub spacing: Point,
    pub scrollbar_size: Point,
    pub min_size: Point,
}

impl Window {
    /// Paint the window body and its border.
    pub fn draw_background(&self, buf: &mut Buffer, bounds: Rect) {
        self.fixed_background.draw(buf, bounds, self.rounding);
        buf.stroke_rect(bounds, self.rounding, self.border, self.border_color);
    }

    /// Clamp a requested window size to `min_size`.
    pub fn clamp_size(&self, size: Point) -> Point {
        Point::new(size.x.max(self.min_size.x), size.y.max(self.min_size.y))
    }
}
