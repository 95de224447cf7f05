#![forbid(unsafe_code)]

use nkui_render::{Point, Rgba};

use crate::item::Item;

/// Appearance of line and column charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    pub background: Item,
    pub border_color: Rgba,
    /// Color of the hovered data point.
    pub selected_color: Rgba,
    /// Series color.
    pub color: Rgba,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
}

impl Chart {
    /// Color for a data point, highlighted when `selected`.
    pub fn point_color(&self, selected: bool) -> Rgba {
        if selected {
            self.selected_color
        } else {
            self.color
        }
    }
}
