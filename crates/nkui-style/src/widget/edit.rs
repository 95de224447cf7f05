#![forbid(unsafe_code)]

//! Text edit, property editor and combo box styles.

use nkui_render::{Buffer, Face, Point, Rect, Rgba, SymbolType};

use crate::hook::{BufferFn, Hook};
use crate::item::Item;
use crate::state::WidgetState;

use super::button::Button;
use super::slider::Scrollbar;

/// Appearance of a text edit field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Edit {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub scrollbar: Scrollbar,
    pub cursor_normal: Rgba,
    pub cursor_hover: Rgba,
    pub cursor_text_normal: Rgba,
    pub cursor_text_hover: Rgba,
    pub text_normal: Rgba,
    pub text_hover: Rgba,
    pub text_active: Rgba,
    pub selected_normal: Rgba,
    pub selected_hover: Rgba,
    pub selected_text_normal: Rgba,
    pub selected_text_hover: Rgba,
    pub border: i32,
    pub rounding: u16,
    pub cursor_size: i32,
    pub scrollbar_size: Point,
    pub padding: Point,
    pub row_padding: i32,
}

impl Edit {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn text(&self, state: WidgetState) -> Rgba {
        state.pick(self.text_normal, self.text_hover, self.text_active)
    }

    /// Caret color. Only normal and hover slots exist; a focused field uses hover.
    pub fn cursor(&self, state: WidgetState) -> Rgba {
        state.pick(self.cursor_normal, self.cursor_hover, self.cursor_hover)
    }

    /// Color of the character under the caret.
    pub fn cursor_text(&self, state: WidgetState) -> Rgba {
        state.pick(
            self.cursor_text_normal,
            self.cursor_text_hover,
            self.cursor_text_hover,
        )
    }

    /// Selection background.
    pub fn selected(&self, state: WidgetState) -> Rgba {
        state.pick(self.selected_normal, self.selected_hover, self.selected_hover)
    }

    /// Text color inside the selection.
    pub fn selected_text(&self, state: WidgetState) -> Rgba {
        state.pick(
            self.selected_text_normal,
            self.selected_text_hover,
            self.selected_text_hover,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyFrame<'a> {
    pub style: &'a Property,
    pub bounds: Rect,
    pub label: Rect,
    pub state: WidgetState,
    pub name: &'a str,
    pub face: &'a Face,
}

pub type PropertyFn = dyn Fn(&mut Buffer, &PropertyFrame<'_>) + Send + Sync;

/// Appearance of a numeric property editor: a label flanked by two step
/// buttons, with an embedded edit field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Property {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub label_normal: Rgba,
    pub label_hover: Rgba,
    pub label_active: Rgba,
    pub sym_left: SymbolType,
    pub sym_right: SymbolType,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub edit: Edit,
    pub inc_button: Button,
    pub dec_button: Button,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: Option<Hook<PropertyFn>>,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Property {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn label(&self, state: WidgetState) -> Rgba {
        state.pick(self.label_normal, self.label_hover, self.label_active)
    }
}

/// Appearance of a combo box header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Combo {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub label_normal: Rgba,
    pub label_hover: Rgba,
    pub label_active: Rgba,
    pub symbol_normal: Rgba,
    pub symbol_hover: Rgba,
    pub symbol_active: Rgba,
    pub button: Button,
    pub sym_normal: SymbolType,
    pub sym_hover: SymbolType,
    pub sym_active: SymbolType,
    pub border: i32,
    pub rounding: u16,
    pub content_padding: Point,
    pub button_padding: Point,
    pub spacing: Point,
}

impl Combo {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn label(&self, state: WidgetState) -> Rgba {
        state.pick(self.label_normal, self.label_hover, self.label_active)
    }

    pub fn symbol_color(&self, state: WidgetState) -> Rgba {
        state.pick(self.symbol_normal, self.symbol_hover, self.symbol_active)
    }

    pub fn symbol(&self, state: WidgetState) -> SymbolType {
        state.pick(self.sym_normal, self.sym_hover, self.sym_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_focus_reuses_hover_slots() {
        let e = Edit {
            cursor_normal: Rgba::rgb(1, 0, 0),
            cursor_hover: Rgba::rgb(2, 0, 0),
            selected_text_hover: Rgba::rgb(3, 0, 0),
            ..Edit::default()
        };
        assert_eq!(e.cursor(WidgetState::Inactive), Rgba::rgb(1, 0, 0));
        assert_eq!(e.cursor(WidgetState::Active), Rgba::rgb(2, 0, 0));
        assert_eq!(e.selected_text(WidgetState::Active), Rgba::rgb(3, 0, 0));
        assert_eq!(e.selected_text(WidgetState::Inactive), Rgba::TRANSPARENT);
    }

    #[test]
    fn combo_symbol_per_state() {
        let c = Combo {
            sym_normal: SymbolType::TriangleDown,
            sym_hover: SymbolType::TriangleRight,
            sym_active: SymbolType::TriangleUp,
            symbol_active: Rgba::WHITE,
            ..Combo::default()
        };
        assert_eq!(c.symbol(WidgetState::Hovered), SymbolType::TriangleRight);
        assert_eq!(c.symbol(WidgetState::Active), SymbolType::TriangleUp);
        assert_eq!(c.symbol_color(WidgetState::Active), Rgba::WHITE);
    }

    #[test]
    fn property_label_by_state() {
        let p = Property {
            label_normal: Rgba::rgb(4, 4, 4),
            label_active: Rgba::rgb(5, 5, 5),
            ..Property::default()
        };
        assert_eq!(p.label(WidgetState::Inactive), Rgba::rgb(4, 4, 4));
        assert_eq!(p.label(WidgetState::Active), Rgba::rgb(5, 5, 5));
        assert!(p.fill(WidgetState::Active).is_hidden());
    }
}
