#![forbid(unsafe_code)]

//! Checkbox, radio option and selectable label styles.

use nkui_render::{Align, Buffer, Face, Point, Rect, Rgba};

use crate::hook::{BufferFn, Hook};
use crate::item::Item;
use crate::state::WidgetState;

/// Everything a custom toggle hook needs to paint one checkbox or radio.
#[derive(Debug, Clone, Copy)]
pub struct ToggleFrame<'a> {
    pub state: WidgetState,
    pub style: &'a Toggle,
    /// Whether the toggle is checked.
    pub active: bool,
    pub label: Rect,
    pub selector: Rect,
    pub cursor: Rect,
    pub text: &'a str,
    pub face: &'a Face,
}

pub type ToggleFn = dyn Fn(&mut Buffer, &ToggleFrame<'_>) + Send + Sync;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomToggleDrawing {
    pub radio: Option<Hook<ToggleFn>>,
    pub checkbox: Option<Hook<ToggleFn>>,
}

/// Appearance of a checkbox or radio option.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toggle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub text_normal: Rgba,
    pub text_hover: Rgba,
    pub text_active: Rgba,
    pub text_background: Rgba,
    pub padding: Point,
    pub touch_padding: Point,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: CustomToggleDrawing,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Toggle {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    /// Check mark fill. Pressed toggles reuse the hover cursor.
    pub fn cursor(&self, state: WidgetState) -> &Item {
        state.pick(&self.cursor_normal, &self.cursor_hover, &self.cursor_hover)
    }

    pub fn text(&self, state: WidgetState) -> Rgba {
        state.pick(self.text_normal, self.text_hover, self.text_active)
    }
}

/// Parameters for a custom selectable hook.
#[derive(Debug, Clone, Copy)]
pub struct SelectableFrame<'a> {
    pub state: WidgetState,
    pub style: &'a Selectable,
    /// Whether the entry is currently selected.
    pub active: bool,
    pub bounds: Rect,
    pub text: &'a str,
    pub align: Align,
    pub face: &'a Face,
}

pub type SelectableFn = dyn Fn(&mut Buffer, &SelectableFrame<'_>) + Send + Sync;

/// Appearance of a selectable label, with separate slots for the selected
/// (`*_active`) and unselected variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selectable {
    pub normal: Item,
    pub hover: Item,
    pub pressed: Item,
    pub normal_active: Item,
    pub hover_active: Item,
    pub pressed_active: Item,
    pub text_normal: Rgba,
    pub text_hover: Rgba,
    pub text_pressed: Rgba,
    pub text_normal_active: Rgba,
    pub text_hover_active: Rgba,
    pub text_pressed_active: Rgba,
    pub text_background: Rgba,
    pub text_alignment: Align,
    pub rounding: u16,
    pub padding: Point,
    pub touch_padding: Point,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: Option<Hook<SelectableFn>>,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Selectable {
    pub fn fill(&self, state: WidgetState, selected: bool) -> &Item {
        if selected {
            state.pick(&self.normal_active, &self.hover_active, &self.pressed_active)
        } else {
            state.pick(&self.normal, &self.hover, &self.pressed)
        }
    }

    pub fn text(&self, state: WidgetState, selected: bool) -> Rgba {
        if selected {
            state.pick(
                self.text_normal_active,
                self.text_hover_active,
                self.text_pressed_active,
            )
        } else {
            state.pick(self.text_normal, self.text_hover, self.text_pressed)
        }
    }
}
