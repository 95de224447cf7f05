#![forbid(unsafe_code)]

//! Slider, progress bar and scrollbar styles.

use nkui_render::{Buffer, Point, Rect, Rgba, SymbolType};

use crate::hook::{BufferFn, Hook};
use crate::item::Item;
use crate::state::WidgetState;

use super::button::Button;

#[derive(Debug, Clone, Copy)]
pub struct SliderFrame<'a> {
    pub state: WidgetState,
    pub style: &'a Slider,
    pub bounds: Rect,
    pub cursor: Rect,
    pub min: f64,
    pub value: f64,
    pub max: f64,
}

pub type SliderFn = dyn Fn(&mut Buffer, &SliderFrame<'_>) + Send + Sync;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slider {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub bar_normal: Rgba,
    pub bar_hover: Rgba,
    pub bar_active: Rgba,
    pub bar_filled: Rgba,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub border: i32,
    pub rounding: u16,
    pub bar_height: i32,
    pub padding: Point,
    pub spacing: Point,
    pub cursor_size: Point,
    pub show_buttons: bool,
    pub inc_button: Button,
    pub dec_button: Button,
    pub inc_symbol: SymbolType,
    pub dec_symbol: SymbolType,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: Option<Hook<SliderFn>>,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Slider {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn bar(&self, state: WidgetState) -> Rgba {
        state.pick(self.bar_normal, self.bar_hover, self.bar_active)
    }

    pub fn cursor(&self, state: WidgetState) -> &Item {
        state.pick(&self.cursor_normal, &self.cursor_hover, &self.cursor_active)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressFrame<'a> {
    pub state: WidgetState,
    pub style: &'a Progress,
    pub bounds: Rect,
    pub cursor: Rect,
    pub value: usize,
    pub max: usize,
}

pub type ProgressFn = dyn Fn(&mut Buffer, &ProgressFrame<'_>) + Send + Sync;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progress {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub rounding: u16,
    pub padding: Point,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: Option<Hook<ProgressFn>>,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Progress {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn cursor(&self, state: WidgetState) -> &Item {
        state.pick(&self.cursor_normal, &self.cursor_hover, &self.cursor_active)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollbarFrame<'a> {
    pub state: WidgetState,
    pub style: &'a Scrollbar,
    pub bounds: Rect,
    pub cursor: Rect,
}

pub type ScrollbarFn = dyn Fn(&mut Buffer, &ScrollbarFrame<'_>) + Send + Sync;

/// Appearance of a horizontal or vertical scrollbar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scrollbar {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub show_buttons: bool,
    pub inc_button: Button,
    pub dec_button: Button,
    pub inc_symbol: SymbolType,
    pub dec_symbol: SymbolType,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: Option<Hook<ScrollbarFn>>,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Scrollbar {
    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn cursor(&self, state: WidgetState) -> &Item {
        state.pick(&self.cursor_normal, &self.cursor_hover, &self.cursor_active)
    }
}
