#![forbid(unsafe_code)]

//! Push button style.

use nkui_render::{Align, Buffer, Face, Image, Point, Rect, Rgba, SymbolType};

use crate::hook::{self, BufferFn, Hook};
use crate::item::Item;
use crate::state::WidgetState;

/// Geometry and state handed to every custom button hook.
#[derive(Debug, Clone, Copy)]
pub struct ButtonFrame<'a> {
    /// Outer widget rectangle.
    pub bounds: Rect,
    /// Content rectangle after padding.
    pub content: Rect,
    pub state: WidgetState,
    pub style: &'a Button,
}

pub type ButtonTextFn = dyn Fn(&mut Buffer, &ButtonFrame<'_>, &str, Align, &Face) + Send + Sync;
pub type ButtonSymbolFn = dyn Fn(&mut Buffer, &ButtonFrame<'_>, SymbolType, &Face) + Send + Sync;
pub type ButtonImageFn = dyn Fn(&mut Buffer, &ButtonFrame<'_>, &Image) + Send + Sync;
/// Arguments after the frame: label rectangle, text, symbol, face.
pub type ButtonTextSymbolFn =
    dyn Fn(&mut Buffer, &ButtonFrame<'_>, Rect, &str, SymbolType, &Face) + Send + Sync;
/// Arguments after the frame: label rectangle, text, face, image.
pub type ButtonTextImageFn =
    dyn Fn(&mut Buffer, &ButtonFrame<'_>, Rect, &str, &Face, &Image) + Send + Sync;

/// Replacement drawing for each button content kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomButtonDrawing {
    pub text: Option<Hook<ButtonTextFn>>,
    pub symbol: Option<Hook<ButtonSymbolFn>>,
    pub image: Option<Hook<ButtonImageFn>>,
    pub text_symbol: Option<Hook<ButtonTextSymbolFn>>,
    pub text_image: Option<Hook<ButtonTextImageFn>>,
}

impl CustomButtonDrawing {
    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.symbol.is_none()
            && self.image.is_none()
            && self.text_symbol.is_none()
            && self.text_image.is_none()
    }
}

/// Appearance of a push button.
///
/// Also used for the auxiliary buttons embedded in sliders, scrollbars,
/// property editors, combos, tabs and window headers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Rgba,
    pub text_background: Rgba,
    pub text_normal: Rgba,
    pub text_hover: Rgba,
    pub text_active: Rgba,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub image_padding: Point,
    pub touch_padding: Point,
    pub draw_begin: Option<Hook<BufferFn>>,
    pub draw: CustomButtonDrawing,
    pub draw_end: Option<Hook<BufferFn>>,
}

impl Button {
    /// A hookless button filled with `fill` in every state.
    pub(crate) fn flat(fill: Rgba, border_color: Rgba, text: Rgba, padding: Point) -> Self {
        Button {
            normal: Item::color(fill),
            hover: Item::color(fill),
            active: Item::color(fill),
            border_color,
            text_background: fill,
            text_normal: text,
            text_hover: text,
            text_active: text,
            border: 0,
            rounding: 0,
            padding,
            image_padding: Point::ZERO,
            touch_padding: Point::ZERO,
            draw_begin: None,
            draw: CustomButtonDrawing::default(),
            draw_end: None,
        }
    }

    pub fn fill(&self, state: WidgetState) -> &Item {
        state.pick(&self.normal, &self.hover, &self.active)
    }

    pub fn text(&self, state: WidgetState) -> Rgba {
        state.pick(self.text_normal, self.text_hover, self.text_active)
    }

    /// Content rectangle for a button occupying `bounds`.
    pub fn content(&self, bounds: Rect) -> Rect {
        bounds.shrink(self.padding)
    }

    pub fn frame(&self, bounds: Rect, state: WidgetState) -> ButtonFrame<'_> {
        ButtonFrame {
            bounds,
            content: self.content(bounds),
            state,
            style: self,
        }
    }

    /// Paint the button background and border, bracketed by the begin/end hooks.
    pub fn draw_frame(&self, buf: &mut Buffer, bounds: Rect, state: WidgetState) {
        hook::run(&self.draw_begin, buf);
        self.fill(state).draw(buf, bounds, self.rounding);
        buf.stroke_rect(bounds, self.rounding, self.border, self.border_color);
        hook::run(&self.draw_end, buf);
    }
}
