#![forbid(unsafe_code)]

//! Draw command recording.
//!
//! A [`Buffer`] is an ordered list of primitive draw commands. Widgets (and
//! the custom draw hooks a style can carry) push into it; the host backend
//! replays the list. Commands that would paint nothing are dropped at push
//! time, and every command is clipped against the current scissor.

use std::sync::Arc;

use crate::color::Rgba;
use crate::font::Face;
use crate::geometry::Rect;
use crate::image::Image;
use crate::label::{Align, SymbolType};

/// A single recorded draw primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Scissor {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        rounding: u16,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        rounding: u16,
        line_width: i32,
        color: Rgba,
    },
    Image {
        rect: Rect,
        image: Arc<Image>,
    },
    Symbol {
        rect: Rect,
        symbol: SymbolType,
        color: Rgba,
    },
    Text {
        rect: Rect,
        text: String,
        face: Face,
        background: Rgba,
        foreground: Rgba,
    },
}

/// Ordered command list with a current clip rectangle.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    clip: Option<Rect>,
    commands: Vec<Command>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clip rectangle, `None` when unclipped.
    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all commands and the clip rectangle.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "buffer.reset", commands = self.commands.len());
        self.commands.clear();
        self.clip = None;
    }

    /// Set the clip rectangle for subsequent commands.
    pub fn push_scissor(&mut self, rect: Rect) {
        self.clip = Some(rect);
        self.commands.push(Command::Scissor { rect });
    }

    fn visible(&self, rect: &Rect) -> bool {
        if rect.is_empty() {
            return false;
        }
        match self.clip {
            Some(clip) => clip.intersection_opt(rect).is_some(),
            None => true,
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, rounding: u16, color: Rgba) {
        if color.is_transparent() || !self.visible(&rect) {
            return;
        }
        self.commands.push(Command::FillRect {
            rect,
            rounding,
            color,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, rounding: u16, line_width: i32, color: Rgba) {
        if line_width <= 0 || color.is_transparent() || !self.visible(&rect) {
            return;
        }
        self.commands.push(Command::StrokeRect {
            rect,
            rounding,
            line_width,
            color,
        });
    }

    pub fn draw_image(&mut self, rect: Rect, image: Arc<Image>) {
        if !self.visible(&rect) {
            return;
        }
        self.commands.push(Command::Image { rect, image });
    }

    pub fn draw_symbol(&mut self, rect: Rect, symbol: SymbolType, color: Rgba) {
        if !symbol.is_visible() || color.is_transparent() || !self.visible(&rect) {
            return;
        }
        self.commands.push(Command::Symbol {
            rect,
            symbol,
            color,
        });
    }

    /// Record a text run at the exact rectangle given.
    pub fn draw_text(
        &mut self,
        rect: Rect,
        text: &str,
        face: &Face,
        background: Rgba,
        foreground: Rgba,
    ) {
        if text.is_empty() || foreground.is_transparent() || !self.visible(&rect) {
            return;
        }
        self.commands.push(Command::Text {
            rect,
            text: text.to_owned(),
            face: face.clone(),
            background,
            foreground,
        });
    }

    /// Record a text run positioned inside `bounds` according to `align`.
    pub fn draw_label(
        &mut self,
        bounds: Rect,
        text: &str,
        align: Align,
        face: &Face,
        background: Rgba,
        foreground: Rgba,
    ) {
        let width = face.text_width(text).min(bounds.width);
        let height = face.line_height().min(bounds.height);
        let rect = Rect::new(
            bounds.x.saturating_add(align.horizontal_offset(bounds.width, width)),
            bounds.y.saturating_add(align.vertical_offset(bounds.height, height)),
            width,
            height,
        );
        self.draw_text(rect, text, face, background, foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFace;

    #[derive(Debug)]
    struct Mono;

    impl FontFace for Mono {
        fn name(&self) -> &str {
            "mono"
        }

        fn line_height(&self) -> i32 {
            10
        }

        fn text_width(&self, text: &str) -> i32 {
            text.len() as i32 * 6
        }
    }

    #[test]
    fn transparent_fill_is_dropped() {
        let mut buf = Buffer::new();
        buf.fill_rect(Rect::new(0, 0, 10, 10), 0, Rgba::TRANSPARENT);
        assert!(buf.is_empty());
        buf.fill_rect(Rect::new(0, 0, 10, 10), 4, Rgba::BLACK);
        assert_eq!(
            buf.commands(),
            &[Command::FillRect {
                rect: Rect::new(0, 0, 10, 10),
                rounding: 4,
                color: Rgba::BLACK,
            }]
        );
    }

    #[test]
    fn commands_outside_scissor_are_dropped() {
        let mut buf = Buffer::new();
        buf.push_scissor(Rect::new(0, 0, 10, 10));
        buf.fill_rect(Rect::new(20, 20, 5, 5), 0, Rgba::WHITE);
        buf.fill_rect(Rect::new(5, 5, 10, 10), 0, Rgba::WHITE);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.clip(), Some(Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn zero_width_stroke_is_dropped() {
        let mut buf = Buffer::new();
        buf.stroke_rect(Rect::new(0, 0, 10, 10), 0, 0, Rgba::WHITE);
        assert!(buf.is_empty());
        buf.stroke_rect(Rect::new(0, 0, 10, 10), 0, 1, Rgba::WHITE);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn none_symbol_is_dropped() {
        let mut buf = Buffer::new();
        buf.draw_symbol(Rect::new(0, 0, 8, 8), SymbolType::None, Rgba::WHITE);
        assert!(buf.is_empty());
        buf.draw_symbol(Rect::new(0, 0, 8, 8), SymbolType::X, Rgba::WHITE);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn label_is_positioned_by_alignment() {
        let face = Face::new(Mono);
        let mut buf = Buffer::new();
        buf.draw_label(
            Rect::new(0, 0, 100, 30),
            "abcd",
            Align::RIGHT | Align::MIDDLE,
            &face,
            Rgba::TRANSPARENT,
            Rgba::WHITE,
        );
        match &buf.commands()[0] {
            Command::Text { rect, text, .. } => {
                assert_eq!(*rect, Rect::new(76, 10, 24, 10));
                assert_eq!(text, "abcd");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn label_near_coordinate_limit_saturates() {
        let face = Face::new(Mono);
        let mut buf = Buffer::new();
        buf.draw_label(
            Rect::new(i32::MAX - 5, i32::MAX - 5, 100, 30),
            "abcd",
            Align::RIGHT | Align::BOTTOM,
            &face,
            Rgba::TRANSPARENT,
            Rgba::WHITE,
        );
        match &buf.commands()[0] {
            Command::Text { rect, .. } => {
                assert_eq!(rect.x, i32::MAX);
                assert_eq!(rect.y, i32::MAX);
                assert_eq!((rect.width, rect.height), (24, 10));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut buf = Buffer::new();
        buf.push_scissor(Rect::new(0, 0, 4, 4));
        buf.fill_rect(Rect::new(0, 0, 4, 4), 0, Rgba::WHITE);
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.clip(), None);
    }
}
