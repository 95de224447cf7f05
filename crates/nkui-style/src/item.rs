#![forbid(unsafe_code)]

//! Widget background fills.

use std::sync::Arc;

use nkui_render::{Buffer, Image, Rect, Rgba};

/// Which variant an [`Item`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Color,
    Image,
}

/// A widget background: either a solid color or a shared bitmap.
///
/// Cloning an image item shares the bitmap.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Color(Rgba),
    Image(Arc<Image>),
}

impl Item {
    #[inline]
    pub const fn color(color: Rgba) -> Self {
        Item::Color(color)
    }

    #[inline]
    pub fn image(image: Arc<Image>) -> Self {
        Item::Image(image)
    }

    /// A fully transparent color fill.
    #[inline]
    pub const fn hide() -> Self {
        Item::Color(Rgba::TRANSPARENT)
    }

    #[inline]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Item::Color(_) => ItemKind::Color,
            Item::Image(_) => ItemKind::Image,
        }
    }

    pub const fn as_color(&self) -> Option<Rgba> {
        match self {
            Item::Color(c) => Some(*c),
            Item::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&Arc<Image>> {
        match self {
            Item::Color(_) => None,
            Item::Image(img) => Some(img),
        }
    }

    /// True for a transparent color fill.
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Item::Color(c) if c.is_transparent())
    }

    /// Paint this fill over `rect`.
    pub fn draw(&self, buf: &mut Buffer, rect: Rect, rounding: u16) {
        match self {
            Item::Color(color) => buf.fill_rect(rect, rounding, *color),
            Item::Image(img) => buf.draw_image(rect, Arc::clone(img)),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Item::hide()
    }
}

impl From<Rgba> for Item {
    fn from(color: Rgba) -> Self {
        Item::Color(color)
    }
}

impl From<Arc<Image>> for Item {
    fn from(image: Arc<Image>) -> Self {
        Item::Image(image)
    }
}
