#![forbid(unsafe_code)]

//! Render vocabulary: colors, geometry, bitmaps, labels, fonts, and command buffers.
//!
//! # Role in nkui
//! `nkui-render` is the boundary between widget styling and the host renderer.
//! It carries the small value types that style records name (colors, points,
//! symbols, alignment flags, font handles) and the command [`Buffer`] that
//! custom draw hooks write into.
//!
//! # How it fits in the system
//! `nkui-style` depends on this crate (not vice versa). The host toolkit owns
//! layout and input; it reads style records, then either draws with its
//! built-in routines or hands a [`Buffer`] to a caller-supplied hook.
//!
//! [`Buffer`]: command::Buffer

/// Packed RGBA colors.
pub mod color;
/// Draw command recording.
pub mod command;
/// Font face handles.
pub mod font;
/// Integer points and rectangles.
pub mod geometry;
/// RGBA bitmaps.
pub mod image;
/// Label symbols and text alignment.
pub mod label;

pub use color::Rgba;
pub use command::{Buffer, Command};
pub use font::{Face, FontFace};
pub use geometry::{Point, Rect};
pub use image::{Image, ImageError};
pub use label::{Align, SymbolType};
