#![forbid(unsafe_code)]

//! Widget styles and built-in color themes for nkui.
//!
//! # Role in nkui
//! `nkui-style` is the appearance layer of the toolkit. It turns a 28-entry
//! color palette into a complete [`Style`]: one record per widget class with
//! fills, text colors, paddings, borders, rounding and optional draw hooks.
//! The widget engine reads these records; it never hardcodes a color.
//!
//! # This crate provides
//! - [`StyleColor`] roles and [`ColorTable`] palettes, with four built-in
//!   tables selected by [`ThemeId`].
//! - [`build_style`] and [`style_for_theme`] to populate a [`Style`].
//! - [`Item`] fills (solid color or shared image).
//! - Per-widget records in [`widget`] with [`WidgetState`] resolvers.
//! - [`Style::scale`] for high-density displays.
//! - [`SharedStyle`] to swap themes while frames are being drawn.
//! - [`StyleConfig`] to pick theme and scale from the environment.
//!
//! # How it fits in the system
//! `nkui-render` supplies the vocabulary (colors, geometry, symbols, fonts and
//! the command buffer) that style records and draw hooks speak in. Hosts build
//! a style once, attach a font, and hand it to the widget engine.
//!
//! ```
//! use nkui_style::{StyleColor, ThemeId, palette, style_for_theme};
//!
//! let style = style_for_theme(ThemeId::Red);
//! assert_eq!(style.text.color, palette(ThemeId::Red)[StyleColor::Text]);
//! ```

pub mod config;
pub mod error;
/// Custom draw hook handles.
pub mod hook;
pub mod item;
/// Color roles and built-in palette tables.
pub mod palette;
pub mod scale;
pub mod shared;
pub mod state;
pub mod style;
pub mod theme;
pub mod widget;

pub use config::StyleConfig;
pub use error::{Result, StyleError};
pub use hook::{BufferFn, Hook};
pub use item::{Item, ItemKind};
pub use palette::{ColorTable, DEFAULT_TABLE, StyleColor};
pub use scale::Scale;
pub use shared::SharedStyle;
pub use state::WidgetState;
pub use style::{Style, build_style};
pub use theme::{ThemeId, palette, style_for_theme};
pub use widget::{
    Button, Chart, Combo, CustomButtonDrawing, CustomToggleDrawing, Edit, HeaderAlign, Progress,
    Property, Scrollbar, Selectable, Slider, Tab, Text, Toggle, Window, WindowHeader,
};
