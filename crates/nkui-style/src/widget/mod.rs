#![forbid(unsafe_code)]

//! Per-widget style records.
//!
//! Each record stores fills and text colors for the `normal`, `hover` and
//! `active` states plus the metrics the layout engine needs. Records that
//! embed auxiliary buttons (sliders, scrollbars, property editors, combos,
//! tabs, window headers) own full [`Button`] values.

pub mod button;
pub mod chart;
pub mod edit;
pub mod slider;
pub mod toggle;
pub mod window;

use nkui_render::{Point, Rgba};

pub use button::{Button, ButtonFrame, CustomButtonDrawing};
pub use chart::Chart;
pub use edit::{Combo, Edit, Property, PropertyFrame};
pub use slider::{Progress, ProgressFrame, Scrollbar, ScrollbarFrame, Slider, SliderFrame};
pub use toggle::{CustomToggleDrawing, Selectable, SelectableFrame, Toggle, ToggleFrame};
pub use window::{HeaderAlign, Tab, Window, WindowHeader};

/// Default label appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub color: Rgba,
    pub padding: Point,
}
