#![forbid(unsafe_code)]

//! The aggregate [`Style`] and the palette-driven builder.
//!
//! [`build_style`] is one flat assignment pass: every field of every record
//! is either read from the palette, wrapped into a color fill, set to a fixed
//! metric, or cloned from a sibling built earlier in the same pass.

use nkui_render::{Align, Face, Point, Rgba, SymbolType};

use crate::item::Item;
use crate::palette::{ColorTable, DEFAULT_TABLE, StyleColor as C};
use crate::theme::ThemeId;
use crate::widget::{
    Button, Chart, Combo, CustomButtonDrawing, CustomToggleDrawing, Edit, HeaderAlign, Progress,
    Property, Scrollbar, Selectable, Slider, Tab, Text, Toggle, Window, WindowHeader,
};

/// Complete appearance of every widget class.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Font used for all labels. Set by the host; the builder leaves it empty.
    pub font: Option<Face>,
    pub text: Text,
    pub button: Button,
    pub contextual_button: Button,
    pub menu_button: Button,
    /// Radio option.
    pub option: Toggle,
    pub checkbox: Toggle,
    pub selectable: Selectable,
    pub slider: Slider,
    pub progress: Progress,
    pub property: Property,
    pub edit: Edit,
    pub scrollh: Scrollbar,
    pub scrollv: Scrollbar,
    pub tab: Tab,
    pub combo: Combo,
    pub chart: Chart,
    pub normal_window: Window,
    pub menu_window: Window,
    pub tooltip_window: Window,
    pub combo_window: Window,
    pub contextual_window: Window,
    pub group_window: Window,
}

impl Default for Style {
    fn default() -> Self {
        build_style(None)
    }
}

impl Style {
    /// Attach a font face.
    #[must_use]
    pub fn with_font(mut self, face: Face) -> Self {
        self.font = Some(face);
        self
    }

    /// All six window records, normal window first.
    pub fn windows(&self) -> [&Window; 6] {
        [
            &self.normal_window,
            &self.menu_window,
            &self.tooltip_window,
            &self.combo_window,
            &self.contextual_window,
            &self.group_window,
        ]
    }
}

const STEP_FILL: Rgba = Rgba::rgb(40, 40, 40);
const STEP_FILL_HOVER: Rgba = Rgba::rgb(42, 42, 42);
const STEP_FILL_ACTIVE: Rgba = Rgba::rgb(44, 44, 44);
const STEP_BORDER: Rgba = Rgba::rgb(65, 65, 65);
const STEP_TEXT: Rgba = Rgba::rgb(175, 175, 175);

/// Step button used by sliders and scrollbars. Its colors do not follow the palette.
fn step_button(padding: Point) -> Button {
    Button {
        normal: Item::color(STEP_FILL),
        hover: Item::color(STEP_FILL_HOVER),
        active: Item::color(STEP_FILL_ACTIVE),
        border_color: STEP_BORDER,
        text_background: STEP_FILL,
        text_normal: STEP_TEXT,
        text_hover: STEP_TEXT,
        text_active: STEP_TEXT,
        border: 1,
        rounding: 0,
        padding,
        image_padding: Point::ZERO,
        touch_padding: Point::ZERO,
        draw_begin: None,
        draw: CustomButtonDrawing::default(),
        draw_end: None,
    }
}

fn build_toggle(t: &ColorTable) -> Toggle {
    Toggle {
        normal: Item::color(t[C::Toggle]),
        hover: Item::color(t[C::ToggleHover]),
        active: Item::color(t[C::ToggleHover]),
        cursor_normal: Item::color(t[C::ToggleCursor]),
        cursor_hover: Item::color(t[C::ToggleCursor]),
        text_normal: t[C::Text],
        text_hover: t[C::Text],
        text_active: t[C::Text],
        text_background: t[C::Window],
        padding: Point::splat(4),
        touch_padding: Point::ZERO,
        draw_begin: None,
        draw: CustomToggleDrawing::default(),
        draw_end: None,
    }
}

/// Populate every widget record from `palette`, or from [`DEFAULT_TABLE`]
/// when no palette is given.
pub fn build_style(palette: Option<&ColorTable>) -> Style {
    build_from(palette.unwrap_or(&DEFAULT_TABLE), None)
}

/// Builder body shared with [`crate::style_for_theme`], which knows the
/// theme name for the build event.
pub(crate) fn build_from(t: &ColorTable, theme: Option<ThemeId>) -> Style {
    tracing::debug!(
        message = "style.build",
        theme = theme.map(ThemeId::name),
        custom_palette = theme.is_none() && *t != DEFAULT_TABLE,
    );

    let text = Text {
        color: t[C::Text],
        padding: Point::splat(4),
    };

    let button = Button {
        normal: Item::color(t[C::Button]),
        hover: Item::color(t[C::ButtonHover]),
        active: Item::color(t[C::ButtonActive]),
        border_color: t[C::Border],
        text_background: t[C::Button],
        text_normal: t[C::Text],
        text_hover: t[C::Text],
        text_active: t[C::Text],
        border: 1,
        rounding: 4,
        padding: Point::splat(4),
        image_padding: Point::ZERO,
        touch_padding: Point::ZERO,
        draw_begin: None,
        draw: CustomButtonDrawing::default(),
        draw_end: None,
    };

    let contextual_button = Button {
        normal: Item::color(t[C::Window]),
        hover: Item::color(t[C::ButtonHover]),
        active: Item::color(t[C::ButtonActive]),
        border_color: t[C::Window],
        text_background: t[C::Window],
        rounding: 0,
        ..Button::flat(t[C::Window], t[C::Window], t[C::Text], Point::splat(4))
    };

    let menu_button = Button {
        rounding: 1,
        ..Button::flat(t[C::Window], t[C::Window], t[C::Text], Point::splat(4))
    };

    let checkbox = build_toggle(t);
    let option = build_toggle(t);

    let selectable = Selectable {
        normal: Item::color(t[C::Select]),
        hover: Item::color(t[C::Select]),
        pressed: Item::color(t[C::Select]),
        normal_active: Item::color(t[C::SelectActive]),
        hover_active: Item::color(t[C::SelectActive]),
        pressed_active: Item::color(t[C::SelectActive]),
        text_normal: t[C::Text],
        text_hover: t[C::Text],
        text_pressed: t[C::Text],
        text_normal_active: t[C::Text],
        text_hover_active: t[C::Text],
        text_pressed_active: t[C::Text],
        text_background: Rgba::TRANSPARENT,
        text_alignment: Align::LEFT_MIDDLE,
        rounding: 0,
        padding: Point::splat(4),
        touch_padding: Point::ZERO,
        draw_begin: None,
        draw: None,
        draw_end: None,
    };

    let slider_button = step_button(Point::splat(8));
    let slider = Slider {
        normal: Item::hide(),
        hover: Item::hide(),
        active: Item::hide(),
        border_color: Rgba::TRANSPARENT,
        bar_normal: t[C::Slider],
        bar_hover: t[C::Slider],
        bar_active: t[C::Slider],
        bar_filled: t[C::SliderCursor],
        cursor_normal: Item::color(t[C::SliderCursor]),
        cursor_hover: Item::color(t[C::SliderCursorHover]),
        cursor_active: Item::color(t[C::SliderCursorActive]),
        border: 0,
        rounding: 0,
        bar_height: 8,
        padding: Point::splat(4),
        spacing: Point::splat(4),
        cursor_size: Point::splat(16),
        show_buttons: false,
        dec_button: slider_button.clone(),
        inc_button: slider_button,
        inc_symbol: SymbolType::TriangleRight,
        dec_symbol: SymbolType::TriangleLeft,
        draw_begin: None,
        draw: None,
        draw_end: None,
    };

    let progress = Progress {
        normal: Item::color(t[C::Slider]),
        hover: Item::color(t[C::Slider]),
        active: Item::color(t[C::Slider]),
        cursor_normal: Item::color(t[C::SliderCursor]),
        cursor_hover: Item::color(t[C::SliderCursorHover]),
        cursor_active: Item::color(t[C::SliderCursorActive]),
        rounding: 0,
        padding: Point::splat(4),
        draw_begin: None,
        draw: None,
        draw_end: None,
    };

    let scroll_button = step_button(Point::splat(4));
    let scrollh = Scrollbar {
        normal: Item::color(t[C::Scrollbar]),
        hover: Item::color(t[C::Scrollbar]),
        active: Item::color(t[C::Scrollbar]),
        border_color: STEP_BORDER,
        cursor_normal: Item::color(t[C::ScrollbarCursor]),
        cursor_hover: Item::color(t[C::ScrollbarCursorHover]),
        cursor_active: Item::color(t[C::ScrollbarCursorActive]),
        border: 0,
        rounding: 0,
        padding: Point::splat(4),
        show_buttons: false,
        dec_button: scroll_button.clone(),
        inc_button: scroll_button,
        inc_symbol: SymbolType::CircleFilled,
        dec_symbol: SymbolType::CircleFilled,
        draw_begin: None,
        draw: None,
        draw_end: None,
    };
    let scrollv = scrollh.clone();

    let edit = Edit {
        normal: Item::color(t[C::Edit]),
        hover: Item::color(t[C::Edit]),
        active: Item::color(t[C::Edit]),
        border_color: t[C::Border],
        scrollbar: scrollh.clone(),
        cursor_normal: t[C::Text],
        cursor_hover: t[C::Text],
        cursor_text_normal: t[C::Edit],
        cursor_text_hover: t[C::Edit],
        text_normal: t[C::Text],
        text_hover: t[C::Text],
        text_active: t[C::Text],
        selected_normal: t[C::Text],
        selected_hover: t[C::Text],
        selected_text_normal: t[C::Edit],
        selected_text_hover: t[C::Edit],
        border: 1,
        rounding: 0,
        cursor_size: 4,
        scrollbar_size: Point::splat(4),
        padding: Point::splat(4),
        row_padding: 2,
    };

    let property_button =
        Button::flat(t[C::Property], Rgba::TRANSPARENT, t[C::Text], Point::ZERO);
    let property = Property {
        normal: Item::color(t[C::Property]),
        hover: Item::color(t[C::Property]),
        active: Item::color(t[C::Property]),
        border_color: t[C::Border],
        label_normal: t[C::Text],
        label_hover: t[C::Text],
        label_active: t[C::Text],
        sym_left: SymbolType::TriangleLeft,
        sym_right: SymbolType::TriangleRight,
        border: 1,
        rounding: 10,
        padding: Point::splat(4),
        edit: Edit {
            normal: Item::color(t[C::Property]),
            hover: Item::color(t[C::Property]),
            active: Item::color(t[C::Property]),
            border_color: Rgba::TRANSPARENT,
            scrollbar: Scrollbar::default(),
            cursor_normal: t[C::Text],
            cursor_hover: t[C::Text],
            cursor_text_normal: t[C::Edit],
            cursor_text_hover: t[C::Edit],
            text_normal: t[C::Text],
            text_hover: t[C::Text],
            text_active: t[C::Text],
            selected_normal: t[C::Text],
            selected_hover: t[C::Text],
            selected_text_normal: t[C::Edit],
            selected_text_hover: t[C::Edit],
            border: 0,
            rounding: 0,
            cursor_size: 8,
            scrollbar_size: Point::ZERO,
            padding: Point::ZERO,
            row_padding: 0,
        },
        inc_button: property_button.clone(),
        dec_button: property_button,
        draw_begin: None,
        draw: None,
        draw_end: None,
    };

    let combo = Combo {
        normal: Item::color(t[C::Combo]),
        hover: Item::color(t[C::Combo]),
        active: Item::color(t[C::Combo]),
        border_color: t[C::Border],
        label_normal: t[C::Text],
        label_hover: t[C::Text],
        label_active: t[C::Text],
        symbol_normal: Rgba::TRANSPARENT,
        symbol_hover: Rgba::TRANSPARENT,
        symbol_active: Rgba::TRANSPARENT,
        button: Button::flat(
            t[C::Combo],
            Rgba::TRANSPARENT,
            t[C::Text],
            Point::splat(2),
        ),
        sym_normal: SymbolType::TriangleDown,
        sym_hover: SymbolType::TriangleDown,
        sym_active: SymbolType::TriangleDown,
        border: 1,
        rounding: 0,
        content_padding: Point::splat(4),
        button_padding: Point::new(0, 4),
        spacing: Point::new(4, 0),
    };

    let chart = Chart {
        background: Item::color(t[C::Chart]),
        border_color: t[C::Border],
        selected_color: t[C::ChartColorHighlight],
        color: t[C::ChartColor],
        border: 0,
        rounding: 0,
        padding: Point::splat(4),
    };

    let tab = Tab {
        background: Item::color(t[C::TabHeader]),
        border_color: t[C::Border],
        text: t[C::Text],
        tab_button: Button::flat(
            t[C::TabHeader],
            Rgba::TRANSPARENT,
            t[C::Text],
            Point::splat(2),
        ),
        node_button: Button {
            normal: Item::color(t[C::Window]),
            hover: Item::color(t[C::Window]),
            active: Item::color(t[C::Window]),
            ..Button::flat(
                t[C::TabHeader],
                Rgba::TRANSPARENT,
                t[C::Text],
                Point::splat(2),
            )
        },
        sym_minimize: SymbolType::TriangleDown,
        sym_maximize: SymbolType::TriangleRight,
        border: 1,
        rounding: 0,
        padding: Point::splat(4),
        spacing: Point::splat(4),
        indent: 0,
    };

    let header_button =
        Button::flat(t[C::Header], Rgba::TRANSPARENT, t[C::Text], Point::ZERO);
    let normal_window = Window {
        header: WindowHeader {
            normal: Item::color(t[C::Header]),
            hover: Item::color(t[C::Header]),
            active: Item::color(t[C::Header]),
            close_button: header_button.clone(),
            minimize_button: header_button,
            close_symbol: SymbolType::X,
            minimize_symbol: SymbolType::Minus,
            maximize_symbol: SymbolType::Plus,
            label_normal: t[C::Text],
            label_hover: t[C::Text],
            label_active: t[C::Text],
            align: HeaderAlign::Right,
            padding: Point::splat(4),
            label_padding: Point::splat(4),
            spacing: Point::ZERO,
        },
        fixed_background: Item::color(t[C::Window]),
        background: t[C::Window],
        border_color: t[C::Border],
        scaler: Item::color(t[C::Text]),
        footer_padding: Point::ZERO,
        border: 2,
        rounding: 0,
        scaler_size: Point::splat(16),
        padding: Point::splat(8),
        spacing: Point::splat(4),
        scrollbar_size: Point::splat(10),
        min_size: Point::splat(64),
    };

    let menu_window = Window {
        border_color: t[C::Border],
        border: 1,
        spacing: Point::splat(2),
        ..normal_window.clone()
    };
    let tooltip_window = Window {
        border_color: t[C::Border],
        border: 1,
        padding: Point::splat(2),
        ..normal_window.clone()
    };
    let combo_window = Window {
        border_color: t[C::Border],
        border: 1,
        ..normal_window.clone()
    };
    let contextual_window = Window {
        border_color: t[C::Border],
        border: 1,
        ..normal_window.clone()
    };
    let group_window = Window {
        border_color: t[C::Border],
        border: 1,
        padding: Point::splat(2),
        spacing: Point::splat(2),
        ..normal_window.clone()
    };

    Style {
        font: None,
        text,
        button,
        contextual_button,
        menu_button,
        option,
        checkbox,
        selectable,
        slider,
        progress,
        property,
        edit,
        scrollh,
        scrollv,
        tab,
        combo,
        chart,
        normal_window,
        menu_window,
        tooltip_window,
        combo_window,
        contextual_window,
        group_window,
    }
}
