#![forbid(unsafe_code)]

//! Color roles and the built-in palette tables.
//!
//! A [`ColorTable`] holds one color per [`StyleColor`] role. The default table
//! is a literal constant; the white, red and dark tables are produced once by
//! pure builder functions and handed out as `&'static` references.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use std::sync::OnceLock;

use nkui_render::Rgba;

use crate::error::StyleError;

/// Semantic color roles, in palette index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleColor {
    Text,
    Window,
    Header,
    Border,
    Button,
    ButtonHover,
    ButtonActive,
    Toggle,
    ToggleHover,
    ToggleCursor,
    Select,
    SelectActive,
    Slider,
    SliderCursor,
    SliderCursorHover,
    SliderCursorActive,
    Property,
    Edit,
    /// Carried by every table; the builder draws the caret in `Text`.
    EditCursor,
    Combo,
    Chart,
    ChartColor,
    ChartColorHighlight,
    Scrollbar,
    ScrollbarCursor,
    ScrollbarCursorHover,
    ScrollbarCursorActive,
    TabHeader,
}

impl StyleColor {
    /// Number of roles, and therefore the length of every palette.
    pub const COUNT: usize = 28;

    pub const ALL: [StyleColor; Self::COUNT] = [
        StyleColor::Text,
        StyleColor::Window,
        StyleColor::Header,
        StyleColor::Border,
        StyleColor::Button,
        StyleColor::ButtonHover,
        StyleColor::ButtonActive,
        StyleColor::Toggle,
        StyleColor::ToggleHover,
        StyleColor::ToggleCursor,
        StyleColor::Select,
        StyleColor::SelectActive,
        StyleColor::Slider,
        StyleColor::SliderCursor,
        StyleColor::SliderCursorHover,
        StyleColor::SliderCursorActive,
        StyleColor::Property,
        StyleColor::Edit,
        StyleColor::EditCursor,
        StyleColor::Combo,
        StyleColor::Chart,
        StyleColor::ChartColor,
        StyleColor::ChartColorHighlight,
        StyleColor::Scrollbar,
        StyleColor::ScrollbarCursor,
        StyleColor::ScrollbarCursorHover,
        StyleColor::ScrollbarCursorActive,
        StyleColor::TabHeader,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::COUNT {
            Some(Self::ALL[idx])
        } else {
            None
        }
    }

    /// Canonical role name, e.g. `"ColorText"`.
    pub const fn name(self) -> &'static str {
        match self {
            StyleColor::Text => "ColorText",
            StyleColor::Window => "ColorWindow",
            StyleColor::Header => "ColorHeader",
            StyleColor::Border => "ColorBorder",
            StyleColor::Button => "ColorButton",
            StyleColor::ButtonHover => "ColorButtonHover",
            StyleColor::ButtonActive => "ColorButtonActive",
            StyleColor::Toggle => "ColorToggle",
            StyleColor::ToggleHover => "ColorToggleHover",
            StyleColor::ToggleCursor => "ColorToggleCursor",
            StyleColor::Select => "ColorSelect",
            StyleColor::SelectActive => "ColorSelectActive",
            StyleColor::Slider => "ColorSlider",
            StyleColor::SliderCursor => "ColorSliderCursor",
            StyleColor::SliderCursorHover => "ColorSliderCursorHover",
            StyleColor::SliderCursorActive => "ColorSliderCursorActive",
            StyleColor::Property => "ColorProperty",
            StyleColor::Edit => "ColorEdit",
            StyleColor::EditCursor => "ColorEditCursor",
            StyleColor::Combo => "ColorCombo",
            StyleColor::Chart => "ColorChart",
            StyleColor::ChartColor => "ColorChartColor",
            StyleColor::ChartColorHighlight => "ColorChartColorHighlight",
            StyleColor::Scrollbar => "ColorScrollbar",
            StyleColor::ScrollbarCursor => "ColorScrollbarCursor",
            StyleColor::ScrollbarCursorHover => "ColorScrollbarCursorHover",
            StyleColor::ScrollbarCursorActive => "ColorScrollbarCursorActive",
            StyleColor::TabHeader => "ColorTabHeader",
        }
    }
}

impl fmt::Display for StyleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical name with or without the `Color` prefix, ignoring case.
impl FromStr for StyleColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleColor::ALL
            .into_iter()
            .find(|role| {
                let name = role.name();
                name.eq_ignore_ascii_case(wanted) || name[5..].eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| StyleError::UnknownColor(wanted.to_owned()))
    }
}

/// One color per [`StyleColor`] role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTable(pub [Rgba; StyleColor::COUNT]);

impl ColorTable {
    /// A table with every role set to the same color.
    pub const fn splat(color: Rgba) -> Self {
        Self([color; StyleColor::COUNT])
    }

    #[inline]
    pub const fn get(&self, role: StyleColor) -> Rgba {
        self.0[role.index()]
    }

    #[inline]
    pub fn set(&mut self, role: StyleColor, color: Rgba) {
        self.0[role.index()] = color;
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub const fn with(mut self, role: StyleColor, color: Rgba) -> Self {
        self.0[role.index()] = color;
        self
    }

    /// Roles paired with their colors, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleColor, Rgba)> + '_ {
        StyleColor::ALL.into_iter().zip(self.0.iter().copied())
    }

    #[inline]
    pub const fn as_slice(&self) -> &[Rgba] {
        &self.0
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        DEFAULT_TABLE
    }
}

impl Index<StyleColor> for ColorTable {
    type Output = Rgba;

    #[inline]
    fn index(&self, role: StyleColor) -> &Rgba {
        &self.0[role.index()]
    }
}

impl IndexMut<StyleColor> for ColorTable {
    #[inline]
    fn index_mut(&mut self, role: StyleColor) -> &mut Rgba {
        &mut self.0[role.index()]
    }
}

/// Takes the first [`StyleColor::COUNT`] colors; extra entries are ignored.
impl TryFrom<&[Rgba]> for ColorTable {
    type Error = StyleError;

    fn try_from(colors: &[Rgba]) -> Result<Self, Self::Error> {
        let head = colors
            .get(..StyleColor::COUNT)
            .ok_or(StyleError::PaletteTooShort {
                len: colors.len(),
                required: StyleColor::COUNT,
            })?;
        let mut table = ColorTable::splat(Rgba::TRANSPARENT);
        table.0.copy_from_slice(head);
        Ok(table)
    }
}

impl From<[Rgba; StyleColor::COUNT]> for ColorTable {
    fn from(colors: [Rgba; StyleColor::COUNT]) -> Self {
        Self(colors)
    }
}

/// The default dark-grey palette.
pub const DEFAULT_TABLE: ColorTable = ColorTable([
    Rgba::rgba(175, 175, 175, 255),
    Rgba::rgba(45, 45, 45, 255),
    Rgba::rgba(40, 40, 40, 255),
    Rgba::rgba(65, 65, 65, 255),
    Rgba::rgba(50, 50, 50, 255),
    Rgba::rgba(40, 40, 40, 255),
    Rgba::rgba(35, 35, 35, 255),
    Rgba::rgba(100, 100, 100, 255),
    Rgba::rgba(120, 120, 120, 255),
    Rgba::rgba(45, 45, 45, 255),
    Rgba::rgba(45, 45, 45, 255),
    Rgba::rgba(35, 35, 35, 255),
    Rgba::rgba(38, 38, 38, 255),
    Rgba::rgba(100, 100, 100, 255),
    Rgba::rgba(120, 120, 120, 255),
    Rgba::rgba(150, 150, 150, 255),
    Rgba::rgba(38, 38, 38, 255),
    Rgba::rgba(38, 38, 38, 255),
    Rgba::rgba(175, 175, 175, 255),
    Rgba::rgba(45, 45, 45, 255),
    Rgba::rgba(120, 120, 120, 255),
    Rgba::rgba(45, 45, 45, 255),
    Rgba::rgba(255, 0, 0, 255),
    Rgba::rgba(40, 40, 40, 255),
    Rgba::rgba(100, 100, 100, 255),
    Rgba::rgba(120, 120, 120, 255),
    Rgba::rgba(150, 150, 150, 255),
    Rgba::rgba(40, 40, 40, 255),
]);

fn white_table() -> ColorTable {
    use StyleColor::*;

    let mut t = ColorTable::splat(Rgba::TRANSPARENT);
    t[Text] = Rgba::rgba(70, 70, 70, 255);
    t[Window] = Rgba::rgba(175, 175, 175, 255);
    t[Header] = Rgba::rgba(175, 175, 175, 255);
    t[Border] = Rgba::rgba(0, 0, 0, 255);
    t[Button] = Rgba::rgba(185, 185, 185, 255);
    t[ButtonHover] = Rgba::rgba(170, 170, 170, 255);
    t[ButtonActive] = Rgba::rgba(160, 160, 160, 255);
    t[Toggle] = Rgba::rgba(150, 150, 150, 255);
    t[ToggleHover] = Rgba::rgba(120, 120, 120, 255);
    t[ToggleCursor] = Rgba::rgba(175, 175, 175, 255);
    t[Select] = Rgba::rgba(175, 175, 175, 255);
    t[SelectActive] = Rgba::rgba(190, 190, 190, 255);
    t[Slider] = Rgba::rgba(190, 190, 190, 255);
    t[SliderCursor] = Rgba::rgba(80, 80, 80, 255);
    t[SliderCursorHover] = Rgba::rgba(70, 70, 70, 255);
    t[SliderCursorActive] = Rgba::rgba(60, 60, 60, 255);
    t[Property] = Rgba::rgba(175, 175, 175, 255);
    t[Edit] = Rgba::rgba(150, 150, 150, 255);
    t[EditCursor] = Rgba::rgba(0, 0, 0, 255);
    t[Combo] = Rgba::rgba(175, 175, 175, 255);
    t[Chart] = Rgba::rgba(160, 160, 160, 255);
    t[ChartColor] = Rgba::rgba(45, 45, 45, 255);
    t[ChartColorHighlight] = Rgba::rgba(255, 0, 0, 255);
    t[Scrollbar] = Rgba::rgba(180, 180, 180, 255);
    t[ScrollbarCursor] = Rgba::rgba(140, 140, 140, 255);
    t[ScrollbarCursorHover] = Rgba::rgba(150, 150, 150, 255);
    t[ScrollbarCursorActive] = Rgba::rgba(160, 160, 160, 255);
    t[TabHeader] = Rgba::rgba(180, 180, 180, 255);
    t
}

fn red_table() -> ColorTable {
    use StyleColor::*;

    let mut t = ColorTable::splat(Rgba::TRANSPARENT);
    t[Text] = Rgba::rgba(190, 190, 190, 255);
    t[Window] = Rgba::rgba(30, 33, 40, 215);
    t[Header] = Rgba::rgba(181, 45, 69, 220);
    t[Border] = Rgba::rgba(51, 55, 67, 255);
    t[Button] = Rgba::rgba(181, 45, 69, 255);
    t[ButtonHover] = Rgba::rgba(190, 50, 70, 255);
    t[ButtonActive] = Rgba::rgba(195, 55, 75, 255);
    t[Toggle] = Rgba::rgba(51, 55, 67, 255);
    t[ToggleHover] = Rgba::rgba(45, 60, 60, 255);
    t[ToggleCursor] = Rgba::rgba(181, 45, 69, 255);
    t[Select] = Rgba::rgba(51, 55, 67, 255);
    t[SelectActive] = Rgba::rgba(181, 45, 69, 255);
    t[Slider] = Rgba::rgba(51, 55, 67, 255);
    t[SliderCursor] = Rgba::rgba(181, 45, 69, 255);
    t[SliderCursorHover] = Rgba::rgba(186, 50, 74, 255);
    t[SliderCursorActive] = Rgba::rgba(191, 55, 79, 255);
    t[Property] = Rgba::rgba(51, 55, 67, 255);
    t[Edit] = Rgba::rgba(51, 55, 67, 225);
    t[EditCursor] = Rgba::rgba(190, 190, 190, 255);
    t[Combo] = Rgba::rgba(51, 55, 67, 255);
    t[Chart] = Rgba::rgba(51, 55, 67, 255);
    t[ChartColor] = Rgba::rgba(170, 40, 60, 255);
    t[ChartColorHighlight] = Rgba::rgba(255, 0, 0, 255);
    t[Scrollbar] = Rgba::rgba(30, 33, 40, 255);
    t[ScrollbarCursor] = Rgba::rgba(64, 84, 95, 255);
    t[ScrollbarCursorHover] = Rgba::rgba(70, 90, 100, 255);
    t[ScrollbarCursorActive] = Rgba::rgba(75, 95, 105, 255);
    t[TabHeader] = Rgba::rgba(181, 45, 69, 220);
    t
}

fn dark_table() -> ColorTable {
    use StyleColor::*;

    let mut t = ColorTable::splat(Rgba::TRANSPARENT);
    t[Text] = Rgba::rgba(210, 210, 210, 255);
    t[Window] = Rgba::rgba(57, 67, 71, 255);
    t[Header] = Rgba::rgba(51, 51, 56, 220);
    t[Border] = Rgba::rgba(46, 46, 46, 255);
    t[Button] = Rgba::rgba(48, 83, 111, 255);
    t[ButtonHover] = Rgba::rgba(58, 93, 121, 255);
    t[ButtonActive] = Rgba::rgba(63, 98, 126, 255);
    t[Toggle] = Rgba::rgba(50, 58, 61, 255);
    t[ToggleHover] = Rgba::rgba(45, 53, 56, 255);
    t[ToggleCursor] = Rgba::rgba(48, 83, 111, 255);
    t[Select] = Rgba::rgba(57, 67, 61, 255);
    t[SelectActive] = Rgba::rgba(48, 83, 111, 255);
    t[Slider] = Rgba::rgba(50, 58, 61, 255);
    t[SliderCursor] = Rgba::rgba(48, 83, 111, 245);
    t[SliderCursorHover] = Rgba::rgba(53, 88, 116, 255);
    t[SliderCursorActive] = Rgba::rgba(58, 93, 121, 255);
    t[Property] = Rgba::rgba(50, 58, 61, 255);
    t[Edit] = Rgba::rgba(50, 58, 61, 225);
    t[EditCursor] = Rgba::rgba(210, 210, 210, 255);
    t[Combo] = Rgba::rgba(50, 58, 61, 255);
    t[Chart] = Rgba::rgba(50, 58, 61, 255);
    t[ChartColor] = Rgba::rgba(48, 83, 111, 255);
    t[ChartColorHighlight] = Rgba::rgba(255, 0, 0, 255);
    t[Scrollbar] = Rgba::rgba(50, 58, 61, 255);
    t[ScrollbarCursor] = Rgba::rgba(48, 83, 111, 255);
    t[ScrollbarCursorHover] = Rgba::rgba(53, 88, 116, 255);
    t[ScrollbarCursorActive] = Rgba::rgba(58, 93, 121, 255);
    t[TabHeader] = Rgba::rgba(48, 83, 111, 255);
    t
}

static DEFAULT_STATIC: ColorTable = DEFAULT_TABLE;
static WHITE_TABLE: OnceLock<ColorTable> = OnceLock::new();
static RED_TABLE: OnceLock<ColorTable> = OnceLock::new();
static DARK_TABLE: OnceLock<ColorTable> = OnceLock::new();

fn init_table(
    slot: &'static OnceLock<ColorTable>,
    name: &'static str,
    build: fn() -> ColorTable,
) -> &'static ColorTable {
    slot.get_or_init(|| {
        tracing::trace!(message = "palette.init", table = name);
        build()
    })
}

pub(crate) fn default() -> &'static ColorTable {
    &DEFAULT_STATIC
}

pub(crate) fn white() -> &'static ColorTable {
    init_table(&WHITE_TABLE, "white", white_table)
}

pub(crate) fn red() -> &'static ColorTable {
    init_table(&RED_TABLE, "red", red_table)
}

pub(crate) fn dark() -> &'static ColorTable {
    init_table(&DARK_TABLE, "dark", dark_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_indices_follow_declaration_order() {
        for (idx, role) in StyleColor::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), idx);
            assert_eq!(StyleColor::from_index(idx), Some(role));
        }
        assert_eq!(StyleColor::from_index(StyleColor::COUNT), None);
        assert_eq!(StyleColor::TabHeader.index(), 27);
    }

    #[test]
    fn role_names_parse_back() {
        for role in StyleColor::ALL {
            assert_eq!(role.name().parse::<StyleColor>(), Ok(role));
            assert_eq!(role.to_string(), role.name());
        }
        assert_eq!("slidercursorhover".parse(), Ok(StyleColor::SliderCursorHover));
        assert_eq!(" TabHeader ".parse(), Ok(StyleColor::TabHeader));
        assert_eq!(
            "Colour".parse::<StyleColor>(),
            Err(StyleError::UnknownColor("Colour".into()))
        );
    }

    #[test]
    fn default_table_literal_values() {
        assert_eq!(DEFAULT_TABLE[StyleColor::Text], Rgba::rgb(175, 175, 175));
        assert_eq!(DEFAULT_TABLE[StyleColor::Window], Rgba::rgb(45, 45, 45));
        assert_eq!(
            DEFAULT_TABLE[StyleColor::ChartColorHighlight],
            Rgba::rgb(255, 0, 0)
        );
        assert_eq!(DEFAULT_TABLE[StyleColor::TabHeader], Rgba::rgb(40, 40, 40));
        assert_eq!(ColorTable::default(), DEFAULT_TABLE);
    }

    #[test]
    fn derived_tables_assign_every_role() {
        for table in [white(), red(), dark()] {
            for (role, color) in table.iter() {
                assert!(!color.is_transparent(), "{role} left unassigned");
            }
        }
    }

    #[test]
    fn derived_tables_are_initialized_once() {
        assert!(std::ptr::eq(white(), white()));
        assert!(std::ptr::eq(red(), red()));
        assert!(std::ptr::eq(dark(), dark()));
        assert_eq!(*dark(), dark_table());
    }

    #[test]
    fn derived_table_spot_values() {
        assert_eq!(white()[StyleColor::Border], Rgba::rgb(0, 0, 0));
        assert_eq!(red()[StyleColor::Window], Rgba::rgba(30, 33, 40, 215));
        assert_eq!(red()[StyleColor::TabHeader], Rgba::rgba(181, 45, 69, 220));
        assert_eq!(dark()[StyleColor::SliderCursor], Rgba::rgba(48, 83, 111, 245));
        assert_eq!(dark()[StyleColor::Edit], Rgba::rgba(50, 58, 61, 225));
    }

    #[test]
    fn slice_conversion_checks_length() {
        let short = vec![Rgba::WHITE; StyleColor::COUNT - 1];
        assert_eq!(
            ColorTable::try_from(short.as_slice()),
            Err(StyleError::PaletteTooShort {
                len: 27,
                required: 28,
            })
        );

        let mut long = DEFAULT_TABLE.as_slice().to_vec();
        long.push(Rgba::WHITE);
        assert_eq!(ColorTable::try_from(long.as_slice()), Ok(DEFAULT_TABLE));
    }

    #[test]
    fn with_and_set_touch_one_role() {
        let table = DEFAULT_TABLE.with(StyleColor::Border, Rgba::WHITE);
        assert_eq!(table[StyleColor::Border], Rgba::WHITE);
        assert_eq!(table[StyleColor::Text], DEFAULT_TABLE[StyleColor::Text]);

        let mut table = DEFAULT_TABLE;
        table.set(StyleColor::Text, Rgba::BLACK);
        assert_eq!(table.get(StyleColor::Text), Rgba::BLACK);
    }
}
