//! Property-based tests for palette routing and metric scaling.
//!
//! 1. **Routing**: for any 28-color table, every role the builder reads
//!    lands in its documented widget fields, the `EditCursor` slot is never
//!    read, and the fixed step-button colors never move.
//!
//! 2. **Slice conversion**: any slice of at least 28 colors converts to the
//!    table of its first 28 entries; shorter slices are rejected.
//!
//! 3. **Scaling**: metrics scale by the factor rounded to nearest, non-zero
//!    metrics never collapse, colors are untouched.

use nkui_render::{Point, Rgba};
use nkui_style::{ColorTable, Item, Style, StyleColor, StyleError, build_style};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_rgba() -> impl Strategy<Value = Rgba> {
    any::<u32>().prop_map(Rgba)
}

fn arb_table() -> impl Strategy<Value = ColorTable> {
    proptest::collection::vec(arb_rgba(), StyleColor::COUNT).prop_map(|colors| {
        ColorTable::try_from(colors.as_slice()).expect("strategy yields exactly COUNT colors")
    })
}

fn fill(item: &Item) -> Rgba {
    item.as_color().expect("builder only produces color fills")
}

/// One representative field per role, or `None` for roles no field reads.
fn routed(style: &Style, role: StyleColor) -> Option<Rgba> {
    let color = match role {
        StyleColor::Text => style.text.color,
        StyleColor::Window => style.normal_window.background,
        StyleColor::Header => fill(&style.normal_window.header.normal),
        StyleColor::Border => style.button.border_color,
        StyleColor::Button => fill(&style.button.normal),
        StyleColor::ButtonHover => fill(&style.button.hover),
        StyleColor::ButtonActive => fill(&style.button.active),
        StyleColor::Toggle => fill(&style.checkbox.normal),
        StyleColor::ToggleHover => fill(&style.option.hover),
        StyleColor::ToggleCursor => fill(&style.checkbox.cursor_normal),
        StyleColor::Select => fill(&style.selectable.normal),
        StyleColor::SelectActive => fill(&style.selectable.normal_active),
        StyleColor::Slider => style.slider.bar_normal,
        StyleColor::SliderCursor => style.slider.bar_filled,
        StyleColor::SliderCursorHover => fill(&style.progress.cursor_hover),
        StyleColor::SliderCursorActive => fill(&style.slider.cursor_active),
        StyleColor::Property => fill(&style.property.normal),
        StyleColor::Edit => fill(&style.edit.normal),
        StyleColor::EditCursor => return None,
        StyleColor::Combo => fill(&style.combo.normal),
        StyleColor::Chart => fill(&style.chart.background),
        StyleColor::ChartColor => style.chart.color,
        StyleColor::ChartColorHighlight => style.chart.selected_color,
        StyleColor::Scrollbar => fill(&style.scrollh.normal),
        StyleColor::ScrollbarCursor => fill(&style.scrollv.cursor_normal),
        StyleColor::ScrollbarCursorHover => fill(&style.scrollh.cursor_hover),
        StyleColor::ScrollbarCursorActive => fill(&style.scrollh.cursor_active),
        StyleColor::TabHeader => fill(&style.tab.background),
    };
    Some(color)
}

// ═══════════════════════════════════════════════════════════════════════
// Routing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_role_routes_to_its_field(table in arb_table()) {
        let style = build_style(Some(&table));
        for role in StyleColor::ALL {
            if let Some(color) = routed(&style, role) {
                prop_assert_eq!(color, table[role], "role {}", role);
            }
        }
    }

    #[test]
    fn edit_cursor_slot_is_not_read(table in arb_table(), caret in arb_rgba()) {
        let style = build_style(Some(&table));
        let moved = build_style(Some(&table.with(StyleColor::EditCursor, caret)));
        prop_assert_eq!(&moved, &style);
        prop_assert_eq!(style.edit.cursor_normal, table[StyleColor::Text]);
    }

    #[test]
    fn siblings_share_slots(table in arb_table()) {
        let s = build_style(Some(&table));
        prop_assert_eq!(s.checkbox.clone(), s.option.clone());
        prop_assert_eq!(s.edit.cursor_hover, table[StyleColor::Text]);
        prop_assert_eq!(s.property.edit.cursor_normal, table[StyleColor::Text]);
        prop_assert_eq!(s.property.edit.cursor_hover, table[StyleColor::Text]);
        prop_assert_eq!(s.edit.selected_text_normal, table[StyleColor::Edit]);
        prop_assert_eq!(s.combo.symbol_active, Rgba::TRANSPARENT);
        prop_assert_eq!(s.slider.border_color, Rgba::TRANSPARENT);
        prop_assert_eq!(s.selectable.text_background, Rgba::TRANSPARENT);
        prop_assert_eq!(s.tab.node_button.text_background, table[StyleColor::TabHeader]);
        prop_assert_eq!(fill(&s.tab.node_button.normal), table[StyleColor::Window]);
        prop_assert_eq!(fill(&s.normal_window.scaler), table[StyleColor::Text]);
        for win in s.windows() {
            prop_assert_eq!(win.border_color, table[StyleColor::Border]);
            prop_assert_eq!(win.background, table[StyleColor::Window]);
        }
    }

    #[test]
    fn step_buttons_are_palette_independent(table in arb_table()) {
        let s = build_style(Some(&table));
        let reference = build_style(None);
        prop_assert_eq!(&s.slider.inc_button, &reference.slider.inc_button);
        prop_assert_eq!(&s.scrollh.inc_button, &reference.scrollh.inc_button);
        prop_assert_eq!(s.scrollh.border_color, Rgba::rgb(65, 65, 65));
        prop_assert!(s.slider.normal.is_hidden());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Slice conversion
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn long_slices_take_prefix(colors in proptest::collection::vec(arb_rgba(), 28..64)) {
        let table = ColorTable::try_from(colors.as_slice()).unwrap();
        prop_assert_eq!(table.as_slice(), &colors[..StyleColor::COUNT]);
    }

    #[test]
    fn short_slices_are_rejected(colors in proptest::collection::vec(arb_rgba(), 0..28)) {
        let len = colors.len();
        prop_assert_eq!(
            ColorTable::try_from(colors.as_slice()),
            Err(StyleError::PaletteTooShort { len, required: StyleColor::COUNT })
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Scaling
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_factors_multiply_exactly(k in 1u8..6) {
        let base = build_style(None);
        let f = f64::from(k);
        let scaled = base.scaled(f).unwrap();
        let k = i32::from(k);
        prop_assert_eq!(scaled.normal_window.padding, Point::new(8 * k, 8 * k));
        prop_assert_eq!(scaled.normal_window.min_size, Point::new(64 * k, 64 * k));
        prop_assert_eq!(scaled.slider.bar_height, 8 * k);
        prop_assert_eq!(scaled.combo.button_padding, Point::new(0, 4 * k));
        prop_assert_eq!(scaled.tab.indent, 0);
        prop_assert_eq!(i32::from(scaled.property.rounding), 10 * k);
        prop_assert_eq!(scaled.edit.scrollbar.inc_button.border, k);
    }

    #[test]
    fn nonzero_metrics_survive_shrinking(factor in 0.01f64..1.0) {
        let scaled = build_style(None).scaled(factor).unwrap();
        prop_assert!(scaled.button.border >= 1);
        prop_assert!(scaled.button.rounding >= 1);
        prop_assert!(scaled.menu_button.rounding >= 1);
        prop_assert!(scaled.normal_window.padding.x >= 1);
        prop_assert_eq!(scaled.normal_window.footer_padding, Point::ZERO);
        prop_assert_eq!(scaled.contextual_button.border, 0);
    }

    #[test]
    fn scaling_leaves_colors_alone(table in arb_table(), factor in 0.25f64..4.0) {
        let base = build_style(Some(&table));
        let scaled = base.scaled(factor).unwrap();
        for role in StyleColor::ALL {
            prop_assert_eq!(routed(&scaled, role), routed(&base, role));
        }
    }
}
