#![forbid(unsafe_code)]

//! Metric scaling for high-density displays.
//!
//! Every padding, spacing, size, border, rounding and bar metric of a
//! [`Style`] is multiplied by the factor and rounded to the nearest pixel.
//! A metric that was non-zero never collapses to zero. Colors, symbols and
//! hooks are left alone.

use nkui_render::Point;

use crate::error::{Result, StyleError};
use crate::style::Style;
use crate::widget::{
    Button, Chart, Combo, Edit, Progress, Property, Scrollbar, Selectable, Slider, Tab, Text,
    Toggle, Window, WindowHeader,
};

fn scale_i32(v: i32, factor: f64) -> i32 {
    if v == 0 {
        return 0;
    }
    let scaled = (f64::from(v) * factor).round();
    let scaled = scaled.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    if scaled == 0 { v.signum() } else { scaled }
}

fn scale_u16(v: u16, factor: f64) -> u16 {
    if v == 0 {
        return 0;
    }
    let scaled = (f64::from(v) * factor).round().clamp(1.0, f64::from(u16::MAX));
    scaled as u16
}

fn scale_point(p: Point, factor: f64) -> Point {
    Point::new(scale_i32(p.x, factor), scale_i32(p.y, factor))
}

/// Types whose pixel metrics can be scaled in place.
pub trait Scale {
    /// Multiply metrics by `factor`. Callers pass a finite, positive factor.
    fn scale_by(&mut self, factor: f64);
}

impl Scale for Text {
    fn scale_by(&mut self, f: f64) {
        self.padding = scale_point(self.padding, f);
    }
}

impl Scale for Button {
    fn scale_by(&mut self, f: f64) {
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
        self.image_padding = scale_point(self.image_padding, f);
        self.touch_padding = scale_point(self.touch_padding, f);
    }
}

impl Scale for Toggle {
    fn scale_by(&mut self, f: f64) {
        self.padding = scale_point(self.padding, f);
        self.touch_padding = scale_point(self.touch_padding, f);
    }
}

impl Scale for Selectable {
    fn scale_by(&mut self, f: f64) {
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
        self.touch_padding = scale_point(self.touch_padding, f);
    }
}

impl Scale for Slider {
    fn scale_by(&mut self, f: f64) {
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.bar_height = scale_i32(self.bar_height, f);
        self.padding = scale_point(self.padding, f);
        self.spacing = scale_point(self.spacing, f);
        self.cursor_size = scale_point(self.cursor_size, f);
        self.inc_button.scale_by(f);
        self.dec_button.scale_by(f);
    }
}

impl Scale for Progress {
    fn scale_by(&mut self, f: f64) {
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
    }
}

impl Scale for Scrollbar {
    fn scale_by(&mut self, f: f64) {
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
        self.inc_button.scale_by(f);
        self.dec_button.scale_by(f);
    }
}

impl Scale for Edit {
    fn scale_by(&mut self, f: f64) {
        self.scrollbar.scale_by(f);
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.cursor_size = scale_i32(self.cursor_size, f);
        self.scrollbar_size = scale_point(self.scrollbar_size, f);
        self.padding = scale_point(self.padding, f);
        self.row_padding = scale_i32(self.row_padding, f);
    }
}

impl Scale for Property {
    fn scale_by(&mut self, f: f64) {
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
        self.edit.scale_by(f);
        self.inc_button.scale_by(f);
        self.dec_button.scale_by(f);
    }
}

impl Scale for Chart {
    fn scale_by(&mut self, f: f64) {
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
    }
}

impl Scale for Combo {
    fn scale_by(&mut self, f: f64) {
        self.button.scale_by(f);
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.content_padding = scale_point(self.content_padding, f);
        self.button_padding = scale_point(self.button_padding, f);
        self.spacing = scale_point(self.spacing, f);
    }
}

impl Scale for Tab {
    fn scale_by(&mut self, f: f64) {
        self.tab_button.scale_by(f);
        self.node_button.scale_by(f);
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.padding = scale_point(self.padding, f);
        self.spacing = scale_point(self.spacing, f);
        self.indent = scale_i32(self.indent, f);
    }
}

impl Scale for WindowHeader {
    fn scale_by(&mut self, f: f64) {
        self.close_button.scale_by(f);
        self.minimize_button.scale_by(f);
        self.padding = scale_point(self.padding, f);
        self.label_padding = scale_point(self.label_padding, f);
        self.spacing = scale_point(self.spacing, f);
    }
}

impl Scale for Window {
    fn scale_by(&mut self, f: f64) {
        self.header.scale_by(f);
        self.footer_padding = scale_point(self.footer_padding, f);
        self.border = scale_i32(self.border, f);
        self.rounding = scale_u16(self.rounding, f);
        self.scaler_size = scale_point(self.scaler_size, f);
        self.padding = scale_point(self.padding, f);
        self.spacing = scale_point(self.spacing, f);
        self.scrollbar_size = scale_point(self.scrollbar_size, f);
        self.min_size = scale_point(self.min_size, f);
    }
}

impl Scale for Style {
    fn scale_by(&mut self, f: f64) {
        self.text.scale_by(f);
        self.button.scale_by(f);
        self.contextual_button.scale_by(f);
        self.menu_button.scale_by(f);
        self.option.scale_by(f);
        self.checkbox.scale_by(f);
        self.selectable.scale_by(f);
        self.slider.scale_by(f);
        self.progress.scale_by(f);
        self.property.scale_by(f);
        self.edit.scale_by(f);
        self.scrollh.scale_by(f);
        self.scrollv.scale_by(f);
        self.tab.scale_by(f);
        self.combo.scale_by(f);
        self.chart.scale_by(f);
        self.normal_window.scale_by(f);
        self.menu_window.scale_by(f);
        self.tooltip_window.scale_by(f);
        self.combo_window.scale_by(f);
        self.contextual_window.scale_by(f);
        self.group_window.scale_by(f);
    }
}

impl Style {
    /// Scale every metric by `factor` in place.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidScale`] when `factor` is not finite and positive.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(StyleError::InvalidScale(factor));
        }
        if factor != 1.0 {
            tracing::debug!(message = "style.scale", factor);
            self.scale_by(factor);
        }
        Ok(())
    }

    /// Scaled copy of this style.
    pub fn scaled(&self, factor: f64) -> Result<Style> {
        let mut style = self.clone();
        style.scale(factor)?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::build_style;

    #[test]
    fn rounding_rules() {
        assert_eq!(scale_i32(0, 3.0), 0);
        assert_eq!(scale_i32(4, 1.5), 6);
        assert_eq!(scale_i32(3, 1.5), 5);
        assert_eq!(scale_i32(1, 0.1), 1);
        assert_eq!(scale_i32(-2, 0.1), -1);
        assert_eq!(scale_u16(4, 0.5), 2);
        assert_eq!(scale_u16(1, 0.2), 1);
        assert_eq!(scale_u16(0, 10.0), 0);
        assert_eq!(scale_u16(u16::MAX, 2.0), u16::MAX);
    }

    #[test]
    fn identity_factor_is_noop() {
        let style = build_style(None);
        assert_eq!(style.scaled(1.0), Ok(style.clone()));
    }

    #[test]
    fn rejects_bad_factors() {
        let mut style = build_style(None);
        assert_eq!(style.scale(0.0), Err(StyleError::InvalidScale(0.0)));
        assert_eq!(style.scale(-2.0), Err(StyleError::InvalidScale(-2.0)));
        assert!(style.scale(f64::NAN).is_err());
        assert!(style.scale(f64::INFINITY).is_err());
        assert_eq!(style, build_style(None));
    }

    #[test]
    fn half_scale_keeps_thin_borders() {
        let style = build_style(None).scaled(0.5).unwrap();
        assert_eq!(style.button.border, 1);
        assert_eq!(style.button.rounding, 2);
        assert_eq!(style.normal_window.border, 1);
        assert_eq!(style.text.padding, Point::splat(2));
        assert_eq!(style.button.image_padding, Point::ZERO);
    }
}
