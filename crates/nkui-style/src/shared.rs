#![forbid(unsafe_code)]

//! Hot-swappable style handle.
//!
//! [`SharedStyle`] keeps the current [`Style`] behind an [`ArcSwap`]. Readers
//! take a cheap snapshot at the start of a frame and keep using it even if the
//! host publishes a new theme mid-frame; writers replace the whole snapshot
//! atomically.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::style::Style;
use crate::theme::{ThemeId, style_for_theme};

/// Wait-free shared access to the active style.
#[derive(Debug)]
pub struct SharedStyle {
    inner: ArcSwap<Style>,
}

impl SharedStyle {
    pub fn new(style: Style) -> Self {
        Self {
            inner: ArcSwap::from_pointee(style),
        }
    }

    pub fn from_theme(theme: ThemeId) -> Self {
        Self::new(style_for_theme(theme))
    }

    /// Snapshot of the current style.
    pub fn load(&self) -> Arc<Style> {
        self.inner.load_full()
    }

    /// Borrow the current style without bumping the reference count.
    pub fn load_ref(&self) -> arc_swap::Guard<Arc<Style>> {
        self.inner.load()
    }

    /// Publish a new style.
    pub fn store(&self, style: Style) {
        self.inner.store(Arc::new(style));
    }

    /// Rebuild from a built-in theme and publish it.
    pub fn set_theme(&self, theme: ThemeId) {
        tracing::debug!(message = "style.swap", theme = theme.name());
        self.store(style_for_theme(theme));
    }

    /// Derive a new style from the current one and publish it.
    ///
    /// `f` may run more than once if another writer races this one.
    pub fn update(&self, f: impl Fn(&mut Style)) {
        self.inner.rcu(|current| {
            let mut next = Style::clone(current);
            f(&mut next);
            next
        });
    }
}

impl Default for SharedStyle {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl From<Style> for SharedStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
