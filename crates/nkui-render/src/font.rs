#![forbid(unsafe_code)]

//! Font face handles.
//!
//! Rasterization belongs to the host renderer. Styles only need to carry a
//! face around and measure text with it, so [`FontFace`] exposes metrics and
//! nothing else.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Metrics provided by a host font implementation.
pub trait FontFace: Send + Sync + fmt::Debug {
    /// Human readable face name, used in diagnostics.
    fn name(&self) -> &str;

    /// Distance between baselines in pixels.
    fn line_height(&self) -> i32;

    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> i32;
}

/// Shared handle to a [`FontFace`].
///
/// Cloning shares the face. Two handles compare equal only when they point
/// at the same face instance.
#[derive(Clone)]
pub struct Face(Arc<dyn FontFace>);

impl Face {
    pub fn new(face: impl FontFace + 'static) -> Self {
        Self(Arc::new(face))
    }

    /// True when both handles refer to the same face.
    pub fn same_face(&self, other: &Face) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Face {
    type Target = dyn FontFace;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.same_face(other)
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Face").field(&self.0.name()).finish()
    }
}
