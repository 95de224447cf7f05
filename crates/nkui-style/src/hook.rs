#![forbid(unsafe_code)]

//! Custom draw hooks.
//!
//! A style record may carry callables the renderer invokes instead of (or
//! around) its default drawing. [`Hook`] wraps them in an `Arc` so records
//! stay cheap to clone and comparable.

use std::fmt;
use std::sync::Arc;

use nkui_render::Buffer;

/// Hook signature for `draw_begin` / `draw_end` slots.
pub type BufferFn = dyn Fn(&mut Buffer) + Send + Sync;

/// Shared handle to a draw callback.
///
/// Equality is identity: two hooks are equal only when they share the same
/// callable.
pub struct Hook<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Hook<F> {
    pub fn new(f: Arc<F>) -> Self {
        Self(f)
    }

    /// Borrow the wrapped callable.
    #[inline]
    pub fn get(&self) -> &F {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Hook<BufferFn> {
    /// Wrap a buffer callback.
    pub fn from_fn(f: impl Fn(&mut Buffer) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, buf: &mut Buffer) {
        (self.0)(buf)
    }
}

impl<F: ?Sized> Clone for Hook<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> PartialEq for Hook<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<F: ?Sized> fmt::Debug for Hook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Run an optional buffer hook.
pub(crate) fn run(hook: &Option<Hook<BufferFn>>, buf: &mut Buffer) {
    if let Some(hook) = hook {
        hook.call(buf);
    }
}
