//! The form value a slider mirrors its state into.
//!
//! In a page this is the hidden `<input>` the widget wraps; its string is what
//! gets submitted. [`FormValue`] is a cheap, cloneable handle to that string:
//! the host keeps one clone to read (or to seed an initial value), the slider
//! keeps another and overwrites it on every value change.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Shared handle to a bound form string.
#[derive(Clone, Default)]
pub struct FormValue {
    inner: Arc<RwLock<String>>,
}

impl FormValue {
    /// Creates a form value holding `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial.into())),
        }
    }

    /// Returns a copy of the current string.
    pub fn get(&self) -> String {
        self.inner.read().clone()
    }

    /// Runs `f` against the current string without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.inner.read().as_str())
    }

    /// Replaces the current string.
    pub fn set(&self, value: impl Into<String>) {
        *self.inner.write() = value.into();
    }

    /// Returns `true` if both handles point at the same form value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FormValue").field(&*self.inner.read()).finish()
    }
}
