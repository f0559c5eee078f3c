//! Property cells with change detection.
//!
//! Widget state that drives re-layout (styles, spacing, bounds) is kept in
//! [`Property`] cells. A setter reports whether the value actually changed,
//! which lets the owner decide whether to invalidate layout or emit a signal.
//!
//! # Example
//!
//! ```
//! use horizon_pager_core::Property;
//!
//! let height = Property::new(42.0_f32);
//! assert!(!height.set(42.0));
//! assert_eq!(height.replace(48.0), Some(42.0));
//! assert_eq!(height.get(), 48.0);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A lock-protected value whose setters report whether anything changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the stored value. Styles are read through [`with`](Self::with)
    /// when only one field is needed.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Mutate the value in place without change detection.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.value.write())
    }

    /// Overwrite the value. The caller has already diffed old against new.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value` unless it equals the current one. Returns whether it was stored.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.value.write();
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Like [`set`](Self::set), handing back the value that was displaced.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut slot = self.value.write();
        (*slot != value).then(|| std::mem::replace(&mut *slot, value))
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Property").field(value).finish())
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);
