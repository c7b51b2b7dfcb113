//! Reusable scratch buffers.
//!
//! [`Pooled<T>`] keeps a value's allocation alive between uses. The apply
//! pass fills one scratch [`PropertyBlock`](crate::sink::PropertyBlock) per
//! renderer; releasing it clears the entries but keeps the `Vec` capacity, so
//! steady-state applies do not allocate.
//!
//! # Example
//!
//! ```
//! use overrides_core::pool::Pooled;
//! use overrides_core::sink::{PropertyBlock, PropertySink};
//! use overrides_core::PropertyId;
//!
//! let mut scratch = Pooled::<PropertyBlock>::default();
//! scratch.activate().set_float(PropertyId::from_name("_Alpha"), 0.5);
//! assert_eq!(scratch.inner().len(), 1);
//!
//! scratch.release();
//! assert!(scratch.inner().is_empty());
//! ```

/// Types that can be cleared and reused.
pub trait Poolable {
    /// Create an empty instance.
    fn new_empty() -> Self;

    /// Clear contents, keeping allocated capacity.
    fn reset(&mut self);
}

/// A value that is either in use or cleared and waiting for reuse.
///
/// Not reentrant: a single scratch value serves one writer at a time.
#[derive(Debug)]
pub enum Pooled<T: Poolable> {
    /// Holds data written since the last activation.
    Active(T),
    /// Cleared; allocation retained.
    Pooled(T),
}

impl<T: Poolable> Pooled<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, Self::Pooled(_))
    }

    /// Clear the value and return it to the pool. No-op when already pooled.
    pub fn release(&mut self) {
        if self.is_active() {
            let taken = std::mem::replace(self, Self::Pooled(T::new_empty()));
            if let Self::Active(mut value) = taken {
                value.reset();
                *self = Self::Pooled(value);
            }
        }
    }

    /// Reset the value and mark it in use.
    ///
    /// Always hands out a cleared value, even if it was already active.
    pub fn activate(&mut self) -> &mut T {
        self.release();
        let taken = std::mem::replace(self, Self::Active(T::new_empty()));
        let value = match taken {
            Self::Active(value) | Self::Pooled(value) => value,
        };
        *self = Self::Active(value);
        self.inner_mut()
    }

    pub fn inner(&self) -> &T {
        match self {
            Self::Active(value) | Self::Pooled(value) => value,
        }
    }

    pub fn inner_mut(&mut self) -> &mut T {
        match self {
            Self::Active(value) | Self::Pooled(value) => value,
        }
    }
}

impl<T: Poolable> Default for Pooled<T> {
    fn default() -> Self {
        Self::Pooled(T::new_empty())
    }
}
