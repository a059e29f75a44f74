//! Shared heap handle for composite values.
//!
//! `Heap<T>` wraps an `Arc<T>` with a crate-private constructor, so heap
//! values can only be created through `Value` factory methods. Cloning a
//! handle shares the allocation; `Heap::ptr_eq` is the identity test used
//! by `StrictEq`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted handle to an immutable heap value.
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(crate) fn from_string(s: String) -> Self {
        Heap(Arc::from(s))
    }
}

impl<T: ?Sized> Heap<T> {
    /// True if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

// Manual impl: derive would require `T: Clone`, which `str` is not.
impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
