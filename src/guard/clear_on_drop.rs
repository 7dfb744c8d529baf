//! Owning guard that clears its value when dropped

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::core::clear::{finalize, Clear};

/// Owns a `T` and runs `T::clear` exactly once when dropped
///
/// The guard adds no state of its own. The value is reachable through
/// `Deref`/`DerefMut`, and the clear runs on every way out of the owning
/// scope: normal exit, early return, explicit `drop`, or unwinding.
///
/// There is intentionally no way to take the value back out uncleared.
///
/// ```
/// use autoclear::ClearOnDrop;
///
/// let mut buffer = ClearOnDrop::new(Vec::with_capacity(16));
/// buffer.extend_from_slice(b"scratch");
/// assert_eq!(buffer.len(), 7);
/// // `buffer` is cleared here, before the Vec itself is freed
/// ```
///
/// A type without a `clear` operation cannot be guarded:
///
/// ```compile_fail
/// use autoclear::ClearOnDrop;
///
/// struct NoCleanup;
///
/// let _guard = ClearOnDrop::new(NoCleanup);
/// ```
#[repr(transparent)]
pub struct ClearOnDrop<T: Clear> {
    value: T,
}

impl<T: Clear> ClearOnDrop<T> {
    /// Take ownership of `value`, which will be cleared when the guard drops
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Shared access to the guarded value
    #[inline]
    pub fn get_ref(&self) -> &T {
        &self.value
    }

    /// Exclusive access to the guarded value
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clear> Drop for ClearOnDrop<T> {
    #[inline]
    fn drop(&mut self) {
        finalize(&mut self.value);
    }
}

impl<T: Clear> Deref for ClearOnDrop<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clear> DerefMut for ClearOnDrop<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clear> AsRef<T> for ClearOnDrop<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Clear> AsMut<T> for ClearOnDrop<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clear> From<T> for ClearOnDrop<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clear + Default> Default for ClearOnDrop<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Each clone is an independent instance and is cleared on its own drop
impl<T: Clear + Clone> Clone for ClearOnDrop<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Clear + fmt::Debug> fmt::Debug for ClearOnDrop<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearOnDrop").field(&self.value).finish()
    }
}
