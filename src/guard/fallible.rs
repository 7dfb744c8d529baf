//! Fallible finalization
//!
//! `Drop` cannot report errors, so a guard around a [`TryClear`] type offers
//! [`TryClearOnDrop::finish`] to observe the outcome. When the guard is simply
//! dropped, the clear still runs exactly once and a failure is logged.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::guard::error::{ClearError, ClearResult};
use crate::guard::lifecycle::Lifecycle;

/// Trait for types whose cleanup can fail
pub trait TryClear {
    /// Error returned when the cleanup could not complete
    type Error: std::error::Error + Send + Sync + 'static;

    /// Release everything this instance is responsible for
    fn try_clear(&mut self) -> Result<(), Self::Error>;
}

/// Owns a `T` and runs `T::try_clear` exactly once, on `finish` or on drop
pub struct TryClearOnDrop<T: TryClear> {
    value: T,
    state: Lifecycle,
}

impl<T: TryClear> TryClearOnDrop<T> {
    /// Take ownership of `value`, which will be cleared on `finish` or drop
    pub const fn new(value: T) -> Self {
        Self {
            value,
            state: Lifecycle::Alive,
        }
    }

    /// Whether the value has been finalized yet
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Shared access to the guarded value
    pub fn get_ref(&self) -> &T {
        &self.value
    }

    /// Exclusive access to the guarded value
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Clear the value now and report the outcome
    ///
    /// Consumes the guard; the subsequent drop does not clear again.
    pub fn finish(mut self) -> ClearResult<()> {
        self.finalize().unwrap_or(Ok(()))
    }

    /// Runs `try_clear` if still alive; `None` when already finalized
    fn finalize(&mut self) -> Option<ClearResult<()>> {
        if !self.state.finalize() {
            return None;
        }

        let type_name = std::any::type_name::<T>();
        log::trace!("clearing {} ({} -> {})", type_name, Lifecycle::Alive, self.state);

        Some(
            self.value
                .try_clear()
                .map_err(|source| ClearError::Failed {
                    type_name,
                    source: Box::new(source),
                }),
        )
    }
}

impl<T: TryClear> Drop for TryClearOnDrop<T> {
    fn drop(&mut self) {
        if let Some(Err(err)) = self.finalize() {
            log::error!("{}", err);
            log::debug!("DEBUG_DETAILS: {:?}", err);
        }
    }
}

impl<T: TryClear> Deref for TryClearOnDrop<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: TryClear> DerefMut for TryClearOnDrop<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: TryClear> From<T> for TryClearOnDrop<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: TryClear + fmt::Debug> fmt::Debug for TryClearOnDrop<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryClearOnDrop")
            .field("value", &self.value)
            .field("state", &self.state)
            .finish()
    }
}
