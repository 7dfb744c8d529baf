//! Synchronization utilities for finalizing lock-protected values
//!
//! Clearing goes through exclusive `&mut` access, so no lock is ever taken.
//! The only concern left is poisoning: a value whose lock was poisoned by a
//! panic must still be cleared when its owner is dropped.

use std::sync::{LockResult, PoisonError};

/// Recover the inner value of a poisoned `Mutex::get_mut` result
///
/// Logs a warning when the mutex was poisoned and returns the inner
/// reference either way.
pub fn recover_mutex<T: ?Sized>(result: LockResult<&mut T>) -> &mut T {
    recover(result, "mutex")
}

/// Recover the inner value of a poisoned `RwLock::get_mut` result
///
/// Similar to recover_mutex but for RwLock, which is poisoned when a writer
/// panics while holding the lock.
pub fn recover_rwlock<T: ?Sized>(result: LockResult<&mut T>) -> &mut T {
    recover(result, "RwLock")
}

fn recover<'a, T: ?Sized>(result: LockResult<&'a mut T>, kind: &str) -> &'a mut T {
    result.unwrap_or_else(|poison_err: PoisonError<&'a mut T>| {
        log::warn!(
            "Clearing {} behind a poisoned {} (a panic occurred while holding the lock)",
            std::any::type_name::<T>(),
            kind
        );
        poison_err.into_inner()
    })
}
