//! Scope-exit closures built on the clear capability

use std::fmt;

use crate::core::clear::Clear;
use crate::guard::ClearOnDrop;

/// A closure that runs at most once, the first time it is cleared
pub struct Deferred<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> Deferred<F> {
    /// Wrap `callback` so it runs the first time the value is cleared
    pub const fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// True until the closure has run
    pub fn is_pending(&self) -> bool {
        self.callback.is_some()
    }
}

impl<F: FnOnce()> Clear for Deferred<F> {
    fn clear(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Deferred<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Returns a guard that runs `callback` when dropped
///
/// ```
/// use std::cell::Cell;
///
/// let ran = Cell::new(false);
/// {
///     let _guard = autoclear::defer(|| ran.set(true));
///     assert!(!ran.get());
/// }
/// assert!(ran.get());
/// ```
#[must_use = "the closure runs when the guard is dropped; binding it to `_` drops it immediately"]
pub fn defer<F: FnOnce()>(callback: F) -> ClearOnDrop<Deferred<F>> {
    ClearOnDrop::new(Deferred::new(callback))
}

/// Run a block when the enclosing scope exits
///
/// Several `defer!` blocks in one scope run in reverse order, like drops.
///
/// ```
/// use std::cell::RefCell;
///
/// let order = RefCell::new(Vec::new());
/// {
///     autoclear::defer!(order.borrow_mut().push("first"));
///     autoclear::defer!(order.borrow_mut().push("second"));
/// }
/// assert_eq!(*order.borrow(), ["second", "first"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _deferred = $crate::defer(|| { $($body)*; });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_deferred_runs_once() {
        let calls = Cell::new(0);
        let mut deferred = Deferred::new(|| calls.set(calls.get() + 1));

        assert!(deferred.is_pending());
        deferred.clear();
        deferred.clear();

        assert!(!deferred.is_pending());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_defer_guard_runs_on_drop() {
        let calls = Cell::new(0);
        let guard = defer(|| calls.set(calls.get() + 1));
        assert!(guard.is_pending());
        assert_eq!(calls.get(), 0);

        drop(guard);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_defer_macro_runs_at_scope_end() {
        let calls = Cell::new(0);
        {
            crate::defer!(calls.set(calls.get() + 1));
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_deferred_debug_shows_pending_state() {
        let mut deferred = Deferred::new(|| {});
        assert_eq!(format!("{:?}", deferred), "Deferred { pending: true }");
        deferred.clear();
        assert_eq!(format!("{:?}", deferred), "Deferred { pending: false }");
    }
}
