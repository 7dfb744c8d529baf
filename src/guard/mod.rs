//! Clear-on-Drop Guards
//!
//! Wrappers that own a value and finalize it when their own life ends. The
//! finalization happens inside the guard's drop, before the owned value's
//! fields are torn down, on every exit path including unwinding.
//!
//! - [`ClearOnDrop`] runs [`Clear::clear`](crate::Clear::clear) once.
//! - [`TryClearOnDrop`] runs [`TryClear::try_clear`] once and can report
//!   the outcome through [`TryClearOnDrop::finish`].
//! - [`defer`] wraps a closure so it runs when the guard drops.
//!
//! A type that should clear itself without being wrapped uses the
//! [`clear_on_drop!`](crate::clear_on_drop) macro instead.
//!
//! # Panics
//!
//! A `clear` that panics while the thread is already unwinding aborts the
//! process, as with any destructor.

mod clear_on_drop;
mod defer;
mod error;
mod fallible;
mod lifecycle;

pub use clear_on_drop::ClearOnDrop;
pub use defer::{defer, Deferred};
pub use error::{BoxedClearError, ClearError, ClearResult};
pub use fallible::{TryClear, TryClearOnDrop};
pub use lifecycle::Lifecycle;
