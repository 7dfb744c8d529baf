//! Automatic, exactly-once cleanup at the end of a value's life.
//!
//! Implement [`Clear`] for a type, then either attach the behaviour to the
//! type itself with [`clear_on_drop!`] or wrap instances in [`ClearOnDrop`].

pub mod core;
pub mod guard;
mod macros;

pub use crate::core::clear::Clear;
pub use guard::{
    defer, ClearError, ClearOnDrop, ClearResult, Deferred, Lifecycle, TryClear, TryClearOnDrop,
};
