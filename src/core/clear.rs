//! Generic Clear Interface
//!
//! Provides the single operation a type must supply to be cleared
//! automatically at the end of its life. Implementations for the standard
//! containers simply forward to their own `clear` methods.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::OsString;
use std::sync::{Mutex, RwLock};

use crate::core::sync::{recover_mutex, recover_rwlock};

/// Trait for types that know how to reset themselves
///
/// `clear` takes no arguments and returns nothing. Whatever it releases
/// (unlinking from an external structure, resetting bookkeeping, freeing
/// buffers) belongs entirely to the implementing type.
///
/// The trait is object safe, so `Box<dyn Clear>` is itself `Clear`.
pub trait Clear {
    /// Release everything this instance is responsible for
    fn clear(&mut self);
}

/// Run the finalization of a value that is reaching the end of its life
///
/// Both [`ClearOnDrop`](crate::guard::ClearOnDrop) and the
/// [`clear_on_drop!`](crate::clear_on_drop) macro route through here.
#[doc(hidden)]
#[inline]
pub fn finalize<T: Clear + ?Sized>(value: &mut T) {
    log::trace!("clearing {} on drop", std::any::type_name::<T>());
    value.clear();
}

impl<T: Clear + ?Sized> Clear for Box<T> {
    fn clear(&mut self) {
        (**self).clear();
    }
}

impl<T: Clear + ?Sized> Clear for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }
}

impl<T: Clear + ?Sized> Clear for RefCell<T> {
    fn clear(&mut self) {
        self.get_mut().clear();
    }
}

// Exclusive access means no lock is taken; a poisoned lock is recovered
// because finalization still has to happen after a panic.
impl<T: Clear + ?Sized> Clear for Mutex<T> {
    fn clear(&mut self) {
        recover_mutex(self.get_mut()).clear();
    }
}

impl<T: Clear + ?Sized> Clear for RwLock<T> {
    fn clear(&mut self) {
        recover_rwlock(self.get_mut()).clear();
    }
}

impl<T> Clear for Option<T> {
    fn clear(&mut self) {
        *self = None;
    }
}

impl Clear for String {
    fn clear(&mut self) {
        String::clear(self);
    }
}

impl Clear for OsString {
    fn clear(&mut self) {
        OsString::clear(self);
    }
}

macro_rules! forward_clear {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Clear for $ty {
                #[inline]
                fn clear(&mut self) {
                    <$ty>::clear(self);
                }
            }
        )+
    };
}

forward_clear! {
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
}
