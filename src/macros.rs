/// Make a type clear itself whenever an instance is dropped
///
/// Generates `impl Drop` that calls the type's own [`Clear::clear`](crate::Clear::clear)
/// through static dispatch. The call runs before any of the type's fields
/// are dropped, so `clear` still sees the whole value.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use autoclear::{clear_on_drop, Clear};
///
/// struct Session {
///     closed: Rc<Cell<u32>>,
/// }
///
/// impl Clear for Session {
///     fn clear(&mut self) {
///         self.closed.set(self.closed.get() + 1);
///     }
/// }
///
/// clear_on_drop!(Session);
///
/// let closed = Rc::new(Cell::new(0));
/// drop(Session { closed: Rc::clone(&closed) });
/// assert_eq!(closed.get(), 1);
/// ```
///
/// Generic types list their parameters, lifetimes and const parameters
/// included. The `Drop` impl has to repeat the struct's own bounds, if any.
/// Bounds that contain `<` or `>` belong in the `where` clause:
///
/// ```
/// use autoclear::{clear_on_drop, Clear};
///
/// struct Slots<T: Copy> {
///     items: Vec<T>,
/// }
///
/// impl<T: Copy> Clear for Slots<T> {
///     fn clear(&mut self) {
///         self.items.clear();
///     }
/// }
///
/// clear_on_drop!(impl<T> Slots<T> where T: Copy);
/// ```
///
/// A type that does not implement `Clear` fails to build:
///
/// ```compile_fail
/// use autoclear::clear_on_drop;
///
/// struct Forgetful;
///
/// clear_on_drop!(Forgetful);
/// ```
///
/// The generated `Drop` impl means fields can no longer be moved out of the
/// value by destructuring.
#[macro_export]
macro_rules! clear_on_drop {
    (@generics [$($gen:tt)*] > $ty:ty $(where $($bound:tt)+)?) => {
        impl<$($gen)*> ::core::ops::Drop for $ty $(where $($bound)+)? {
            fn drop(&mut self) {
                $crate::core::clear::finalize(self);
            }
        }
    };
    (@generics [$($gen:tt)*] $next:tt $($rest:tt)*) => {
        $crate::clear_on_drop!(@generics [$($gen)* $next] $($rest)*);
    };
    (impl < $($rest:tt)+) => {
        $crate::clear_on_drop!(@generics [] $($rest)+);
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::ops::Drop for $ty {
                fn drop(&mut self) {
                    $crate::core::clear::finalize(self);
                }
            }
        )+
    };
}
