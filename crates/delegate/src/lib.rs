//! Allocation-free delegates: values bound to either a free function or a method on a specific
//! instance, later invoked through a single uniform interface.
//!
//! A [`Delegate`] is generic over the tuple of its argument types `A` and its result type `R`. The
//! [`Delegate0`] through [`Delegate9`] aliases spell out the arguments individually, so a
//! delegate taking two `i32`s and returning nothing is a [`Delegate2<i32, i32>`].
//!
//! When a delegate is bound, a stub specialized for the exact target is selected. Invoking the
//! delegate always goes through that stub, so callers never need to know whether a function, a
//! method, or a closure was bound.
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use delegates::Delegate2;
//!
//! struct Accumulator {
//!     total: Cell<i32>,
//! }
//!
//! impl Accumulator {
//!     fn add(&self, a: i32, b: i32) {
//!         self.total.set(self.total.get() + a + b);
//!     }
//! }
//!
//! fn ignore(_: i32, _: i32) {}
//!
//! let accumulator = Accumulator { total: Cell::new(0) };
//! let mut delegate: Delegate2<i32, i32> = Delegate2::new();
//! assert!(delegate.invoke(1, 2).is_err());
//!
//! delegate.bind_method(&accumulator, Accumulator::add);
//! delegate.invoke(10, 70).unwrap();
//! assert_eq!(accumulator.total.get(), 80);
//!
//! delegate.bind_function(ignore);
//! delegate.invoke(1, 1).unwrap();
//! assert_eq!(accumulator.total.get(), 80);
//! ```
//!
//! # Lifetimes
//!
//! A delegate never owns the instance it is bound to. Instead, the instance is borrowed for the
//! lifetime `'a` of the delegate, so the compiler rejects any attempt to invoke a method on an
//! instance that no longer exists.
//!
//! # Thread Safety
//!
//! [`Delegate`]s are neither [`Send`] nor [`Sync`]. Sharing one between threads requires a
//! wrapper providing synchronization.
//!
//! # Feature Flags
//!
//! ## `std`
//!
//! Implements [`std::error::Error`] for [`UnboundError`].
//!
//! - Enables: `alloc`
//! - Enabled by: `default`
//!
//! ## `alloc`
//!
//! Allows closures larger than two pointers to be bound, by moving them into an [`Rc`].
//!
//! [`Rc`]: alloc::rc::Rc

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! with_parameters {
    ($macro:ident) => {
        $macro!((); 0);
        $macro!((a0: A0); 1);
        $macro!((a0: A0, a1: A1); 2);
        $macro!((a0: A0, a1: A1, a2: A2); 3);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3); 4);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4); 5);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5); 6);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6); 7);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7); 8);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8); 9);
    };
}

pub(crate) use with_parameters;

mod bind;
mod callable;
mod error;
mod invoke;
mod raw;
mod signature;

pub use callable::Callable;
pub use error::UnboundError;
pub use invoke::{
    Delegate0, Delegate1, Delegate2, Delegate3, Delegate4, Delegate5, Delegate6, Delegate7,
    Delegate8, Delegate9,
};
pub use signature::DelegateSignature;

use raw::RawDelegate;

/// Indicates what a [`Delegate`] was bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TargetKind {
    /// Bound with `bind_function()`.
    Function,
    /// Bound with `bind_method()`, calling a method on a borrowed instance.
    Method,
    /// Bound with `bind_closure()` or [`bind_callable()`](Delegate::bind_callable()).
    Closure,
}

struct DelegatePhantom<'a> {
    /// Allows a [`Delegate`] to borrow things that live for at least `'a`.
    _lifetime: &'a (),
}

/// A slot that can be bound to a function, a method on a borrowed instance, or a closure, and then
/// invoked with the arguments `A` to produce an `R`.
///
/// A [`Delegate`] is either unbound or bound. Every bind operation replaces the target and the stub
/// used to call it together, so a delegate can never call a method on the instance of a previous
/// binding.
///
/// See the [crate documentation](crate) for an example.
pub struct Delegate<'a, A, R = ()> {
    raw: Option<RawDelegate<A, R>>,
    _marker: core::marker::PhantomData<DelegatePhantom<'a>>,
}

impl<A, R> Default for Delegate<'_, A, R> {
    fn default() -> Self {
        Self::UNBOUND
    }
}

impl<A, R> Delegate<'_, A, R> {
    /// A [`Delegate`] that is not bound to anything.
    pub const UNBOUND: Self = Self {
        raw: None,
        _marker: core::marker::PhantomData,
    };

    /// Creates a new unbound [`Delegate`].
    pub const fn new() -> Self {
        Self::UNBOUND
    }

    /// Returns `true` if this [`Delegate`] is bound to a target.
    pub const fn is_bound(&self) -> bool {
        self.raw.is_some()
    }

    /// Gets what this [`Delegate`] is bound to, or `None` if it is unbound.
    pub fn target_kind(&self) -> Option<TargetKind> {
        self.raw.as_ref().map(RawDelegate::kind)
    }

    /// Gets the [`DelegateSignature`] describing the argument and result types.
    pub const fn signature(&self) -> DelegateSignature {
        DelegateSignature::of::<A, R>()
    }

    /// Removes the current binding, dropping the target. Does nothing if the [`Delegate`] is
    /// already unbound.
    pub fn unbind(&mut self) {
        self.replace(None)
    }

    fn replace(&mut self, raw: Option<RawDelegate<A, R>>) {
        if let Some(previous) = core::mem::replace(&mut self.raw, raw) {
            previous.release();
        }
    }

    #[inline(never)]
    #[cold]
    fn unbound(&self) -> UnboundError {
        UnboundError::new(self.signature())
    }

    /// Calls the bound target with a tuple of `arguments`.
    ///
    /// The `invoke()` methods take each argument separately, and should usually be preferred.
    ///
    /// # Errors
    ///
    /// Returns an [`UnboundError`] if the delegate is not bound to anything.
    pub fn invoke_with(&self, arguments: A) -> Result<R, UnboundError> {
        match &self.raw {
            Some(raw) => Ok(raw.invoke(arguments)),
            None => Err(self.unbound()),
        }
    }
}

impl<A, R> Clone for Delegate<'_, A, R> {
    /// Creates a [`Delegate`] bound to the same target.
    ///
    /// Method bindings of the copy refer to the same instance.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.as_ref().map(RawDelegate::duplicate),
            _marker: core::marker::PhantomData,
        }
    }
}

impl<A, R> core::fmt::Debug for Delegate<'_, A, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(raw) = &self.raw {
            f.debug_struct("Delegate")
                .field("binding", raw)
                .field("signature", &self.signature())
                .finish()
        } else {
            #[derive(Clone, Copy, Debug)]
            struct Unbound;

            f.debug_tuple("Delegate").field(&Unbound).finish()
        }
    }
}

impl<A, R> Drop for Delegate<'_, A, R> {
    fn drop(&mut self) {
        self.unbind()
    }
}
