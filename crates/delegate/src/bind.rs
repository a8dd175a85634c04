//! Stubs selected when a [`Delegate`] is bound, translating the uniform invocation signature back
//! into a call to the stored target.

use crate::raw::{RawDelegate, RawDelegateData, RawDelegateVTable};
use crate::{Callable, Delegate, TargetKind};

/// Stub for targets stored [`inline`](RawDelegateData::inline).
unsafe fn invoke_inline<C, A, R>(data: &RawDelegateData, arguments: A) -> R
where
    C: Callable<A, R>,
{
    // SAFETY: `data` contains a `C`.
    let target = unsafe { data.as_ref_inline::<C>() };
    target.call_with(arguments)
}

trait Inline: Clone {
    const VTABLE: &'static RawDelegateVTable;
}

impl<C: Clone> Inline for C {
    const VTABLE: &'static RawDelegateVTable = {
        let clone: unsafe fn(&RawDelegateData) -> RawDelegateData = |data| {
            // SAFETY: `data` contains a `C`.
            let target: &C = unsafe { data.as_ref_inline::<C>() };

            match RawDelegateData::try_from_inline::<C>(target.clone()) {
                Ok(cloned) => cloned,
                Err(_) => unreachable!(),
            }
        };

        let drop: unsafe fn(RawDelegateData) = |data| {
            // SAFETY: `data` contains a `C`.
            let _ = unsafe { data.read::<C>() };

            // `C` is automatically dropped
        };

        let debug: unsafe fn(&RawDelegateData, &mut core::fmt::Formatter) -> core::fmt::Result =
            |_, f| f.write_str(core::any::type_name::<C>());

        &RawDelegateVTable::new(clone, drop, debug)
    };
}

#[cfg(feature = "alloc")]
mod shared {
    use crate::raw::{RawDelegateData, RawDelegateVTable};
    use crate::Callable;
    use alloc::rc::Rc;

    /// Stub for targets stored behind an [`Rc`].
    pub(super) unsafe fn invoke_shared<C, A, R>(data: &RawDelegateData, arguments: A) -> R
    where
        C: Callable<A, R>,
    {
        // SAFETY: `data` contains a `*const C` originating from `Rc::into_raw`.
        let target: &C = unsafe { data.as_by_ref::<C>() };
        target.call_with(arguments)
    }

    pub(super) trait Shared {
        const VTABLE: &'static RawDelegateVTable;
    }

    impl<C> Shared for C {
        const VTABLE: &'static RawDelegateVTable = {
            let clone: unsafe fn(&RawDelegateData) -> RawDelegateData = |data| {
                // SAFETY: `data` contains a `*const C`.
                let target = unsafe { data.pointer } as *const C;

                // SAFETY: `target` originates from `Rc::into_raw`.
                unsafe {
                    Rc::increment_strong_count(target);
                }

                // The copy refers to the same allocation.
                *data
            };

            let drop: unsafe fn(RawDelegateData) = |data| {
                // SAFETY: `data` contains a `*const C`.
                let target = unsafe { data.pointer } as *const C;

                // SAFETY: `target` originates from `Rc::into_raw`.
                let _ = unsafe { Rc::from_raw(target) };

                // `Rc` is automatically dropped
            };

            let debug: unsafe fn(&RawDelegateData, &mut core::fmt::Formatter) -> _ = |data, f| {
                // SAFETY: `data` contains a `*const C`.
                let target = unsafe { data.pointer } as *const C;

                // SAFETY: `target` originates from `Rc::into_raw`.
                let shared = unsafe { Rc::from_raw(target) };

                // Prevent the reference count from changing.
                let shared = core::mem::ManuallyDrop::new(shared);

                f.debug_struct("Rc")
                    .field("address", &Rc::as_ptr(&shared))
                    .field("strong_count", &Rc::strong_count(&shared))
                    .field("type_name", &core::any::type_name::<C>())
                    .finish()
            };

            &RawDelegateVTable::new(clone, drop, debug)
        };
    }
}

#[cfg(not(feature = "alloc"))]
#[inline(never)]
#[cold]
fn target_requires_heap_allocation(layout: core::alloc::Layout) -> ! {
    panic!(
        "closure requires a heap allocation, layout requires {} bytes aligned to {} bytes",
        layout.size(),
        layout.align()
    )
}

impl<'a, A, R> Delegate<'a, A, R> {
    /// Binds the delegate to the given `target`, replacing any previous binding.
    ///
    /// Targets that are too large to be stored inline are moved into an [`Rc`] heap allocation.
    ///
    /// # Panics
    ///
    /// Panics if the `alloc` feature is not enabled and the `target` is too large to store inline.
    ///
    /// [`Rc`]: alloc::rc::Rc
    pub(crate) fn bind_as<C>(&mut self, kind: TargetKind, target: C)
    where
        C: Callable<A, R> + Clone + 'a,
    {
        let raw = match RawDelegateData::try_from_inline::<C>(target) {
            // SAFETY: the stub and the vtable both expect a `C` stored inline.
            Ok(data) => unsafe {
                RawDelegate::new(data, invoke_inline::<C, A, R>, <C as Inline>::VTABLE, kind)
            },
            #[cfg(feature = "alloc")]
            Err(target) => {
                use shared::Shared;

                let data = RawDelegateData::from_ptr(alloc::rc::Rc::into_raw(
                    alloc::rc::Rc::new(target),
                ));

                // SAFETY: the stub and the vtable both expect a `*const C` from `Rc::into_raw`.
                unsafe {
                    RawDelegate::new(
                        data,
                        shared::invoke_shared::<C, A, R>,
                        <C as Shared>::VTABLE,
                        kind,
                    )
                }
            }
            #[cfg(not(feature = "alloc"))]
            Err(_) => target_requires_heap_allocation(core::alloc::Layout::new::<C>()),
        };

        self.replace(Some(raw));
    }

    /// Binds the delegate to an arbitrary [`Callable`] target.
    ///
    /// This is used for targets that are not closures, such as user types implementing
    /// [`Callable`] directly. Prefer the `bind_closure()` methods for closures, as they allow the
    /// types of the closure's parameters to be inferred.
    ///
    /// # Panics
    ///
    /// Panics if the `alloc` feature is not enabled and the `target` is larger than two pointers.
    pub fn bind_callable<C>(&mut self, target: C)
    where
        C: Callable<A, R> + Clone + 'a,
    {
        self.bind_as(TargetKind::Closure, target)
    }
}
