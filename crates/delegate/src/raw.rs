//! Type-erased storage backing a bound [`Delegate`].
//!
//! [`Delegate`]: crate::Delegate

mod data;
mod vtable;

pub(crate) use data::RawDelegateData;
pub(crate) use vtable::RawDelegateVTable;

/// Uniform signature shared by every stub invoking a target with the arguments `A`.
pub(crate) type RawDelegateInvoke<A, R> = unsafe fn(data: &RawDelegateData, arguments: A) -> R;

/// The binding of a [`Delegate`]: its target, the stub used to call it, and the functions used to
/// manage it.
///
/// These are always replaced together.
///
/// [`Delegate`]: crate::Delegate
pub(crate) struct RawDelegate<A, R> {
    data: RawDelegateData,
    invoke: RawDelegateInvoke<A, R>,
    vtable: &'static RawDelegateVTable,
    kind: crate::TargetKind,
}

impl<A, R> RawDelegate<A, R> {
    /// Creates a new [`RawDelegate`].
    ///
    /// # Safety
    ///
    /// The `invoke` stub and every function in the `vtable` must expect the exact kind of target
    /// stored in `data`.
    pub(crate) const unsafe fn new(
        data: RawDelegateData,
        invoke: RawDelegateInvoke<A, R>,
        vtable: &'static RawDelegateVTable,
        kind: crate::TargetKind,
    ) -> Self {
        Self {
            data,
            invoke,
            vtable,
            kind,
        }
    }

    pub(crate) fn kind(&self) -> crate::TargetKind {
        self.kind
    }

    /// Calls the target with the given `arguments`.
    pub(crate) fn invoke(&self, arguments: A) -> R {
        // SAFETY: `invoke` expects `data`, as required by `new()`.
        unsafe { (self.invoke)(&self.data, arguments) }
    }

    /// Produces an independent copy of this binding.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            // SAFETY: `clone` expects `data`, as required by `new()`.
            data: unsafe { (self.vtable.clone)(&self.data) },
            invoke: self.invoke,
            vtable: self.vtable,
            kind: self.kind,
        }
    }

    /// Drops the target.
    pub(crate) fn release(self) {
        // SAFETY: `self` is consumed, so `data` is never used again.
        unsafe { (self.vtable.drop)(self.data) }
    }
}

impl<A, R> core::fmt::Debug for RawDelegate<A, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Target<'a>(&'a RawDelegateData, &'static RawDelegateVTable);

        impl core::fmt::Debug for Target<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                // SAFETY: `debug` expects the data, as required by `RawDelegate::new()`.
                unsafe { (self.1.debug)(self.0, f) }
            }
        }

        f.debug_struct("RawDelegate")
            .field("kind", &self.kind)
            .field("target", &Target(&self.data, self.vtable))
            .finish()
    }
}
