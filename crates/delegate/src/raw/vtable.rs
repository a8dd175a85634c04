use crate::raw::RawDelegateData;

/// A table of functions that manage the [`RawDelegateData`] of a bound [`Delegate`].
///
/// Unlike the invocation stub, none of these functions depend on the argument or result types, so
/// a single `'static` table is shared by every delegate bound to the same kind of target.
///
/// [`Delegate`]: crate::Delegate
#[derive(Clone, Copy)]
pub(crate) struct RawDelegateVTable {
    pub(crate) clone: unsafe fn(data: &RawDelegateData) -> RawDelegateData,
    pub(crate) drop: unsafe fn(data: RawDelegateData),
    pub(crate) debug:
        unsafe fn(data: &RawDelegateData, f: *mut core::fmt::Formatter) -> core::fmt::Result,
}

impl RawDelegateVTable {
    /// Creates a new virtual function table from the provided functions.
    ///
    /// # `clone`
    ///
    /// Called when the [`Delegate`] is [`clone`]d, producing data for the copy. The original data
    /// remains valid.
    ///
    /// # `drop`
    ///
    /// Called when the [`Delegate`] is rebound, unbound, or [`drop`]ped. This function is
    /// responsible for dropping the contents of the [`RawDelegateData`].
    ///
    /// # `debug`
    ///
    /// Called when the [`Delegate`] is formatted with the [`Debug`] trait.
    ///
    /// [`Delegate`]: crate::Delegate
    /// [`clone`]: core::clone::Clone::clone()
    /// [`drop`]: core::ops::Drop
    /// [`Debug`]: core::fmt::Debug
    pub(crate) const fn new(
        clone: unsafe fn(data: &RawDelegateData) -> RawDelegateData,
        drop: unsafe fn(data: RawDelegateData),
        debug: unsafe fn(data: &RawDelegateData, f: &mut core::fmt::Formatter) -> core::fmt::Result,
    ) -> Self {
        Self {
            clone,
            drop,
            // Can't store `&mut core::fmt::Formatter` due to `const` requirements.
            // SAFETY: `*mut Formatter` and `&mut Formatter` are ABI compatible.
            debug: unsafe {
                core::mem::transmute::<
                    unsafe fn(&RawDelegateData, &mut core::fmt::Formatter) -> core::fmt::Result,
                    unsafe fn(&RawDelegateData, *mut core::fmt::Formatter) -> core::fmt::Result,
                >(debug)
            },
        }
    }
}
