const INLINE_LEN: usize = 2 * core::mem::size_of::<*const ()>();

/// Storage for the target of a bound [`Delegate`].
///
/// A method binding stores the instance reference and the method pointer side by side, which is
/// why the [`inline`] buffer is two pointers wide.
///
/// [`Delegate`]: crate::Delegate
/// [`inline`]: RawDelegateData::inline
#[derive(Clone, Copy)]
pub(crate) union RawDelegateData {
    /// Used for heap allocations holding targets that are too large to store inline.
    pub(crate) pointer: *const (),
    /// Allows storing any value whose size is at most two pointers, and whose alignment is at
    /// most that of a pointer.
    ///
    /// Note that when a struct with padding is stored inline, reading those bytes corresponding to
    /// padding is **undefined behavior**, so the bytes are never compared or inspected.
    pub(crate) inline: core::mem::MaybeUninit<[u8; INLINE_LEN]>,
}

impl RawDelegateData {
    /// Initializes the data with the given raw [`pointer`].
    ///
    /// [`pointer`]: RawDelegateData::pointer
    #[cfg(feature = "alloc")]
    pub(crate) const fn from_ptr<T>(pointer: *const T) -> Self {
        Self {
            pointer: pointer as *const (),
        }
    }

    /// Returns `true` if an instance of `T` can be stored [`inline`].
    ///
    /// [`inline`]: RawDelegateData::inline
    pub(crate) const fn can_store_inline<T>() -> bool {
        core::mem::size_of::<T>() <= INLINE_LEN
            && core::mem::align_of::<T>() <= core::mem::align_of::<Self>()
    }

    /// Attempts to store the given `value` as [`inline`]d data.
    ///
    /// # Errors
    ///
    /// Returns the `value` if [`can_store_inline::<T>()`] returns `false`.
    ///
    /// [`inline`]: RawDelegateData::inline
    /// [`can_store_inline::<T>()`]: RawDelegateData::can_store_inline()
    pub(crate) fn try_from_inline<T>(value: T) -> Result<Self, T> {
        if Self::can_store_inline::<T>() {
            let mut data = Self {
                inline: core::mem::MaybeUninit::uninit(),
            };

            // SAFETY: check for size and alignment occurs above.
            unsafe {
                core::ptr::write(data.inline.as_mut_ptr() as *mut T, value);
            }

            Ok(data)
        } else {
            Err(value)
        }
    }

    fn assert_can_store_inline<T>() {
        assert!(
            Self::can_store_inline::<T>(),
            "reading would result in undefined behavior, {} requires {} bytes aligned to {} bytes",
            core::any::type_name::<T>(),
            core::mem::size_of::<T>(),
            core::mem::align_of::<T>(),
        );
    }

    /// Interprets the [`inline`] data as **containing** a valid instance of `T`.
    ///
    /// # Panics
    ///
    /// Panics if [`can_store_inline::<T>()`] returns `false`.
    ///
    /// # Safety
    ///
    /// The [`inline`] data must actually contain a valid, initialized instance of `T`, originating
    /// from a call to [`try_from_inline()`].
    ///
    /// [`inline`]: RawDelegateData::inline
    /// [`can_store_inline::<T>()`]: RawDelegateData::can_store_inline()
    /// [`try_from_inline()`]: RawDelegateData::try_from_inline()
    pub(crate) unsafe fn as_ref_inline<T>(&self) -> &T {
        Self::assert_can_store_inline::<T>();

        // SAFETY: caller ensures the bytes are a valid, initialized instance of `T`.
        // SAFETY: the `inline` data lives as long as `self` does.
        unsafe { &*(self.inline.as_ptr() as *const T) }
    }

    /// Interprets the [`pointer`] as referring to a valid instance of `T`.
    ///
    /// # Safety
    ///
    /// The data must contain a [`pointer`] to a valid, initialized instance of `T` that outlives
    /// the returned reference.
    ///
    /// [`pointer`]: RawDelegateData::pointer
    #[cfg(feature = "alloc")]
    pub(crate) unsafe fn as_by_ref<T>(&self) -> &T {
        // SAFETY: caller ensures that the contained pointer is valid.
        unsafe { &*(self.pointer as *const T) }
    }

    /// Reads a `T` out of the [`inline`] data, similar to
    /// [`MaybeUninit::assume_init_read()`].
    ///
    /// # Panics
    ///
    /// Panics if [`can_store_inline::<T>()`] returns `false`.
    ///
    /// # Safety
    ///
    /// Callers must ensure that the data contains a valid, initialized instance of `T`, and that
    /// the duplicate produced by reading it is accounted for.
    ///
    /// [`inline`]: RawDelegateData::inline
    /// [`MaybeUninit::assume_init_read()`]: core::mem::MaybeUninit::assume_init_read()
    /// [`can_store_inline::<T>()`]: RawDelegateData::can_store_inline()
    pub(crate) unsafe fn read<T>(&self) -> T {
        Self::assert_can_store_inline::<T>();

        // SAFETY: caller ensures data contains a valid `T`.
        unsafe { core::ptr::read(self.inline.as_ptr() as *const T) }
    }
}

impl core::fmt::Debug for RawDelegateData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Can't read bytes, might be `uninit`.
        f.debug_struct("RawDelegateData").finish_non_exhaustive()
    }
}
