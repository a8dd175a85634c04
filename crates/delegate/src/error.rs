/// Error type used when an unbound [`Delegate`] is invoked.
///
/// [`Delegate`]: crate::Delegate
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnboundError {
    signature: crate::DelegateSignature,
}

impl UnboundError {
    pub(crate) const fn new(signature: crate::DelegateSignature) -> Self {
        Self { signature }
    }

    /// Gets the signature of the [`Delegate`] that was invoked.
    ///
    /// [`Delegate`]: crate::Delegate
    pub fn signature(&self) -> crate::DelegateSignature {
        self.signature
    }
}

impl core::fmt::Display for UnboundError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "invoked unbound delegate with signature {}",
            self.signature
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnboundError {}
