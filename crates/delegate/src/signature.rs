/// Describes the argument and result types of a [`Delegate`].
///
/// Formatting a [`DelegateSignature`] produces the function pointer type a bound target would have,
/// such as `fn(i32, i32)` or `fn(&str) -> usize`.
///
/// [`Delegate`]: crate::Delegate
#[derive(Clone, Copy)]
pub struct DelegateSignature {
    arguments: fn() -> &'static str,
    result: fn() -> &'static str,
}

impl DelegateSignature {
    /// Gets the [`DelegateSignature`] for a delegate taking the tuple of arguments `A` and
    /// returning `R`.
    pub const fn of<A, R>() -> Self {
        Self {
            arguments: core::any::type_name::<A>,
            result: core::any::type_name::<R>,
        }
    }

    /// The name of the tuple of argument types, such as `(i32, i32)`.
    pub fn arguments(&self) -> &'static str {
        (self.arguments)()
    }

    /// The name of the result type.
    pub fn result(&self) -> &'static str {
        (self.result)()
    }
}

impl core::fmt::Display for DelegateSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let arguments = self.arguments();

        // Single element tuples are written as `(A0,)`.
        match arguments.strip_suffix(",)") {
            Some(single) => write!(f, "fn{single})")?,
            None => write!(f, "fn{arguments}")?,
        }

        match self.result() {
            "()" => Ok(()),
            result => write!(f, " -> {result}"),
        }
    }
}

impl core::fmt::Debug for DelegateSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("DelegateSignature")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl PartialEq for DelegateSignature {
    fn eq(&self, other: &Self) -> bool {
        self.arguments() == other.arguments() && self.result() == other.result()
    }
}

impl Eq for DelegateSignature {}

impl core::hash::Hash for DelegateSignature {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.arguments().hash(state);
        self.result().hash(state);
    }
}
