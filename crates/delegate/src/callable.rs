/// A target that can be called with a tuple of arguments `A`, producing an `R`.
///
/// This trait is implemented for every closure and function taking up to nine arguments, and
/// allows a [`Delegate`] to store and call its target without knowing how many arguments it
/// takes. It can also be implemented manually and bound with [`Delegate::bind_callable()`].
///
/// # Example
///
/// ```
/// use delegates::{Callable, Delegate};
///
/// #[derive(Clone, Debug)]
/// struct Scale(i64);
///
/// impl Callable<(i64,), i64> for Scale {
///     fn call_with(&self, (value,): (i64,)) -> i64 {
///         value * self.0
///     }
/// }
///
/// let mut delegate: Delegate<(i64,), i64> = Delegate::new();
/// delegate.bind_callable(Scale(3));
/// assert_eq!(delegate.invoke(5), Ok(15));
/// ```
///
/// [`Delegate`]: crate::Delegate
/// [`Delegate::bind_callable()`]: crate::Delegate::bind_callable()
pub trait Callable<A, R> {
    /// Calls the target, moving each of the `arguments` into it.
    fn call_with(&self, arguments: A) -> R;
}

macro_rules! define_callable {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        impl<F, $($parameter,)* R> Callable<($($parameter,)*), R> for F
        where
            F: Fn($($parameter),*) -> R,
        {
            #[inline]
            fn call_with(&self, ($($argument,)*): ($($parameter,)*)) -> R {
                (self)($($argument),*)
            }
        }
    };
}

crate::with_parameters!(define_callable);
