use crate::{Delegate, TargetKind, UnboundError};

macro_rules! define_arity {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        paste::paste! {
            /// A [`Delegate`] with each of its argument types listed separately.
            pub type [<Delegate $number>]<'a, $($parameter,)* R = ()> =
                Delegate<'a, ($($parameter,)*), R>;
        }

        /// Binding and invoking with a fixed number of arguments.
        impl<'a, $($parameter,)* R> Delegate<'a, ($($parameter,)*), R> {
            /// Binds the delegate to a free function, replacing any previous binding.
            ///
            /// The function is stored inline, so this never allocates.
            pub fn bind_function(&mut self, target: fn($($parameter),*) -> R)
            where
                $($parameter: 'a,)*
                R: 'a,
            {
                self.bind_as(TargetKind::Function, target)
            }

            /// Binds the delegate to a `method` called on the given `instance`, replacing any
            /// previous binding.
            ///
            /// The `instance` is borrowed for the lifetime `'a` of the delegate, so it is
            /// guaranteed to outlive every invocation. Since [`Delegate`]s can be cloned, the
            /// `method` only receives a shared reference; any state it modifies should be stored
            /// in a [`Cell`] or [`RefCell`].
            ///
            /// The instance reference and the method are stored inline, so this never allocates.
            ///
            /// [`Cell`]: core::cell::Cell
            /// [`RefCell`]: core::cell::RefCell
            pub fn bind_method<T>(&mut self, instance: &'a T, method: fn(&T $(, $parameter)*) -> R)
            where
                $($parameter: 'a,)*
                R: 'a,
            {
                self.bind_as(
                    TargetKind::Method,
                    move |$($argument: $parameter),*| method(instance $(, $argument)*),
                )
            }

            /// Binds the delegate to a closure, replacing any previous binding.
            ///
            /// Closures capturing at most two pointers worth of data are stored inline. Larger
            /// closures are moved into an [`Rc`] heap allocation, which is shared between clones
            /// of the delegate.
            ///
            /// # Panics
            ///
            /// Panics if the `alloc` feature is not enabled and the closure is too large to be
            /// stored inline.
            ///
            /// [`Rc`]: alloc::rc::Rc
            pub fn bind_closure<C>(&mut self, target: C)
            where
                C: Fn($($parameter),*) -> R + Clone + 'a,
            {
                self.bind_as(TargetKind::Closure, target)
            }

            /// Calls the bound target, moving the arguments into it and returning its result.
            ///
            /// # Errors
            ///
            /// Returns an [`UnboundError`] if the delegate is not bound to anything.
            #[allow(clippy::too_many_arguments)]
            pub fn invoke(&self $(, $argument: $parameter)*) -> Result<R, UnboundError> {
                self.invoke_with(($($argument,)*))
            }
        }
    };
}

crate::with_parameters!(define_arity);
