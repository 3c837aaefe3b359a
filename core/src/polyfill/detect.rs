use core::{any::type_name, marker::PhantomData};

/// The "no such type" sentinel reported by a failed probe. Uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonesuch {}

/// A type-level function: `Op` applied to `Args`.
///
/// An impl states that the application is well formed and names the type it
/// forms. Where-clauses on the impl are the substitution positions a probe
/// inspects: when they do not hold the probe reports failure.
///
/// ```
/// use sqlweave_core::polyfill::Operation;
///
/// struct AddOp;
///
/// impl<A: core::ops::Add<B>, B> Operation<(A, B)> for AddOp {
///     type Output = A::Output;
/// }
/// ```
pub trait Operation<Args> {
    type Output: ?Sized;
}

/// The type formed by applying `Op` to `Args`.
///
/// Naming this for an ill-formed application is a hard error. Use
/// [`probe!`](crate::probe) to ask without failing.
pub type DetectedT<Op, Args> = <Op as Operation<Args>>::Output;

/// Result of probing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Detection {
    /// Whether the application type-checked.
    pub succeeded: bool,
    /// Name of the formed type, or of [`Nonesuch`] on failure.
    pub output: &'static str,
}

impl Detection {
    /// Output type name when the probe succeeded.
    pub const fn output(&self) -> Option<&'static str> {
        if self.succeeded {
            Some(self.output)
        } else {
            None
        }
    }
}

/// Probe subject for `Op` applied to `Args`. Zero sized.
pub struct Probe<Op, Args>(PhantomData<fn() -> (Op, Args)>);

impl<Op, Args> Probe<Op, Args> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Op, Args> Default for Probe<Op, Args> {
    fn default() -> Self {
        Self::new()
    }
}

/// Picked by method resolution on `&&Probe` when `Op: Operation<Args>` holds.
#[doc(hidden)]
pub trait Detected {
    fn detection(&self) -> Detection;
}

impl<Op: Operation<Args>, Args> Detected for &Probe<Op, Args> {
    fn detection(&self) -> Detection {
        Detection {
            succeeded: true,
            output: type_name::<DetectedT<Op, Args>>(),
        }
    }
}

/// Fallback reached through auto-deref when no [`Detected`] impl applies.
#[doc(hidden)]
pub trait Undetected {
    fn detection(&self) -> Detection;
}

impl<Op, Args> Undetected for Probe<Op, Args> {
    fn detection(&self) -> Detection {
        Detection {
            succeeded: false,
            output: type_name::<Nonesuch>(),
        }
    }
}

/// Probes whether `Op` applies to `Args`, returning a [`Detection`].
///
/// Never fails to compile on a negative answer. The answer is decided where
/// the macro is expanded, so inside generic code it only sees the bounds in
/// scope.
///
/// ```
/// use sqlweave_core::{polyfill::Operation, probe};
///
/// struct AddOp;
/// impl<A: core::ops::Add<B>, B> Operation<(A, B)> for AddOp {
///     type Output = A::Output;
/// }
///
/// let ok = probe!(AddOp, (u8, u8));
/// assert!(ok.succeeded);
/// assert_eq!(ok.output, "u8");
///
/// let bad = probe!(AddOp, (u8, &str));
/// assert!(!bad.succeeded);
/// ```
#[macro_export]
macro_rules! probe {
    ($op:ty, $args:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::polyfill::{Detected as _, Undetected as _};
        (&&$crate::polyfill::Probe::<$op, $args>::new()).detection()
    }};
}

/// `true` when `Op` applies to `Args`.
#[macro_export]
macro_rules! is_detected {
    ($op:ty, $args:ty $(,)?) => {
        $crate::probe!($op, $args).succeeded
    };
}
