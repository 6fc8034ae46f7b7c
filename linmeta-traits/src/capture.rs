//! Capture discipline for values embedded in expressions and generic calls.
//!
//! Two parallel axes decide whether a value is held by reference or copied:
//! - [`OperandStorage`]: how an expression stores one of its operands
//! - [`ReferenceIfNonscalar`]: how any other generic call site binds an argument
//!
//! Non-scalar shapes are captured by reference (zero copy, the borrow keeps
//! the object alive). Native scalars are captured by value, so an expression
//! built from a scalar temporary never refers to it.
//!
//! The two axes must agree for every type. Register shapes through
//! [`capture_by_reference!`](crate::capture_by_reference) and
//! [`capture_by_value!`](crate::capture_by_value), which always implement
//! both.

/// How a value is held once captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureMode {
    ByReference,
    ByValue,
}

/// Storage of a value used as an expression operand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be captured as an expression operand",
    label = "no operand storage rule for this type",
    note = "register the shape with `capture_by_reference!` or `capture_by_value!`"
)]
pub trait OperandStorage {
    const MODE: CaptureMode;

    /// The form held inside an expression.
    type Stored<'a>: Copy
    where
        Self: 'a;

    fn store(&self) -> Self::Stored<'_>;
}

/// Binding of a value passed to a generic call: by reference unless scalar.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound as a call argument",
    label = "no reference-or-value rule for this type",
    note = "register the shape with `capture_by_reference!` or `capture_by_value!`"
)]
pub trait ReferenceIfNonscalar {
    const MODE: CaptureMode;

    /// The form passed on to the callee.
    type Passed<'a>: Copy
    where
        Self: 'a;

    fn pass(&self) -> Self::Passed<'_>;
}

impl<T: OperandStorage + ?Sized> OperandStorage for &T {
    const MODE: CaptureMode = T::MODE;
    type Stored<'a> = T::Stored<'a> where Self: 'a;

    #[inline(always)]
    fn store(&self) -> Self::Stored<'_> {
        (**self).store()
    }
}

impl<T: ReferenceIfNonscalar + ?Sized> ReferenceIfNonscalar for &T {
    const MODE: CaptureMode = T::MODE;
    type Passed<'a> = T::Passed<'a> where Self: 'a;

    #[inline(always)]
    fn pass(&self) -> Self::Passed<'_> {
        (**self).pass()
    }
}

/// Registers shapes as captured by reference on both capture axes.
///
/// ```ignore
/// capture_by_reference! {
///     impl[S, const A: usize] Vector<S, A>;
///     impl[T] VectorRange<T>;
/// }
/// ```
#[macro_export]
macro_rules! capture_by_reference {
    ($(impl[$($gen:tt)*] $ty:ty;)*) => {
        $(
            impl<$($gen)*> $crate::capture::OperandStorage for $ty {
                const MODE: $crate::capture::CaptureMode = $crate::capture::CaptureMode::ByReference;
                type Stored<'a> = &'a Self where Self: 'a;

                #[inline(always)]
                fn store(&self) -> &Self {
                    self
                }
            }

            impl<$($gen)*> $crate::capture::ReferenceIfNonscalar for $ty {
                const MODE: $crate::capture::CaptureMode = $crate::capture::CaptureMode::ByReference;
                type Passed<'a> = &'a Self where Self: 'a;

                #[inline(always)]
                fn pass(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

/// Registers `Copy` scalar-like types as captured by value on both capture
/// axes.
#[macro_export]
macro_rules! capture_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::capture::OperandStorage for $ty {
                const MODE: $crate::capture::CaptureMode = $crate::capture::CaptureMode::ByValue;
                type Stored<'a> = $ty;

                #[inline(always)]
                fn store(&self) -> $ty {
                    *self
                }
            }

            impl $crate::capture::ReferenceIfNonscalar for $ty {
                const MODE: $crate::capture::CaptureMode = $crate::capture::CaptureMode::ByValue;
                type Passed<'a> = $ty;

                #[inline(always)]
                fn pass(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

capture_by_value!(f32, f64);
