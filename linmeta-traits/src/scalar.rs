//! Scalar type bounds shared by the axes.

use num_complex::Complex;

/// Native numeric types that live in host memory.
///
/// These are the base cases of [`CpuValueType`](crate::CpuValueType): every
/// chain of wrappers, views and expressions ends in one of them. Complex
/// element types are intentionally not host scalars.
pub trait HostScalar:
    num_traits::Float + Default + std::fmt::Debug + Send + Sync + 'static
{
}

impl HostScalar for f32 {}
impl HostScalar for f64 {}

/// Maps an element type to the real type underneath it.
///
/// Real types map to themselves, `Complex<T>` maps to `T`. Used by adapter
/// rules for libraries that report the real element type of a container.
pub trait RealScalar {
    type Real;
}

impl RealScalar for f32 {
    type Real = f32;
}

impl RealScalar for f64 {
    type Real = f64;
}

impl<T: num_traits::Float> RealScalar for Complex<T> {
    type Real = T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};
    use std::any::TypeId;

    fn assert_host_scalar<T: HostScalar>() {}

    fn real_of<T: RealScalar>() -> TypeId
    where
        T::Real: 'static,
    {
        TypeId::of::<T::Real>()
    }

    #[test]
    fn test_native_host_scalars() {
        assert_host_scalar::<f32>();
        assert_host_scalar::<f64>();
    }

    #[test]
    fn test_real_scalar_of_real() {
        assert_eq!(real_of::<f32>(), TypeId::of::<f32>());
        assert_eq!(real_of::<f64>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_real_scalar_of_complex() {
        assert_eq!(real_of::<Complex32>(), TypeId::of::<f32>());
        assert_eq!(real_of::<Complex64>(), TypeId::of::<f64>());
    }
}
