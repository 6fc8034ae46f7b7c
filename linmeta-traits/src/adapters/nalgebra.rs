//! Rules for `nalgebra` dense and `nalgebra-sparse` containers.
//!
//! Counters are reported as `usize`. Dense containers report the real type
//! underneath their element type, so `DMatrix<Complex<f64>>` has value type
//! `f64`. Sparse matrices report their scalar parameter as declared. Every
//! matrix pairs with `DVector` for matrix-vector results.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CscMatrix, CsrMatrix};

use crate::axis::{ContainerTypes, VectorForMatrix};
use crate::scalar::RealScalar;

impl<T: RealScalar> ContainerTypes for DVector<T> {
    type Size = usize;
    type Value = T::Real;
}

impl<T: RealScalar> ContainerTypes for DMatrix<T> {
    type Size = usize;
    type Value = T::Real;
}

macro_rules! sparse_rules {
    ($($sparse:ident),*) => {
        $(
            impl<T> ContainerTypes for $sparse<T> {
                type Size = usize;
                type Value = T;
            }

            impl<T> VectorForMatrix for $sparse<T> {
                type Vector = DVector<T>;
            }
        )*
    };
}

sparse_rules!(CsrMatrix, CscMatrix, CooMatrix);

impl<T> VectorForMatrix for DMatrix<T> {
    type Vector = DVector<T>;
}

crate::capture_by_reference! {
    impl[T] DVector<T>;
    impl[T] DMatrix<T>;
    impl[T] CsrMatrix<T>;
    impl[T] CscMatrix<T>;
    impl[T] CooMatrix<T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_of::{SizeTypeOf, ValueTypeOf, VectorForMatrixOf};
    use num_complex::Complex64;
    use std::any::TypeId;

    fn assert_same<A: 'static, B: 'static>() {
        assert_eq!(
            TypeId::of::<A>(),
            TypeId::of::<B>(),
            "types should be the same"
        );
    }

    #[test]
    fn test_dense_value_type_is_real() {
        assert_same::<ValueTypeOf<DMatrix<f32>>, f32>();
        assert_same::<ValueTypeOf<DVector<f64>>, f64>();
        assert_same::<ValueTypeOf<DMatrix<Complex64>>, f64>();
    }

    #[test]
    fn test_sparse_value_type_is_declared_scalar() {
        assert_same::<ValueTypeOf<CsrMatrix<Complex64>>, Complex64>();
        assert_same::<ValueTypeOf<CooMatrix<f32>>, f32>();
    }

    #[test]
    fn test_size_type_is_usize() {
        assert_same::<SizeTypeOf<DMatrix<f64>>, usize>();
        assert_same::<SizeTypeOf<CscMatrix<f64>>, usize>();
        assert_same::<SizeTypeOf<&'static DVector<f32>>, usize>();
    }

    #[test]
    fn test_vector_for_matrix() {
        assert_same::<VectorForMatrixOf<DMatrix<f64>>, DVector<f64>>();
        assert_same::<VectorForMatrixOf<CsrMatrix<f32>>, DVector<f32>>();
        assert_same::<VectorForMatrixOf<CooMatrix<f64>>, DVector<f64>>();
    }
}
