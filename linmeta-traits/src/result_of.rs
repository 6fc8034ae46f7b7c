//! Query shorthands, one per axis.
//!
//! ```ignore
//! type Buf = VectorForMatrixOf<CompressedMatrix<f64, 4>>;
//! assert_eq!(alignment::<Buf>(), 4);
//! ```

use crate::axis::Alignment;
use crate::capture::{OperandStorage, ReferenceIfNonscalar};

/// Alignment of `T`.
pub const fn alignment<T: Alignment + ?Sized>() -> usize {
    T::ALIGNMENT
}

/// Orientation tag of matrix type `T`.
pub type OrientationOf<T> = <T as crate::axis::Orientation>::Tag;

/// Counter type of `T`.
pub type SizeTypeOf<T> = <T as crate::axis::SizeType>::Size;

/// Declared element type of `T`.
pub type ValueTypeOf<T> = <T as crate::axis::ValueType>::Value;

/// Host scalar type behind `T`.
pub type CpuValueTypeOf<T> = <T as crate::axis::CpuValueType>::Cpu;

/// Vector type compatible with matrix type `T`.
pub type VectorForMatrixOf<T> = <T as crate::axis::VectorForMatrix>::Vector;

/// How an expression holds an operand of type `T`.
pub type OperandStorageOf<'a, T> = <T as OperandStorage>::Stored<'a>;

/// How a generic call binds an argument of type `T`.
pub type ReferenceIfNonscalarOf<'a, T> = <T as ReferenceIfNonscalar>::Passed<'a>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn test_scalar_queries() {
        assert_eq!(TypeId::of::<CpuValueTypeOf<f32>>(), TypeId::of::<f32>());
        assert_eq!(
            TypeId::of::<CpuValueTypeOf<&'static f64>>(),
            TypeId::of::<f64>()
        );
        assert_eq!(
            TypeId::of::<OperandStorageOf<'static, f64>>(),
            TypeId::of::<f64>()
        );
        assert_eq!(
            TypeId::of::<ReferenceIfNonscalarOf<'static, &'static f32>>(),
            TypeId::of::<f32>()
        );
    }
}
