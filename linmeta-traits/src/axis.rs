//! Property axes resolved at compile time.
//!
//! Each axis is one trait. A shape takes part in an axis by implementing the
//! trait, either with a concrete answer (storage shapes) or by forwarding to
//! the shape it wraps (views, expressions, `&T`). Querying an axis on a type
//! without a rule fails to compile with the axis-specific message from the
//! trait's `on_unimplemented` diagnostic.

use crate::orientation::OrientationTag;
use crate::scalar::HostScalar;

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Storage alignment granularity of a vector or matrix.
///
/// Rules exist for dense vectors, dense matrices, their views, vector
/// expressions and matrix transposes. Sparse matrices have no alignment.
#[diagnostic::on_unimplemented(
    message = "argument provided is not a vector or a matrix: `{Self}` has no alignment",
    label = "not a vector or a matrix",
    note = "alignment is defined for dense vectors, dense matrices, their views and expressions"
)]
pub trait Alignment {
    const ALIGNMENT: usize;
}

impl<T: Alignment + ?Sized> Alignment for &T {
    const ALIGNMENT: usize = T::ALIGNMENT;
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Storage orientation of a dense matrix.
///
/// A transposed matrix expression reports the orientation of the matrix it
/// reads from, unchanged: the tag describes the buffer, not the logical
/// operand.
#[diagnostic::on_unimplemented(
    message = "argument provided is not a matrix: `{Self}` has no orientation",
    label = "not a matrix",
    note = "orientation is defined for dense matrices, their views and transposes"
)]
pub trait Orientation {
    type Tag: OrientationTag;
}

impl<T: Orientation + ?Sized> Orientation for &T {
    type Tag = T::Tag;
}

// ---------------------------------------------------------------------------
// Declared container types: SizeType and ValueType
// ---------------------------------------------------------------------------

/// Types a container declares about itself.
///
/// Built-in shapes declare these directly. Adapter rules declare them on
/// behalf of third-party containers, overriding whatever the library uses
/// internally so that generic code sees one counter type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare its size and value types",
    label = "not a registered container",
    note = "implement `ContainerTypes` for the shape, or enable the adapter feature for its library"
)]
pub trait ContainerTypes {
    /// Counter type for dimensions and indices.
    type Size;
    /// Declared element type.
    type Value;
}

impl<T: ContainerTypes + ?Sized> ContainerTypes for &T {
    type Size = T::Size;
    type Value = T::Value;
}

/// Counter type used for dimensions and indices of a container.
#[diagnostic::on_unimplemented(
    message = "no size type can be deduced for `{Self}`",
    label = "size type unknown",
    note = "size types are read from `ContainerTypes`; register the shape there"
)]
pub trait SizeType {
    type Size;
}

impl<T: ContainerTypes + ?Sized> SizeType for T {
    type Size = T::Size;
}

/// Declared element type of a container.
///
/// Unlike [`CpuValueType`], this is taken as declared: a device vector of
/// `f32` reports its device scalar wrapper here.
#[diagnostic::on_unimplemented(
    message = "no value type can be deduced for `{Self}`",
    label = "value type unknown",
    note = "value types are read from `ContainerTypes`; register the shape there"
)]
pub trait ValueType {
    type Value;
}

impl<T: ContainerTypes + ?Sized> ValueType for T {
    type Value = T::Value;
}

// ---------------------------------------------------------------------------
// CpuValueType
// ---------------------------------------------------------------------------

/// Host scalar type ultimately backing a possibly nested container.
///
/// Resolution recurses through views and into the left operand of
/// expressions until it reaches a native scalar, a scalar wrapper or a
/// storage shape. `NESTING` counts the view and expression layers crossed on
/// the way; `&T` is transparent and adds none.
#[diagnostic::on_unimplemented(
    message = "cannot deduce CPU scalar type for `{Self}`",
    label = "no host scalar behind this type",
    note = "host scalars are `f32` and `f64`; complex element types are not supported"
)]
pub trait CpuValueType {
    type Cpu: HostScalar;

    /// Number of view/expression layers between `Self` and its base shape.
    const NESTING: usize;
}

impl CpuValueType for f32 {
    type Cpu = f32;
    const NESTING: usize = 0;
}

impl CpuValueType for f64 {
    type Cpu = f64;
    const NESTING: usize = 0;
}

impl<T: CpuValueType + ?Sized> CpuValueType for &T {
    type Cpu = T::Cpu;
    const NESTING: usize = T::NESTING;
}

// ---------------------------------------------------------------------------
// VectorForMatrix
// ---------------------------------------------------------------------------

/// Vector type compatible with a storage-owning matrix type.
///
/// Used to declare result and intermediate buffers of matrix-vector
/// operations. Views and expressions have no rule: only shapes that own
/// storage know the parameters a fresh vector needs.
#[diagnostic::on_unimplemented(
    message = "cannot deduce vector type for matrix type `{Self}`",
    label = "not a storage-owning matrix",
    note = "vector types are deduced for dense and sparse matrices, not for their views or expressions"
)]
pub trait VectorForMatrix {
    type Vector;
}

impl<T: VectorForMatrix + ?Sized> VectorForMatrix for &T {
    type Vector = T::Vector;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{ColumnMajor, RowMajor};
    use std::any::TypeId;

    fn assert_same<A: 'static, B: 'static>() {
        assert_eq!(
            TypeId::of::<A>(),
            TypeId::of::<B>(),
            "types should be the same"
        );
    }

    struct Packed;

    impl Alignment for Packed {
        const ALIGNMENT: usize = 16;
    }

    impl Orientation for Packed {
        type Tag = ColumnMajor;
    }

    impl ContainerTypes for Packed {
        type Size = u32;
        type Value = f32;
    }

    impl CpuValueType for Packed {
        type Cpu = f32;
        const NESTING: usize = 0;
    }

    impl VectorForMatrix for Packed {
        type Vector = Vec<f32>;
    }

    #[test]
    fn test_native_cpu_value_types() {
        assert_same::<<f32 as CpuValueType>::Cpu, f32>();
        assert_same::<<f64 as CpuValueType>::Cpu, f64>();
        assert_eq!(<f64 as CpuValueType>::NESTING, 0);
    }

    #[test]
    fn test_reference_delegation() {
        assert_eq!(<&Packed as Alignment>::ALIGNMENT, 16);
        assert_eq!(<&&Packed as Alignment>::ALIGNMENT, 16);
        assert_same::<<&Packed as Orientation>::Tag, ColumnMajor>();
        assert_same::<<&Packed as SizeType>::Size, u32>();
        assert_same::<<&Packed as ValueType>::Value, f32>();
        assert_same::<<&Packed as CpuValueType>::Cpu, f32>();
        assert_same::<<&Packed as VectorForMatrix>::Vector, Vec<f32>>();
        assert_same::<<&f32 as CpuValueType>::Cpu, f32>();
    }

    #[test]
    fn test_reference_adds_no_nesting() {
        assert_eq!(<&Packed as CpuValueType>::NESTING, 0);
        assert_eq!(<&&f64 as CpuValueType>::NESTING, 0);
    }

    #[test]
    fn test_declared_types_drive_size_and_value() {
        assert_same::<<Packed as SizeType>::Size, u32>();
        assert_same::<<Packed as ValueType>::Value, f32>();
        // orientation tag is independent of the declared types
        assert_ne!(
            TypeId::of::<<Packed as Orientation>::Tag>(),
            TypeId::of::<RowMajor>()
        );
    }
}
