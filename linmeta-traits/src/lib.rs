//! Axis traits for the linmeta compile-time property registry.
//!
//! Generic linear-algebra algorithms are written once and instantiated for
//! dense vectors and matrices, sparse matrices, range/slice views, lazily
//! combined expressions and third-party containers. Each property such an
//! algorithm needs is an *axis*, expressed as a trait whose associated items
//! are resolved by the compiler:
//!
//! | Axis | Trait | Resolves to |
//! |------|-------|-------------|
//! | Alignment | [`Alignment`] | `const ALIGNMENT: usize` |
//! | Orientation | [`Orientation`] | a [`RowMajor`] / [`ColumnMajor`] tag |
//! | SizeType | [`SizeType`] | the counter type for dimensions and indices |
//! | ValueType | [`ValueType`] | the declared element type |
//! | CpuValueType | [`CpuValueType`] | the host scalar backing the container |
//! | VectorForMatrix | [`VectorForMatrix`] | a vector type for matrix-vector results |
//! | OperandStorage | [`OperandStorage`], [`ReferenceIfNonscalar`] | reference or value capture |
//!
//! A rule is an `impl` of an axis trait for one shape pattern. Rules never
//! overlap (coherence rejects them otherwise) and every axis reports its own
//! diagnostic when queried on a type without a rule. Resolving an axis on
//! `&T` always equals resolving it on `T`.
//!
//! Container crates depend on `linmeta-traits` to register their shapes
//! without orphan rule violations. Third-party containers are registered in
//! [`adapters`], one Cargo feature per library, all off by default.

pub mod adapters;
pub mod axis;
pub mod capture;
pub mod orientation;
pub mod result_of;
pub mod scalar;

pub use axis::{
    Alignment, ContainerTypes, CpuValueType, Orientation, SizeType, ValueType, VectorForMatrix,
};
pub use capture::{CaptureMode, OperandStorage, ReferenceIfNonscalar};
pub use orientation::{ColumnMajor, Layout, OrientationTag, RowMajor};
pub use scalar::{HostScalar, RealScalar};
