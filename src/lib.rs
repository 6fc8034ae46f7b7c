//! Compile-time property registry for generic linear-algebra containers.
//!
//! Generic numeric algorithms are written once against dense vectors and
//! matrices, sparse matrices, range/slice views, lazy expressions and
//! third-party containers. Before choosing a kernel or declaring a buffer
//! they ask the registry for a handful of properties of their operand types.
//! Every answer is computed by the compiler; nothing is inspected at run time.
//!
//! # Axes
//!
//! - [`Alignment`]: storage alignment granularity ([`result_of::alignment`])
//! - [`Orientation`]: [`RowMajor`] or [`ColumnMajor`] storage
//! - [`SizeType`] / [`ValueType`]: declared counter and element types
//! - [`CpuValueType`]: host scalar behind any nesting of wrappers
//! - [`VectorForMatrix`]: vector type for results of matrix-vector products
//! - [`OperandStorage`] / [`ReferenceIfNonscalar`]: capture by reference or by value
//!
//! Querying an axis on a type it does not cover is a compile error carrying
//! that axis' own diagnostic, e.g. "argument provided is not a matrix".
//!
//! # Example
//!
//! ```rust
//! use linmeta::result_of::{alignment, CpuValueTypeOf, VectorForMatrixOf};
//! use linmeta::{scale, CompressedMatrix, CpuValueType, Vector, VectorRange};
//! use std::any::TypeId;
//!
//! // A sparse matrix pairs with an aligned dense vector of the same scalar.
//! type Buf = VectorForMatrixOf<CompressedMatrix<f64, 4>>;
//! assert_eq!(alignment::<Buf>(), 4);
//! assert_eq!(TypeId::of::<CpuValueTypeOf<Buf>>(), TypeId::of::<f64>());
//!
//! // Views and expressions forward to what they wrap.
//! let v = Vector::<f32, 1>::new(8).unwrap();
//! let scaled = scale(&v, &2.0f32);
//! let view = VectorRange::new(scaled, 0..4).unwrap();
//! fn nesting<T: CpuValueType>(_: &T) -> usize {
//!     T::NESTING
//! }
//! assert_eq!(nesting(&view), 2);
//! ```
//!
//! # Features
//!
//! Third-party adapter rules are off by default:
//! - `ndarray`: `Array1`, `Array2`
//! - `nalgebra`: `DVector`, `DMatrix`, `CsrMatrix`, `CscMatrix`, `CooMatrix`

pub mod plan;

#[cfg(feature = "nalgebra")]
pub use nalgebra;
#[cfg(feature = "nalgebra")]
pub use nalgebra_sparse;
#[cfg(feature = "ndarray")]
pub use ndarray;

// ============================================================================
// Axes
// ============================================================================
pub use linmeta_traits::{
    capture_by_reference, capture_by_value, result_of, Alignment, CaptureMode, ColumnMajor,
    ContainerTypes, CpuValueType, HostScalar, Layout, OperandStorage, Orientation, OrientationTag,
    RealScalar, ReferenceIfNonscalar, RowMajor, SizeType, ValueType, VectorForMatrix,
};

// ============================================================================
// Built-in shapes
// ============================================================================
pub use linmeta_shapes::{
    add, align_to_multiple, matrix_expression, prod, scale, sub, trans, vector_expression,
    CompressedMatrix, CoordinateMatrix, FromSize, Matrix, MatrixBase, MatrixExpression,
    MatrixExtent, MatrixRange, MatrixSlice, OpAdd, OpDiv, OpMult, OpProd, OpSub, OpTrans,
    Operation, Scalar, ShapeError, Slice, Transposition, Vector, VectorBase, VectorExpression,
    VectorExtent, VectorRange, VectorSlice,
};

// ============================================================================
// Planning
// ============================================================================
pub use plan::{plan_axpy, plan_prod, result_vector, Axpy, PlanError, ProdKernel, ProdPlan};
