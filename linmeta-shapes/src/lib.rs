//! Built-in shapes of the linmeta registry.
//!
//! The types here describe device containers by their dimensions only; they
//! never own element storage. Each one registers its rules on the axes from
//! [`linmeta_traits`]:
//!
//! - [`Scalar`]: device-resident scalar
//! - [`VectorBase`] / [`Vector`]: dense vectors, the latter with compile-time alignment
//! - [`MatrixBase`] / [`Matrix`]: dense matrices with an orientation tag
//! - [`CompressedMatrix`] / [`CoordinateMatrix`]: sparse matrices
//! - [`VectorRange`], [`VectorSlice`], [`MatrixRange`], [`MatrixSlice`]: views that forward every axis
//! - [`VectorExpression`] / [`MatrixExpression`]: lazily combined operands that forward to their left operand
//!
//! Expression builders ([`scale`], [`add`], [`sub`], [`prod`], [`trans`])
//! capture operands through [`OperandStorage`](linmeta_traits::OperandStorage):
//! containers by reference, native scalars by value.

pub mod expression;
pub mod extent;
pub mod matrix;
pub mod scalar;
pub mod sparse;
pub mod vector;
pub mod view;

pub use expression::{
    add, matrix_expression, prod, scale, sub, trans, vector_expression, MatrixExpression, OpAdd,
    OpDiv, OpMult, OpProd, OpSub, OpTrans, Operation, VectorExpression,
};
pub use extent::{FromSize, MatrixExtent, Transposition, VectorExtent};
pub use matrix::{Matrix, MatrixBase};
pub use scalar::Scalar;
pub use sparse::{CompressedMatrix, CoordinateMatrix};
pub use vector::{Vector, VectorBase};
pub use view::{MatrixRange, MatrixSlice, Slice, VectorRange, VectorSlice};

/// Round `n` up to the next multiple of `alignment`.
pub fn align_to_multiple(n: usize, alignment: usize) -> Result<usize> {
    if alignment == 0 {
        return Err(ShapeError::ZeroAlignment);
    }
    n.checked_next_multiple_of(alignment)
        .ok_or(ShapeError::SizeOverflow)
}

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while describing shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Alignment of zero was requested.
    #[error("alignment must be non-zero")]
    ZeroAlignment,

    /// Padded or total size does not fit in `usize`.
    #[error("size overflow while computing padded extent")]
    SizeOverflow,

    /// Element index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Range end precedes its start.
    #[error("inverted range {start}..{stop}")]
    InvertedRange { start: usize, stop: usize },

    /// View reaches past the extent of the object it wraps.
    #[error("range {start}..{stop} out of bounds for extent {extent}")]
    RangeOutOfBounds {
        start: usize,
        stop: usize,
        extent: usize,
    },

    /// Slice stride of zero.
    #[error("invalid stride 0")]
    ZeroStride,

    /// Operand extents do not agree.
    #[error("size mismatch: {0} vs {1}")]
    SizeMismatch(usize, usize),

    /// Sparse matrix holds more nonzeros than it has entries.
    #[error("{nnz} nonzeros exceed {rows}x{cols} entries")]
    TooManyNonzeros { nnz: usize, rows: usize, cols: usize },
}

/// Result type for shape construction.
pub type Result<T> = std::result::Result<T, ShapeError>;
