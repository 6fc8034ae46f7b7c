//! Dense matrices.

use std::marker::PhantomData;

use linmeta_traits::{
    Alignment, ContainerTypes, CpuValueType, HostScalar, Orientation, OrientationTag, RowMajor,
    VectorForMatrix,
};

use crate::extent::{MatrixExtent, Transposition};
use crate::scalar::Scalar;
use crate::vector::Vector;
use crate::{align_to_multiple, Result, ShapeError};

fn checked_mem_index<F: OrientationTag>(
    i: usize,
    j: usize,
    rows: usize,
    cols: usize,
    internal_rows: usize,
    internal_cols: usize,
) -> Result<usize> {
    if i >= rows || j >= cols {
        return Err(ShapeError::IndexOutOfBounds {
            row: i,
            col: j,
            rows,
            cols,
        });
    }
    Ok(F::mem_index(i, j, internal_rows, internal_cols))
}

/// Dense matrix without compile-time alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixBase<S, F> {
    rows: usize,
    cols: usize,
    internal_rows: usize,
    internal_cols: usize,
    _marker: PhantomData<(S, F)>,
}

impl<S, F: OrientationTag> MatrixBase<S, F> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            internal_rows: rows,
            internal_cols: cols,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn internal_size1(&self) -> usize {
        self.internal_rows
    }

    #[inline]
    pub fn internal_size2(&self) -> usize {
        self.internal_cols
    }

    /// Linear offset of `(i, j)` in the padded buffer.
    pub fn mem_index(&self, i: usize, j: usize) -> Result<usize> {
        checked_mem_index::<F>(
            i,
            j,
            self.rows,
            self.cols,
            self.internal_rows,
            self.internal_cols,
        )
    }
}

/// Dense matrix with orientation `F` whose rows and columns are padded to a
/// multiple of `A`.
///
/// # Type Parameters
/// - `S`: host scalar type of the entries
/// - `F`: [`RowMajor`] (default) or [`ColumnMajor`](linmeta_traits::ColumnMajor)
/// - `A`: alignment in entries (default 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<S, F = RowMajor, const A: usize = 1> {
    rows: usize,
    cols: usize,
    internal_rows: usize,
    internal_cols: usize,
    _marker: PhantomData<(S, F)>,
}

impl<S, F: OrientationTag, const A: usize> Matrix<S, F, A> {
    const NONZERO_ALIGNMENT: () = assert!(A > 0, "matrix alignment must be non-zero");

    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let () = Self::NONZERO_ALIGNMENT;
        let internal_rows = align_to_multiple(rows, A)?;
        let internal_cols = align_to_multiple(cols, A)?;
        internal_rows
            .checked_mul(internal_cols)
            .ok_or(ShapeError::SizeOverflow)?;
        Ok(Self {
            rows,
            cols,
            internal_rows,
            internal_cols,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn internal_size1(&self) -> usize {
        self.internal_rows
    }

    #[inline]
    pub fn internal_size2(&self) -> usize {
        self.internal_cols
    }

    /// Number of entries in the padded buffer.
    #[inline]
    pub fn internal_size(&self) -> usize {
        self.internal_rows * self.internal_cols
    }

    /// Linear offset of `(i, j)` in the padded buffer.
    pub fn mem_index(&self, i: usize, j: usize) -> Result<usize> {
        checked_mem_index::<F>(
            i,
            j,
            self.rows,
            self.cols,
            self.internal_rows,
            self.internal_cols,
        )
    }

    /// The same matrix without its compile-time alignment.
    pub fn base(&self) -> MatrixBase<S, F> {
        MatrixBase {
            rows: self.rows,
            cols: self.cols,
            internal_rows: self.internal_rows,
            internal_cols: self.internal_cols,
            _marker: PhantomData,
        }
    }
}

impl<S, F> MatrixExtent for MatrixBase<S, F> {
    #[inline]
    fn size1(&self) -> usize {
        self.rows
    }

    #[inline]
    fn size2(&self) -> usize {
        self.cols
    }
}

impl<S, F, const A: usize> MatrixExtent for Matrix<S, F, A> {
    #[inline]
    fn size1(&self) -> usize {
        self.rows
    }

    #[inline]
    fn size2(&self) -> usize {
        self.cols
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

impl<S, F> ContainerTypes for MatrixBase<S, F> {
    type Size = usize;
    type Value = Scalar<S>;
}

impl<S, F, const A: usize> ContainerTypes for Matrix<S, F, A> {
    type Size = usize;
    type Value = Scalar<S>;
}

impl<S, F, const A: usize> Alignment for Matrix<S, F, A> {
    const ALIGNMENT: usize = A;
}

impl<S, F: OrientationTag> Orientation for MatrixBase<S, F> {
    type Tag = F;
}

impl<S, F: OrientationTag, const A: usize> Orientation for Matrix<S, F, A> {
    type Tag = F;
}

impl<S: HostScalar, F> CpuValueType for MatrixBase<S, F> {
    type Cpu = S;
    const NESTING: usize = 0;
}

impl<S: HostScalar, F, const A: usize> CpuValueType for Matrix<S, F, A> {
    type Cpu = S;
    const NESTING: usize = 0;
}

impl<S, F, const A: usize> VectorForMatrix for Matrix<S, F, A> {
    type Vector = Vector<S, A>;
}

impl<S, F> Transposition for MatrixBase<S, F> {
    const TRANSPOSED: bool = false;
}

impl<S, F, const A: usize> Transposition for Matrix<S, F, A> {
    const TRANSPOSED: bool = false;
}

linmeta_traits::capture_by_reference! {
    impl[S, F] MatrixBase<S, F>;
    impl[S, F, const A: usize] Matrix<S, F, A>;
}
