//! Range and slice views.
//!
//! A view wraps another shape `T` (often `&T`) and forwards every axis to it:
//! alignment, orientation, declared types and transposition are read from
//! `T`, and the CPU value type recurses into `T` one layer deeper.

use std::ops::Range;

use linmeta_traits::{Alignment, ContainerTypes, CpuValueType, Orientation};

use crate::extent::{MatrixExtent, Transposition, VectorExtent};
use crate::{Result, ShapeError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate `range` against an extent and return its length.
fn validate_range(range: &Range<usize>, extent: usize) -> Result<usize> {
    if range.start > range.end {
        return Err(ShapeError::InvertedRange {
            start: range.start,
            stop: range.end,
        });
    }
    if range.end > extent {
        return Err(ShapeError::RangeOutOfBounds {
            start: range.start,
            stop: range.end,
            extent,
        });
    }
    Ok(range.end - range.start)
}

/// Strided index set: `start, start + stride, ...` with `size` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: usize,
    pub stride: usize,
    pub size: usize,
}

impl Slice {
    pub fn new(start: usize, stride: usize, size: usize) -> Self {
        Self {
            start,
            stride,
            size,
        }
    }

    fn validate(&self, extent: usize) -> Result<()> {
        if self.stride == 0 {
            return Err(ShapeError::ZeroStride);
        }
        if self.size == 0 {
            if self.start > extent {
                return Err(ShapeError::RangeOutOfBounds {
                    start: self.start,
                    stop: self.start,
                    extent,
                });
            }
            return Ok(());
        }
        let last = self
            .stride
            .checked_mul(self.size - 1)
            .and_then(|span| span.checked_add(self.start))
            .ok_or(ShapeError::SizeOverflow)?;
        if last >= extent {
            return Err(ShapeError::RangeOutOfBounds {
                start: self.start,
                stop: last.saturating_add(1),
                extent,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Vector views
// ============================================================================

/// Contiguous sub-range of a vector.
#[derive(Debug, Clone, Copy)]
pub struct VectorRange<T> {
    host: T,
    start: usize,
    size: usize,
}

impl<T: VectorExtent> VectorRange<T> {
    pub fn new(host: T, range: Range<usize>) -> Result<Self> {
        let size = validate_range(&range, host.size())?;
        Ok(Self {
            host,
            start: range.start,
            size,
        })
    }
}

impl<T> VectorRange<T> {
    #[inline]
    pub fn host(&self) -> &T {
        &self.host
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }
}

/// Strided subset of a vector.
#[derive(Debug, Clone, Copy)]
pub struct VectorSlice<T> {
    host: T,
    slice: Slice,
}

impl<T: VectorExtent> VectorSlice<T> {
    pub fn new(host: T, slice: Slice) -> Result<Self> {
        slice.validate(host.size())?;
        Ok(Self { host, slice })
    }
}

impl<T> VectorSlice<T> {
    #[inline]
    pub fn host(&self) -> &T {
        &self.host
    }

    #[inline]
    pub fn slice(&self) -> Slice {
        self.slice
    }
}

impl<T> VectorExtent for VectorRange<T> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl<T> VectorExtent for VectorSlice<T> {
    #[inline]
    fn size(&self) -> usize {
        self.slice.size
    }
}

// ============================================================================
// Matrix views
// ============================================================================

/// Contiguous block of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixRange<T> {
    host: T,
    row_start: usize,
    col_start: usize,
    rows: usize,
    cols: usize,
}

impl<T: MatrixExtent> MatrixRange<T> {
    pub fn new(host: T, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        let nrows = validate_range(&rows, host.size1())?;
        let ncols = validate_range(&cols, host.size2())?;
        Ok(Self {
            host,
            row_start: rows.start,
            col_start: cols.start,
            rows: nrows,
            cols: ncols,
        })
    }
}

impl<T> MatrixRange<T> {
    #[inline]
    pub fn host(&self) -> &T {
        &self.host
    }

    /// First row and column of the block in the host.
    #[inline]
    pub fn start(&self) -> (usize, usize) {
        (self.row_start, self.col_start)
    }
}

/// Strided subset of the rows and columns of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixSlice<T> {
    host: T,
    rows: Slice,
    cols: Slice,
}

impl<T: MatrixExtent> MatrixSlice<T> {
    pub fn new(host: T, rows: Slice, cols: Slice) -> Result<Self> {
        rows.validate(host.size1())?;
        cols.validate(host.size2())?;
        Ok(Self { host, rows, cols })
    }
}

impl<T> MatrixSlice<T> {
    #[inline]
    pub fn host(&self) -> &T {
        &self.host
    }

    #[inline]
    pub fn slices(&self) -> (Slice, Slice) {
        (self.rows, self.cols)
    }
}

impl<T> MatrixExtent for MatrixRange<T> {
    #[inline]
    fn size1(&self) -> usize {
        self.rows
    }

    #[inline]
    fn size2(&self) -> usize {
        self.cols
    }
}

impl<T> MatrixExtent for MatrixSlice<T> {
    #[inline]
    fn size1(&self) -> usize {
        self.rows.size
    }

    #[inline]
    fn size2(&self) -> usize {
        self.cols.size
    }
}

// ============================================================================
// Rules
// ============================================================================

macro_rules! forward_view_rules {
    ($($view:ident),*) => {
        $(
            impl<T: ContainerTypes> ContainerTypes for $view<T> {
                type Size = T::Size;
                type Value = T::Value;
            }

            impl<T: Alignment> Alignment for $view<T> {
                const ALIGNMENT: usize = T::ALIGNMENT;
            }

            impl<T: CpuValueType> CpuValueType for $view<T> {
                type Cpu = T::Cpu;
                const NESTING: usize = T::NESTING + 1;
            }

            linmeta_traits::capture_by_reference! {
                impl[T] $view<T>;
            }
        )*
    };
}

forward_view_rules!(VectorRange, VectorSlice, MatrixRange, MatrixSlice);

impl<T: Orientation> Orientation for MatrixRange<T> {
    type Tag = T::Tag;
}

impl<T: Orientation> Orientation for MatrixSlice<T> {
    type Tag = T::Tag;
}

impl<T: Transposition> Transposition for MatrixRange<T> {
    const TRANSPOSED: bool = T::TRANSPOSED;
}

impl<T: Transposition> Transposition for MatrixSlice<T> {
    const TRANSPOSED: bool = T::TRANSPOSED;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Vector};
    use linmeta_traits::result_of::{alignment, CpuValueTypeOf, OrientationOf};
    use linmeta_traits::{ColumnMajor, RowMajor};
    use std::any::TypeId;

    #[test]
    fn test_vector_range_new() {
        let v = Vector::<f32, 4>::new(10).unwrap();
        let r = VectorRange::new(&v, 2..7).unwrap();
        assert_eq!(r.size(), 5);
        assert_eq!(r.start(), 2);
        assert!(std::ptr::eq(*r.host(), &v));
    }

    #[test]
    fn test_vector_range_errors() {
        let v = Vector::<f32>::new(4).unwrap();
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = VectorRange::new(&v, 3..1).unwrap_err();
        assert_eq!(inverted, ShapeError::InvertedRange { start: 3, stop: 1 });
        let err = VectorRange::new(&v, 1..5).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RangeOutOfBounds {
                start: 1,
                stop: 5,
                extent: 4
            }
        );
    }

    #[test]
    fn test_vector_slice_new() {
        let v = Vector::<f64>::new(10).unwrap();
        let s = VectorSlice::new(&v, Slice::new(1, 3, 3)).unwrap();
        assert_eq!(s.size(), 3);
        // last index 1 + 3 * 3 = 10 is out of bounds
        let err = VectorSlice::new(&v, Slice::new(1, 3, 4)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RangeOutOfBounds {
                start: 1,
                stop: 11,
                extent: 10
            }
        );
        let zero = VectorSlice::new(&v, Slice::new(0, 0, 2)).unwrap_err();
        assert_eq!(zero, ShapeError::ZeroStride);
    }

    #[test]
    fn test_empty_slice_is_valid() {
        let v = Vector::<f64>::new(0).unwrap();
        let s = VectorSlice::new(&v, Slice::new(0, 1, 0)).unwrap();
        assert_eq!(s.size(), 0);
        // an empty slice may start one past the end, like an empty range
        let w = Vector::<f64>::new(10).unwrap();
        assert!(VectorSlice::new(&w, Slice::new(10, 1, 0)).is_ok());
    }

    #[test]
    fn test_empty_slice_past_end() {
        let v = Vector::<f64>::new(10).unwrap();
        let err = VectorSlice::new(&v, Slice::new(100, 1, 0)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RangeOutOfBounds {
                start: 100,
                stop: 100,
                extent: 10
            }
        );
        assert_eq!(VectorRange::new(&v, 100..100).unwrap_err(), err);
    }

    #[test]
    fn test_slice_last_index_at_usize_max() {
        let v = Vector::<f32, 1>::new(usize::MAX).unwrap();
        let err = VectorSlice::new(&v, Slice::new(usize::MAX, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RangeOutOfBounds {
                start: usize::MAX,
                stop: usize::MAX,
                extent: usize::MAX
            }
        );
    }

    #[test]
    fn test_matrix_range_and_slice() {
        let m = Matrix::<f32, ColumnMajor, 4>::new(6, 8).unwrap();
        let r = MatrixRange::new(&m, 1..4, 2..8).unwrap();
        assert_eq!((r.size1(), r.size2()), (3, 6));
        assert_eq!(r.start(), (1, 2));

        let s = MatrixSlice::new(&m, Slice::new(0, 2, 3), Slice::new(1, 3, 3)).unwrap();
        assert_eq!((s.size1(), s.size2()), (3, 3));
        assert!(MatrixSlice::new(&m, Slice::new(0, 2, 4), Slice::new(0, 1, 1)).is_err());
    }

    #[test]
    fn test_views_forward_rules() {
        type M = Matrix<f64, ColumnMajor, 8>;
        assert_eq!(alignment::<MatrixRange<&M>>(), 8);
        assert_eq!(alignment::<VectorSlice<Vector<f32, 4>>>(), 4);
        assert_eq!(
            TypeId::of::<OrientationOf<MatrixSlice<M>>>(),
            TypeId::of::<ColumnMajor>()
        );
        assert_eq!(
            TypeId::of::<OrientationOf<MatrixRange<Matrix<f32, RowMajor>>>>(),
            TypeId::of::<RowMajor>()
        );
        assert_eq!(
            TypeId::of::<CpuValueTypeOf<VectorRange<&Vector<f32, 4>>>>(),
            TypeId::of::<f32>()
        );
        assert_eq!(<VectorRange<&Vector<f32, 4>> as CpuValueType>::NESTING, 1);
        assert_eq!(
            <MatrixRange<MatrixSlice<M>> as CpuValueType>::NESTING,
            2
        );
    }

    #[test]
    fn test_view_of_view() {
        let v = Vector::<f32>::new(10).unwrap();
        let outer = VectorRange::new(&v, 2..9).unwrap();
        let inner = VectorRange::new(&outer, 1..4).unwrap();
        assert_eq!(inner.size(), 3);
        assert_eq!(alignment::<VectorRange<&VectorRange<&Vector<f32>>>>(), 1);
    }
}
