//! Storage orientation tags for dense matrices.
//!
//! A matrix type carries its orientation as a zero-sized type parameter, so
//! kernels can select a memory traversal at compile time:
//! - [`RowMajor`]: the last index varies fastest
//! - [`ColumnMajor`]: the first index varies fastest
//!
//! Transposition is a group of order two on the tags:
//! ```text
//!   transposed | Row | Col
//!  ------------|-----|-----
//!   result     | Col | Row
//! ```

/// Runtime mirror of an orientation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    RowMajor,
    ColumnMajor,
}

impl Layout {
    /// The layout seen when the same buffer is read as its transpose.
    pub const fn transposed(self) -> Self {
        match self {
            Layout::RowMajor => Layout::ColumnMajor,
            Layout::ColumnMajor => Layout::RowMajor,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::RowMajor => f.write_str("row_major"),
            Layout::ColumnMajor => f.write_str("column_major"),
        }
    }
}

/// Trait for matrix orientation tags.
pub trait OrientationTag: Copy + Default + std::fmt::Debug + 'static {
    /// Runtime value of this tag.
    const LAYOUT: Layout;

    /// The tag describing the same buffer read as its transpose.
    type Transposed: OrientationTag;

    /// Linear offset of element `(i, j)` in a buffer padded to
    /// `internal_rows x internal_cols`.
    fn mem_index(i: usize, j: usize, internal_rows: usize, internal_cols: usize) -> usize;
}

/// Row-major storage: `(i, j)` lives at `i * internal_cols + j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Column-major storage: `(i, j)` lives at `i + j * internal_rows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMajor;

impl OrientationTag for RowMajor {
    const LAYOUT: Layout = Layout::RowMajor;
    type Transposed = ColumnMajor;

    #[inline(always)]
    fn mem_index(i: usize, j: usize, _internal_rows: usize, internal_cols: usize) -> usize {
        i * internal_cols + j
    }
}

impl OrientationTag for ColumnMajor {
    const LAYOUT: Layout = Layout::ColumnMajor;
    type Transposed = RowMajor;

    #[inline(always)]
    fn mem_index(i: usize, j: usize, internal_rows: usize, _internal_cols: usize) -> usize {
        i + j * internal_rows
    }
}
