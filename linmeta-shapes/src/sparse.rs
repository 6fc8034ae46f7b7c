//! Sparse matrices.
//!
//! Sparse shapes take part in the declared-type and vector-for-matrix axes.
//! They have no alignment and no orientation.

use std::marker::PhantomData;

use linmeta_traits::{ContainerTypes, VectorForMatrix};

use crate::extent::{MatrixExtent, Transposition};
use crate::scalar::Scalar;
use crate::vector::Vector;
use crate::{Result, ShapeError};

fn check_nonzeros(rows: usize, cols: usize, nnz: usize) -> Result<()> {
    let entries = rows.checked_mul(cols).ok_or(ShapeError::SizeOverflow)?;
    if nnz > entries {
        return Err(ShapeError::TooManyNonzeros { nnz, rows, cols });
    }
    Ok(())
}

macro_rules! sparse_shape {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<S, const A: usize = 1> {
            rows: usize,
            cols: usize,
            nnz: usize,
            _scalar: PhantomData<S>,
        }

        impl<S, const A: usize> $name<S, A> {
            pub fn new(rows: usize, cols: usize, nnz: usize) -> Result<Self> {
                check_nonzeros(rows, cols, nnz)?;
                Ok(Self {
                    rows,
                    cols,
                    nnz,
                    _scalar: PhantomData,
                })
            }

            /// Number of stored entries.
            #[inline]
            pub fn nnz(&self) -> usize {
                self.nnz
            }
        }

        impl<S, const A: usize> MatrixExtent for $name<S, A> {
            #[inline]
            fn size1(&self) -> usize {
                self.rows
            }

            #[inline]
            fn size2(&self) -> usize {
                self.cols
            }
        }

        impl<S, const A: usize> ContainerTypes for $name<S, A> {
            type Size = usize;
            type Value = Scalar<S>;
        }

        impl<S, const A: usize> VectorForMatrix for $name<S, A> {
            type Vector = Vector<S, A>;
        }

        impl<S, const A: usize> Transposition for $name<S, A> {
            const TRANSPOSED: bool = false;
        }

        linmeta_traits::capture_by_reference! {
            impl[S, const A: usize] $name<S, A>;
        }
    };
}

sparse_shape!(
    /// Sparse matrix in compressed row storage.
    CompressedMatrix
);

sparse_shape!(
    /// Sparse matrix in coordinate (triplet) storage.
    CoordinateMatrix
);
