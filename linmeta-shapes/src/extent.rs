//! Runtime extents and transposition of shapes.

use crate::Result;

/// Number of entries of a vector-like shape.
pub trait VectorExtent {
    fn size(&self) -> usize;
}

/// Rows and columns of a matrix-like shape.
pub trait MatrixExtent {
    fn size1(&self) -> usize;
    fn size2(&self) -> usize;
}

/// Whether a matrix-like shape reads its storage transposed.
///
/// Storage matrices are not transposed, views forward the flag and every
/// `OpTrans` layer flips it. Together with
/// [`Orientation`](linmeta_traits::Orientation), which always names the
/// storage layout, this gives kernels the logical layout of an operand.
pub trait Transposition {
    const TRANSPOSED: bool;
}

/// Shapes that can be declared for a given length.
pub trait FromSize: Sized {
    fn from_size(size: usize) -> Result<Self>;
}

impl<T: VectorExtent + ?Sized> VectorExtent for &T {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<T: MatrixExtent + ?Sized> MatrixExtent for &T {
    #[inline]
    fn size1(&self) -> usize {
        (**self).size1()
    }

    #[inline]
    fn size2(&self) -> usize {
        (**self).size2()
    }
}

impl<T: Transposition + ?Sized> Transposition for &T {
    const TRANSPOSED: bool = T::TRANSPOSED;
}
