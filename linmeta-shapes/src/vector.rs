//! Dense vectors.

use std::marker::PhantomData;

use linmeta_traits::{Alignment, ContainerTypes, CpuValueType, HostScalar};

use crate::extent::{FromSize, VectorExtent};
use crate::scalar::Scalar;
use crate::{align_to_multiple, Result};

/// Dense vector without compile-time alignment.
///
/// Ranges and slices of any vector can be described through their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorBase<S> {
    size: usize,
    internal_size: usize,
    _scalar: PhantomData<S>,
}

impl<S> VectorBase<S> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            internal_size: size,
            _scalar: PhantomData,
        }
    }

    /// Length of the buffer including padding.
    #[inline]
    pub fn internal_size(&self) -> usize {
        self.internal_size
    }
}

/// Dense vector whose buffer is padded to a multiple of `A` entries.
///
/// # Type Parameters
/// - `S`: host scalar type of the entries
/// - `A`: alignment in entries (default 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<S, const A: usize = 1> {
    size: usize,
    internal_size: usize,
    _scalar: PhantomData<S>,
}

impl<S, const A: usize> Vector<S, A> {
    const NONZERO_ALIGNMENT: () = assert!(A > 0, "vector alignment must be non-zero");

    pub fn new(size: usize) -> Result<Self> {
        let () = Self::NONZERO_ALIGNMENT;
        Ok(Self {
            size,
            internal_size: align_to_multiple(size, A)?,
            _scalar: PhantomData,
        })
    }

    /// Length of the buffer including padding.
    #[inline]
    pub fn internal_size(&self) -> usize {
        self.internal_size
    }

    /// The same vector without its compile-time alignment.
    pub fn base(&self) -> VectorBase<S> {
        VectorBase {
            size: self.size,
            internal_size: self.internal_size,
            _scalar: PhantomData,
        }
    }
}

impl<S> VectorExtent for VectorBase<S> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl<S, const A: usize> VectorExtent for Vector<S, A> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl<S, const A: usize> FromSize for Vector<S, A> {
    fn from_size(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

impl<S> ContainerTypes for VectorBase<S> {
    type Size = usize;
    type Value = Scalar<S>;
}

impl<S, const A: usize> ContainerTypes for Vector<S, A> {
    type Size = usize;
    type Value = Scalar<S>;
}

impl<S, const A: usize> Alignment for Vector<S, A> {
    const ALIGNMENT: usize = A;
}

impl<S: HostScalar> CpuValueType for VectorBase<S> {
    type Cpu = S;
    const NESTING: usize = 0;
}

impl<S: HostScalar, const A: usize> CpuValueType for Vector<S, A> {
    type Cpu = S;
    const NESTING: usize = 0;
}

linmeta_traits::capture_by_reference! {
    impl[S] VectorBase<S>;
    impl[S, const A: usize] Vector<S, A>;
}
