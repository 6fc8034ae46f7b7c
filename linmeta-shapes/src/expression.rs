//! Lazily combined expressions and their builders.
//!
//! An expression stores its operands in the form chosen by
//! [`OperandStorage`]: containers as `&T`, native scalars as values. Every
//! axis of an expression is read from its left operand; matrix expressions
//! only expose alignment and orientation when they are transposes.

use std::marker::PhantomData;

use linmeta_traits::{Alignment, ContainerTypes, CpuValueType, OperandStorage, Orientation};

use crate::extent::{MatrixExtent, Transposition, VectorExtent};
use crate::{Result, ShapeError};

// ============================================================================
// Operation tags
// ============================================================================

/// Tag naming the operation an expression performs.
pub trait Operation: Copy + Default + std::fmt::Debug + 'static {
    const NAME: &'static str;
}

macro_rules! operations {
    ($($(#[$doc:meta])* $tag:ident => $name:literal;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $tag;

            impl Operation for $tag {
                const NAME: &'static str = $name;
            }
        )*
    };
}

operations! {
    /// Entry-wise sum.
    OpAdd => "add";
    /// Entry-wise difference.
    OpSub => "sub";
    /// Multiplication by a scalar.
    OpMult => "mult";
    /// Division by a scalar.
    OpDiv => "div";
    /// Matrix-vector or matrix-matrix product.
    OpProd => "prod";
    /// Matrix transpose.
    OpTrans => "trans";
}

// ============================================================================
// Expression types
// ============================================================================

/// Vector-valued expression `Op(lhs, rhs)`.
#[derive(Debug, Clone, Copy)]
pub struct VectorExpression<L, R, Op> {
    lhs: L,
    rhs: R,
    _op: PhantomData<Op>,
}

/// Matrix-valued expression `Op(lhs, rhs)`.
#[derive(Debug, Clone, Copy)]
pub struct MatrixExpression<L, R, Op> {
    lhs: L,
    rhs: R,
    _op: PhantomData<Op>,
}

macro_rules! expression_accessors {
    ($($expr:ident),*) => {
        $(
            impl<L, R, Op: Operation> $expr<L, R, Op> {
                pub fn new(lhs: L, rhs: R) -> Self {
                    Self {
                        lhs,
                        rhs,
                        _op: PhantomData,
                    }
                }

                #[inline]
                pub fn lhs(&self) -> &L {
                    &self.lhs
                }

                #[inline]
                pub fn rhs(&self) -> &R {
                    &self.rhs
                }

                #[inline]
                pub fn operation(&self) -> &'static str {
                    Op::NAME
                }
            }
        )*
    };
}

expression_accessors!(VectorExpression, MatrixExpression);

// ============================================================================
// Builders
// ============================================================================

/// Build a vector expression, capturing both operands through
/// [`OperandStorage`].
///
/// The operands are borrowed independently: a scalar captured by value does
/// not need to outlive the expression.
pub fn vector_expression<'l, 'r, Op, L, R>(
    lhs: &'l L,
    rhs: &'r R,
) -> VectorExpression<L::Stored<'l>, R::Stored<'r>, Op>
where
    Op: Operation,
    L: OperandStorage + ?Sized,
    R: OperandStorage + ?Sized,
{
    VectorExpression::new(lhs.store(), rhs.store())
}

/// Build a matrix expression, capturing both operands through
/// [`OperandStorage`].
pub fn matrix_expression<'l, 'r, Op, L, R>(
    lhs: &'l L,
    rhs: &'r R,
) -> MatrixExpression<L::Stored<'l>, R::Stored<'r>, Op>
where
    Op: Operation,
    L: OperandStorage + ?Sized,
    R: OperandStorage + ?Sized,
{
    MatrixExpression::new(lhs.store(), rhs.store())
}

/// `alpha * x`.
pub fn scale<'l, 'r, V, S>(
    x: &'l V,
    alpha: &'r S,
) -> VectorExpression<V::Stored<'l>, S::Stored<'r>, OpMult>
where
    V: OperandStorage + ?Sized,
    S: OperandStorage + ?Sized,
{
    vector_expression::<OpMult, V, S>(x, alpha)
}

fn check_same_size<X, Y>(x: &X, y: &Y) -> Result<()>
where
    X: VectorExtent + ?Sized,
    Y: VectorExtent + ?Sized,
{
    if x.size() != y.size() {
        return Err(ShapeError::SizeMismatch(x.size(), y.size()));
    }
    Ok(())
}

/// `x + y`.
pub fn add<'l, 'r, X, Y>(
    x: &'l X,
    y: &'r Y,
) -> Result<VectorExpression<X::Stored<'l>, Y::Stored<'r>, OpAdd>>
where
    X: OperandStorage + VectorExtent + ?Sized,
    Y: OperandStorage + VectorExtent + ?Sized,
{
    check_same_size(x, y)?;
    Ok(vector_expression::<OpAdd, X, Y>(x, y))
}

/// `x - y`.
pub fn sub<'l, 'r, X, Y>(
    x: &'l X,
    y: &'r Y,
) -> Result<VectorExpression<X::Stored<'l>, Y::Stored<'r>, OpSub>>
where
    X: OperandStorage + VectorExtent + ?Sized,
    Y: OperandStorage + VectorExtent + ?Sized,
{
    check_same_size(x, y)?;
    Ok(vector_expression::<OpSub, X, Y>(x, y))
}

/// `A * x`.
pub fn prod<'l, 'r, M, V>(
    a: &'l M,
    x: &'r V,
) -> Result<VectorExpression<M::Stored<'l>, V::Stored<'r>, OpProd>>
where
    M: OperandStorage + MatrixExtent + ?Sized,
    V: OperandStorage + VectorExtent + ?Sized,
{
    if a.size2() != x.size() {
        return Err(ShapeError::SizeMismatch(a.size2(), x.size()));
    }
    Ok(vector_expression::<OpProd, M, V>(a, x))
}

/// `A^T`, reading the same storage as `a`.
pub fn trans<M>(a: &M) -> MatrixExpression<M::Stored<'_>, M::Stored<'_>, OpTrans>
where
    M: OperandStorage + ?Sized,
{
    matrix_expression::<OpTrans, M, M>(a, a)
}

// ============================================================================
// Extents
// ============================================================================

macro_rules! entrywise_vector_extent {
    ($($op:ident),*) => {
        $(
            impl<L: VectorExtent, R> VectorExtent for VectorExpression<L, R, $op> {
                #[inline]
                fn size(&self) -> usize {
                    self.lhs.size()
                }
            }
        )*
    };
}

entrywise_vector_extent!(OpAdd, OpSub, OpMult, OpDiv);

impl<L: MatrixExtent, R> VectorExtent for VectorExpression<L, R, OpProd> {
    #[inline]
    fn size(&self) -> usize {
        self.lhs.size1()
    }
}

macro_rules! entrywise_matrix_extent {
    ($($op:ident),*) => {
        $(
            impl<L: MatrixExtent, R> MatrixExtent for MatrixExpression<L, R, $op> {
                #[inline]
                fn size1(&self) -> usize {
                    self.lhs.size1()
                }

                #[inline]
                fn size2(&self) -> usize {
                    self.lhs.size2()
                }
            }
        )*
    };
}

entrywise_matrix_extent!(OpAdd, OpSub, OpMult, OpDiv);

impl<L: MatrixExtent, R> MatrixExtent for MatrixExpression<L, R, OpTrans> {
    #[inline]
    fn size1(&self) -> usize {
        self.lhs.size2()
    }

    #[inline]
    fn size2(&self) -> usize {
        self.lhs.size1()
    }
}

// ============================================================================
// Rules
// ============================================================================

impl<L: ContainerTypes, R, Op: Operation> ContainerTypes for VectorExpression<L, R, Op> {
    type Size = L::Size;
    type Value = L::Value;
}

impl<L: ContainerTypes, R, Op: Operation> ContainerTypes for MatrixExpression<L, R, Op> {
    type Size = L::Size;
    type Value = L::Value;
}

impl<L: Alignment, R, Op: Operation> Alignment for VectorExpression<L, R, Op> {
    const ALIGNMENT: usize = L::ALIGNMENT;
}

impl<L: Alignment, R> Alignment for MatrixExpression<L, R, OpTrans> {
    const ALIGNMENT: usize = L::ALIGNMENT;
}

// Storage layout is forwarded as-is; `Transposition` records the flip.
impl<L: Orientation, R> Orientation for MatrixExpression<L, R, OpTrans> {
    type Tag = L::Tag;
}

impl<L: Transposition, R> Transposition for MatrixExpression<L, R, OpTrans> {
    const TRANSPOSED: bool = !L::TRANSPOSED;
}

impl<L: CpuValueType, R, Op: Operation> CpuValueType for VectorExpression<L, R, Op> {
    type Cpu = L::Cpu;
    const NESTING: usize = L::NESTING + 1;
}

impl<L: CpuValueType, R, Op: Operation> CpuValueType for MatrixExpression<L, R, Op> {
    type Cpu = L::Cpu;
    const NESTING: usize = L::NESTING + 1;
}

linmeta_traits::capture_by_reference! {
    impl[L, R, Op] VectorExpression<L, R, Op>;
    impl[L, R, Op] MatrixExpression<L, R, Op>;
}
