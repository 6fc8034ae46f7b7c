//! Kernel selection and buffer declaration for generic algorithms.
//!
//! These functions are the boundary where algorithms constrain their operand
//! types: every axis they need appears as a trait bound, so an unsupported
//! operand is rejected at the call site with that axis' diagnostic.
//!
//! Matrix-vector kernels are chosen from two independent facts:
//! - the storage layout, from [`Orientation`] (forwarded unchanged through
//!   transposes)
//! - whether the operand reads that storage transposed, from [`Transposition`]

use linmeta_shapes::{
    align_to_multiple, FromSize, MatrixExtent, ShapeError, Transposition, VectorExtent,
};
use linmeta_traits::{
    Alignment, CpuValueType, Layout, Orientation, OrientationTag, ReferenceIfNonscalar,
    VectorForMatrix,
};

/// Errors that can occur while planning an operation.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Operand extents are incompatible.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result type for planning.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Matrix-vector product kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProdKernel {
    /// Layout of the matrix storage.
    pub layout: Layout,
    /// Whether the storage is read as its transpose.
    pub transposed: bool,
}

impl ProdKernel {
    /// Kernel name; the layout selects the program, not the name.
    pub fn name(&self) -> &'static str {
        if self.transposed {
            "trans_vec_mul"
        } else {
            "vec_mul"
        }
    }

    /// Layout of the operand as the product sees it.
    pub fn logical_layout(&self) -> Layout {
        if self.transposed {
            self.layout.transposed()
        } else {
            self.layout
        }
    }
}

impl std::fmt::Display for ProdKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.layout, self.name())
    }
}

/// Plan for `y = A * x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProdPlan {
    pub kernel: ProdKernel,
    /// Length of `y`.
    pub result_size: usize,
    /// Length of `y` padded to the alignment of `A`.
    pub padded_result_size: usize,
}

/// Select the kernel for `matrix * vector`.
///
/// `matrix` may be a dense matrix, a view of one or a transpose; its scalar
/// type must match the vector's.
pub fn plan_prod<M, V>(matrix: &M, vector: &V) -> Result<ProdPlan>
where
    M: Orientation + Alignment + Transposition + MatrixExtent + CpuValueType + ?Sized,
    V: VectorExtent + CpuValueType<Cpu = M::Cpu> + ?Sized,
{
    if matrix.size2() != vector.size() {
        return Err(PlanError::DimensionMismatch {
            expected: matrix.size2(),
            got: vector.size(),
        });
    }
    let kernel = ProdKernel {
        layout: <M::Tag as OrientationTag>::LAYOUT,
        transposed: M::TRANSPOSED,
    };
    let result_size = matrix.size1();
    let padded_result_size = align_to_multiple(result_size, M::ALIGNMENT)?;
    tracing::debug!(
        kernel = %kernel,
        rows = matrix.size1(),
        cols = matrix.size2(),
        alignment = M::ALIGNMENT,
        "selected matrix-vector kernel"
    );
    Ok(ProdPlan {
        kernel,
        result_size,
        padded_result_size,
    })
}

/// Declare a result buffer for `matrix * x`.
pub fn result_vector<M>(matrix: &M) -> Result<M::Vector>
where
    M: VectorForMatrix + MatrixExtent + ?Sized,
    M::Vector: FromSize,
{
    let vector = <M::Vector as FromSize>::from_size(matrix.size1())?;
    tracing::debug!(
        size = matrix.size1(),
        vector = std::any::type_name::<M::Vector>(),
        "declared result vector"
    );
    Ok(vector)
}

/// Bound arguments of `y += alpha * x`.
///
/// `alpha` and `x` are held as [`ReferenceIfNonscalar`] decides: a host
/// scalar `alpha` is copied, a device scalar or a vector is borrowed.
pub struct Axpy<'a, A, X>
where
    A: ReferenceIfNonscalar + ?Sized + 'a,
    X: ReferenceIfNonscalar + ?Sized + 'a,
{
    pub alpha: A::Passed<'a>,
    pub x: X::Passed<'a>,
    /// Length of `x` and `y`.
    pub size: usize,
    /// Length padded to the alignment of `y`.
    pub padded_size: usize,
}

/// Bind the arguments of `y += alpha * x`.
pub fn plan_axpy<'a, A, X, Y>(alpha: &'a A, x: &'a X, y: &Y) -> Result<Axpy<'a, A, X>>
where
    A: ReferenceIfNonscalar + CpuValueType + ?Sized,
    X: ReferenceIfNonscalar + VectorExtent + CpuValueType<Cpu = A::Cpu> + ?Sized,
    Y: VectorExtent + Alignment + CpuValueType<Cpu = A::Cpu> + ?Sized,
{
    if x.size() != y.size() {
        return Err(PlanError::DimensionMismatch {
            expected: y.size(),
            got: x.size(),
        });
    }
    let padded_size = align_to_multiple(y.size(), Y::ALIGNMENT)?;
    tracing::debug!(
        size = y.size(),
        alpha_mode = ?A::MODE,
        "bound axpy arguments"
    );
    Ok(Axpy {
        alpha: alpha.pass(),
        x: x.pass(),
        size: y.size(),
        padded_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linmeta_shapes::{trans, CompressedMatrix, Matrix, MatrixRange, Scalar, Vector};
    use linmeta_traits::{ColumnMajor, RowMajor};

    #[test]
    fn test_plan_prod_row_major() {
        let a = Matrix::<f32, RowMajor, 4>::new(5, 3).unwrap();
        let x = Vector::<f32, 4>::new(3).unwrap();
        let plan = plan_prod(&a, &x).unwrap();
        assert_eq!(plan.kernel.layout, Layout::RowMajor);
        assert_eq!(plan.kernel.name(), "vec_mul");
        assert_eq!(plan.result_size, 5);
        assert_eq!(plan.padded_result_size, 8);
    }

    #[test]
    fn test_plan_prod_transposed_keeps_storage_layout() {
        let a = Matrix::<f64, ColumnMajor, 1>::new(5, 3).unwrap();
        let x = Vector::<f64>::new(5).unwrap();
        let plan = plan_prod(&trans(&a), &x).unwrap();
        assert_eq!(plan.kernel.layout, Layout::ColumnMajor);
        assert!(plan.kernel.transposed);
        assert_eq!(plan.kernel.name(), "trans_vec_mul");
        assert_eq!(plan.kernel.logical_layout(), Layout::RowMajor);
        assert_eq!(plan.result_size, 3);
        assert_eq!(plan.kernel.to_string(), "column_major/trans_vec_mul");
    }

    #[test]
    fn test_kernel_name_ignores_layout() {
        for layout in [Layout::RowMajor, Layout::ColumnMajor] {
            let plain = ProdKernel { layout, transposed: false };
            let trans = ProdKernel { layout, transposed: true };
            assert_eq!(plain.name(), "vec_mul");
            assert_eq!(trans.name(), "trans_vec_mul");
        }
    }

    #[test]
    fn test_plan_prod_on_view() {
        let a = Matrix::<f32, ColumnMajor, 8>::new(10, 10).unwrap();
        let block = MatrixRange::new(&a, 2..5, 0..4).unwrap();
        let x = Vector::<f32>::new(4).unwrap();
        let plan = plan_prod(&block, &x).unwrap();
        assert_eq!(plan.kernel.layout, Layout::ColumnMajor);
        assert!(!plan.kernel.transposed);
        assert_eq!(plan.result_size, 3);
        assert_eq!(plan.padded_result_size, 8);
    }

    #[test]
    fn test_plan_prod_dimension_mismatch() {
        let a = Matrix::<f32>::new(2, 3).unwrap();
        let x = Vector::<f32>::new(2).unwrap();
        let err = plan_prod(&a, &x).unwrap_err();
        match err {
            PlanError::DimensionMismatch {
                expected: 3,
                got: 2,
            } => {}
            _ => panic!("unexpected error: {err:?}"),
        }
    }

    #[test]
    fn test_result_vector_for_sparse() {
        let a = CompressedMatrix::<f64, 4>::new(7, 9, 20).unwrap();
        let y: Vector<f64, 4> = result_vector(&a).unwrap();
        assert_eq!(y.size(), 7);
        assert_eq!(y.internal_size(), 8);
    }

    #[test]
    fn test_plan_axpy_copies_host_alpha() {
        let x = Vector::<f32, 4>::new(6).unwrap();
        let y = Vector::<f32, 4>::new(6).unwrap();
        let alpha = 3.0f32;
        let call = plan_axpy(&alpha, &x, &y).unwrap();
        assert_eq!(call.alpha, 3.0);
        assert!(std::ptr::eq(call.x, &x));
        assert_eq!(call.padded_size, 8);
    }

    #[test]
    fn test_plan_axpy_borrows_device_alpha() {
        let x = Vector::<f64>::new(2).unwrap();
        let y = Vector::<f64>::new(2).unwrap();
        let alpha = Scalar::<f64>::new();
        let call = plan_axpy(&alpha, &x, &y).unwrap();
        assert!(std::ptr::eq(call.alpha, &alpha));
        assert_eq!(call.size, 2);
    }

    #[test]
    fn test_plan_axpy_size_mismatch() {
        let x = Vector::<f64>::new(2).unwrap();
        let y = Vector::<f64>::new(3).unwrap();
        assert!(matches!(
            plan_axpy(&1.0f64, &x, &y),
            Err(PlanError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }
}
