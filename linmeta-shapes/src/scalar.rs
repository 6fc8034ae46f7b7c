//! Device-resident scalar.

use std::marker::PhantomData;

use linmeta_traits::{ContainerTypes, CpuValueType, HostScalar};

/// A scalar living in device memory that mirrors host type `S`.
///
/// Its declared value type and its CPU value type are both `S`, reached in
/// one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scalar<S> {
    _host: PhantomData<S>,
}

impl<S> Scalar<S> {
    pub fn new() -> Self {
        Self { _host: PhantomData }
    }
}

impl<S> ContainerTypes for Scalar<S> {
    type Size = usize;
    type Value = S;
}

impl<S: HostScalar> CpuValueType for Scalar<S> {
    type Cpu = S;
    const NESTING: usize = 0;
}

linmeta_traits::capture_by_reference! {
    impl[S] Scalar<S>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use linmeta_traits::result_of::{CpuValueTypeOf, ValueTypeOf};
    use linmeta_traits::{CaptureMode, OperandStorage};
    use std::any::TypeId;

    #[test]
    fn test_scalar_unwraps_in_one_step() {
        assert_eq!(TypeId::of::<CpuValueTypeOf<Scalar<f32>>>(), TypeId::of::<f32>());
        assert_eq!(TypeId::of::<ValueTypeOf<Scalar<f64>>>(), TypeId::of::<f64>());
        assert_eq!(<Scalar<f64> as CpuValueType>::NESTING, 0);
    }

    #[test]
    fn test_device_scalar_is_referenced() {
        let s = Scalar::<f32>::new();
        assert!(std::ptr::eq(s.store(), &s));
        assert_eq!(<Scalar<f32> as OperandStorage>::MODE, CaptureMode::ByReference);
    }
}
