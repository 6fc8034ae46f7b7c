//! Rules for `ndarray` dense containers.
//!
//! `Array2<S>` pairs with `Array1<S>` for matrix-vector results. Both report
//! `usize` counters and their element type as declared.

use ndarray::{Array1, Array2};

use crate::axis::{ContainerTypes, VectorForMatrix};

impl<S> ContainerTypes for Array1<S> {
    type Size = usize;
    type Value = S;
}

impl<S> ContainerTypes for Array2<S> {
    type Size = usize;
    type Value = S;
}

impl<S> VectorForMatrix for Array2<S> {
    type Vector = Array1<S>;
}

crate::capture_by_reference! {
    impl[S] Array1<S>;
    impl[S] Array2<S>;
}
