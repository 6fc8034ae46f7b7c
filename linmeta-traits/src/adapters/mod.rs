//! Adapter rule sets for third-party containers.
//!
//! Each library is gated behind its own Cargo feature, off by default.
//! Enabling one adds rules for that library's types only; resolution for the
//! built-in shapes never changes.
//!
//! | Feature | Library types |
//! |---------|---------------|
//! | `ndarray` | `Array1`, `Array2` |
//! | `nalgebra` | `DVector`, `DMatrix`, `CsrMatrix`, `CscMatrix`, `CooMatrix` |

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
#[cfg(feature = "ndarray")]
pub mod ndarray;
