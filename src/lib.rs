//! Hypercomplex number types.
//!
//! Vectors, complex numbers, dual numbers, quaternions and dual quaternions
//! with their arithmetic, conjugation, normalization and inversion.

#[macro_use]
mod macros;

pub mod complex;
pub mod dual_number;
pub mod dual_quaternion;
pub mod error;
pub mod operand;
pub mod quaternion;
pub mod value;
pub mod vector;

pub use complex::Complex;
pub use dual_number::{DualComponent, DualNumber};
pub use dual_quaternion::DualQuaternion;
pub use error::{AlgebraError, BinaryOp, Result};
pub use operand::Operand;
pub use quaternion::Quaternion;
pub use value::Value;
pub use vector::Vector3;

/// Absolute tolerance used by default when comparing values approximately.
pub const DEFAULT_EPSILON: f64 = 1e-12;
