//! Dynamically typed values.
//!
//! A [`Value`] holds any of the algebraic types (or a bare scalar) and checks
//! at run time whether an operation is defined for a given pair of operands,
//! reporting [`AlgebraError::UnsupportedOperandType`] when it is not.

use crate::{
    complex::Complex,
    dual_number::DualNumber,
    dual_quaternion::DualQuaternion,
    error::{AlgebraError, BinaryOp, Result, nonzero_divisor},
    quaternion::Quaternion,
    vector::Vector3,
};
use std::fmt;

/// A value of any of the algebraic types, or a bare scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector3(Vector3),
    Complex(Complex),
    DualNumber(DualNumber<f64>),
    Quaternion(Quaternion),
    DualQuaternion(DualQuaternion),
}

impl Value {
    /// The name of the type of the held value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector3(_) => "Vector3",
            Self::Complex(_) => "Complex",
            Self::DualNumber(_) => "DualNumber",
            Self::Quaternion(_) => "Quaternion",
            Self::DualQuaternion(_) => "DualQuaternion",
        }
    }

    /// Adds the given value to this one. A scalar is accepted on either side
    /// of every type.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] for any other pair of
    /// types.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        use Value::{
            Complex as C, DualNumber as D, DualQuaternion as DQ, Quaternion as Q, Scalar as S,
            Vector3 as V,
        };

        Ok(match (*self, *rhs) {
            (S(a), S(b)) => S(a + b),
            (V(a), V(b)) => V(a + b),
            (V(a), S(b)) | (S(b), V(a)) => V(a + b),
            (C(a), C(b)) => C(a + b),
            (C(a), S(b)) | (S(b), C(a)) => C(a + b),
            (D(a), D(b)) => D(a + b),
            (D(a), S(b)) | (S(b), D(a)) => D(a + b),
            (Q(a), Q(b)) => Q(a + b),
            (Q(a), S(b)) | (S(b), Q(a)) => Q(a + b),
            (DQ(a), DQ(b)) => DQ(a + b),
            (DQ(a), S(b)) | (S(b), DQ(a)) => DQ(a + b),
            _ => return Err(self.unsupported(BinaryOp::Add, rhs)),
        })
    }

    /// Subtracts the given value from this one, with the same accepted
    /// operands as [`Self::try_add`]. A scalar on the left is lifted the same
    /// way as one on the right.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] for unsupported pairs
    /// of types.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        use Value::{
            Complex as C, DualNumber as D, DualQuaternion as DQ, Quaternion as Q, Scalar as S,
            Vector3 as V,
        };

        Ok(match (*self, *rhs) {
            (S(a), S(b)) => S(a - b),
            (V(a), V(b)) => V(a - b),
            (V(a), S(b)) => V(a - b),
            (S(a), V(b)) => V(a - b),
            (C(a), C(b)) => C(a - b),
            (C(a), S(b)) => C(a - b),
            (S(a), C(b)) => C(a - b),
            (D(a), D(b)) => D(a - b),
            (D(a), S(b)) => D(a - b),
            (S(a), D(b)) => D(DualNumber::new(a, 0.0) - b),
            (Q(a), Q(b)) => Q(a - b),
            (Q(a), S(b)) => Q(a - b),
            (S(a), Q(b)) => Q(a - b),
            (DQ(a), DQ(b)) => DQ(a - b),
            (DQ(a), S(b)) => DQ(a - b),
            (S(a), DQ(b)) => DQ(a - b),
            _ => return Err(self.unsupported(BinaryOp::Sub, rhs)),
        })
    }

    /// Multiplies this value with the given one. A scalar scales any type
    /// from either side, and the product of two vectors is their dot product.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] when the types differ
    /// and neither is a scalar.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        use Value::{
            Complex as C, DualNumber as D, DualQuaternion as DQ, Quaternion as Q, Scalar as S,
            Vector3 as V,
        };

        Ok(match (*self, *rhs) {
            (S(a), S(b)) => S(a * b),
            (V(a), V(b)) => S(a.dot(&b)),
            (V(a), S(b)) | (S(b), V(a)) => V(a * b),
            (C(a), C(b)) => C(a * b),
            (C(a), S(b)) | (S(b), C(a)) => C(a * b),
            (D(a), D(b)) => D(a * b),
            (D(a), S(b)) | (S(b), D(a)) => D(a * b),
            (Q(a), Q(b)) => Q(a * b),
            (Q(a), S(b)) | (S(b), Q(a)) => Q(a * b),
            (DQ(a), DQ(b)) => DQ(a * b),
            (DQ(a), S(b)) | (S(b), DQ(a)) => DQ(a * b),
            _ => return Err(self.unsupported(BinaryOp::Mul, rhs)),
        })
    }

    /// Divides this value by the given one.
    ///
    /// Vectors and dual quaternions can only be divided by scalars. A scalar
    /// can be divided by a complex number, dual number or quaternion.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] for unsupported pairs
    /// of types and [`AlgebraError::DivisionByZero`] for a zero divisor.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        use Value::{
            Complex as C, DualNumber as D, DualQuaternion as DQ, Quaternion as Q, Scalar as S,
            Vector3 as V,
        };

        Ok(match (*self, *rhs) {
            (S(a), S(b)) => S(a / nonzero_divisor(b, "scalar / scalar")?),
            (V(a), S(b)) => V(a.try_div(b)?),
            (V(a), V(b)) => V(a.try_div(b)?),
            (C(a), C(b)) => C(a.try_div(b)?),
            (C(a), S(b)) => C(a.try_div(b)?),
            (S(a), C(b)) => C(b.try_div_scalar_by(a)?),
            (D(a), D(b)) => D(a.try_div(&b)?),
            (D(a), S(b)) => D(a.try_div(&DualNumber::new(b, 0.0))?),
            (S(a), D(b)) => D(DualNumber::new(a, 0.0).try_div(&b)?),
            (Q(a), Q(b)) => Q(a.try_div(b)?),
            (Q(a), S(b)) => Q(a.try_div(b)?),
            (S(a), Q(b)) => Q(b.try_div_scalar_by(a)?),
            (DQ(a), S(b)) => DQ(a.try_div(b)?),
            _ => return Err(self.unsupported(BinaryOp::Div, rhs)),
        })
    }

    /// Computes the cross product of a vector with a vector or a scalar.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] unless this is a
    /// vector and the given value is a vector or a scalar.
    pub fn try_cross(&self, rhs: &Self) -> Result<Self> {
        match (*self, *rhs) {
            (Self::Vector3(a), Self::Vector3(b)) => Ok(Self::Vector3(a.cross(b))),
            (Self::Vector3(a), Self::Scalar(b)) => Ok(Self::Vector3(a.cross(b))),
            _ => Err(self.unsupported(BinaryOp::Cross, rhs)),
        }
    }

    fn unsupported(&self, op: BinaryOp, rhs: &Self) -> AlgebraError {
        AlgebraError::unsupported(op, self.type_name(), rhs.type_name())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector3> for Value {
    fn from(value: Vector3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}

impl From<DualNumber<f64>> for Value {
    fn from(value: DualNumber<f64>) -> Self {
        Self::DualNumber(value)
    }
}

impl From<Quaternion> for Value {
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl From<DualQuaternion> for Value {
    fn from(value: DualQuaternion) -> Self {
        Self::DualQuaternion(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Vector3(value) => write!(f, "{value}"),
            Self::Complex(value) => write!(f, "{value}"),
            Self::DualNumber(value) => write!(f, "{value}"),
            Self::Quaternion(value) => write!(f, "{value}"),
            Self::DualQuaternion(value) => write!(f, "{value}"),
        }
    }
}
