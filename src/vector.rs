//! Vectors.

use crate::{
    error::{AlgebraError, BinaryOp, Result, nonzero_divisor},
    operand::Operand,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 3-dimensional real vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Sets the x-component.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Sets the y-component.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Sets the z-component.
    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Computes the square of the length of the vector. Cheaper than
    /// [`Self::magnitude`] when only comparisons are needed.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the length of the vector.
    ///
    /// The components are scaled by the largest of their absolute values
    /// before squaring, so the result is accurate whenever the length itself
    /// is representable.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs_component();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * self.unchecked_div(scale).norm_squared().sqrt()
    }

    /// The largest absolute value of the components.
    #[inline]
    pub fn max_abs_component(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another vector, or with
    /// a scalar `s` taken as the vector `(s, 0, 0)`.
    #[inline]
    pub fn cross(&self, other: impl Into<Operand<Self>>) -> Self {
        let other = other.into().into_typed(|s| Self::new(s, 0.0, 0.0));
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the vector with every component multiplied by the given
    /// factor.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides every component by the given scalar.
    ///
    /// # Errors
    /// Returns [`AlgebraError::UnsupportedOperandType`] if the divisor is a
    /// vector, and [`AlgebraError::DivisionByZero`] if it is zero.
    pub fn try_div(&self, divisor: impl Into<Operand<Self>>) -> Result<Self> {
        match divisor.into() {
            Operand::Scalar(divisor) => {
                let divisor = nonzero_divisor(divisor, "Vector3 / f64")?;
                Ok(self.unchecked_div(divisor))
            }
            Operand::Typed(_) => Err(AlgebraError::unsupported(
                BinaryOp::Div,
                "Vector3",
                "Vector3",
            )),
        }
    }

    #[inline]
    pub(crate) fn unchecked_div(&self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }

    /// Scales the vector to unit length in place.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the vector has zero
    /// length, in which case the vector is left unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        let magnitude = nonzero_divisor(self.magnitude(), "Vector3::normalize")?;
        self.x /= magnitude;
        self.y /= magnitude;
        self.z /= magnitude;
        Ok(())
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// See [`Self::normalize`].
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_operand_from!(Vector3);

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector3, f64, Vector3, |a, b| {
    a + Vector3::same(*b)
});

impl_binop!(Add, add, f64, Vector3, Vector3, |a, b| {
    Vector3::same(*a) + b
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector3, f64, Vector3, |a, b| {
    a - Vector3::same(*b)
});

impl_binop!(Sub, sub, f64, Vector3, Vector3, |a, b| {
    Vector3::same(*a) - b
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.scaled(*a) });

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    *a = a.scaled(*b);
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i + {}j + {}k", self.x, self.y, self.z)
    }
}
