//! Quaternions.

use crate::{
    dual_number::DualComponent,
    error::{Result, nonzero_divisor},
    operand::Operand,
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A quaternion `w + xi + yj + zk`, stored as a real (scalar) part `w` and an
/// imaginary (vector) part `(x, y, z)`.
///
/// Defaults to the identity `1 + 0i + 0j + 0k`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    re: f64,
    im: Vector3,
}

impl Quaternion {
    /// Creates a quaternion from its real part and imaginary vector.
    #[inline]
    pub const fn new(real: f64, imag: Vector3) -> Self {
        Self { re: real, im: imag }
    }

    /// Creates the quaternion `w + xi + yj + zk`.
    #[inline]
    pub const fn from_components(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(w, Vector3::new(x, y, z))
    }

    /// Creates a pure quaternion with zero real part.
    #[inline]
    pub const fn from_imag(imag: Vector3) -> Self {
        Self::new(0.0, imag)
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_components(1.0, 0.0, 0.0, 0.0)
    }

    /// The additive identity.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_components(0.0, 0.0, 0.0, 0.0)
    }

    /// The real part `w`.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.re
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        self.im
    }

    /// The real component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.re
    }

    /// The `i` component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.im.x()
    }

    /// The `j` component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.im.y()
    }

    /// The `k` component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.im.z()
    }

    /// Sets the real component.
    #[inline]
    pub fn set_w(&mut self, w: f64) {
        self.re = w;
    }

    /// Sets the `i` component.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.im.set_x(x);
    }

    /// Sets the `j` component.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.im.set_y(y);
    }

    /// Sets the `k` component.
    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.im.set_z(z);
    }

    /// Replaces the imaginary part.
    #[inline]
    pub fn set_imag(&mut self, imag: Vector3) {
        self.im = imag;
    }

    /// Computes `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.re * self.re + self.im.norm_squared()
    }

    /// Computes `sqrt(w² + x² + y² + z²)`, scaling by the largest absolute
    /// component first so the squares cannot underflow or overflow.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs_component();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * self.unchecked_div(scale).norm_squared().sqrt()
    }

    /// The largest absolute value of the four components.
    #[inline]
    pub fn max_abs_component(&self) -> f64 {
        self.re.abs().max(self.im.max_abs_component())
    }

    #[inline]
    fn unchecked_div(&self, divisor: f64) -> Self {
        Self::new(self.re / divisor, self.im.unchecked_div(divisor))
    }

    /// Negates the imaginary part in place.
    #[inline]
    pub fn conjugate(&mut self) {
        self.im = -self.im;
    }

    /// Returns the conjugate, with negated imaginary part.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Scales the quaternion to unit magnitude in place.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) for the
    /// zero quaternion, which is left unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        let magnitude = nonzero_divisor(self.magnitude(), "Quaternion::normalize")?;
        self.re /= magnitude;
        self.im = self.im.try_div(magnitude)?;
        Ok(())
    }

    /// # Errors
    /// See [`Self::normalize`].
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }

    /// Replaces the quaternion with its multiplicative inverse, the conjugate
    /// divided by the squared magnitude.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) for the
    /// zero quaternion, which is left unchanged.
    pub fn inverse(&mut self) -> Result<()> {
        // q⁻¹ = conj(q/s) / (|q/s|² s) keeps the intermediates in range
        let scale = nonzero_divisor(self.max_abs_component(), "Quaternion::inverse")?;
        let scaled = self.unchecked_div(scale);
        *self = scaled
            .conjugated()
            .unchecked_div(scaled.norm_squared() * scale);
        Ok(())
    }

    /// # Errors
    /// See [`Self::inverse`].
    pub fn inverted(&self) -> Result<Self> {
        let mut inverted = *self;
        inverted.inverse()?;
        Ok(inverted)
    }

    /// Divides this quaternion by a scalar, which divides both parts, or by
    /// another quaternion `q`, which multiplies from the right with the
    /// inverse of `q`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// divisor is zero.
    pub fn try_div(&self, divisor: impl Into<Operand<Self>>) -> Result<Self> {
        match divisor.into() {
            Operand::Scalar(divisor) => {
                let divisor = nonzero_divisor(divisor, "Quaternion / f64")?;
                Ok(Self::new(self.re / divisor, self.im.try_div(divisor)?))
            }
            Operand::Typed(divisor) => Ok(self * divisor.inverted()?),
        }
    }

    /// Divides the given scalar by this quaternion, giving the scalar times
    /// the inverse of the quaternion.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if this
    /// is the zero quaternion.
    pub fn try_div_scalar_by(&self, scalar: f64) -> Result<Self> {
        Ok(scalar * self.inverted()?)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 4]> for Quaternion {
    /// Creates a quaternion from `[w, x, y, z]`.
    #[inline]
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self::from_components(w, x, y, z)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        [q.w(), q.x(), q.y(), q.z()]
    }
}

impl_operand_from!(Quaternion);

impl DualComponent for Quaternion {
    #[inline]
    fn is_zero(&self) -> bool {
        self.max_abs_component() == 0.0
    }

    #[inline]
    fn try_div(&self, divisor: &Self) -> Result<Self> {
        Quaternion::try_div(self, divisor)
    }
}

impl_dual_component_ops!(Quaternion);

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.re + b.re, a.im + b.im)
});

impl_binop!(Add, add, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.re + *b, a.im + *b)
});

impl_binop!(Add, add, f64, Quaternion, Quaternion, |a, b| { b + *a });

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.re - b.re, a.im - b.im)
});

impl_binop!(Sub, sub, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.re - *b, a.im - *b)
});

impl_binop!(Sub, sub, f64, Quaternion, Quaternion, |a, b| {
    Quaternion::new(*a - b.re, *a - b.im)
});

// Hamilton product
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.re * b.re - a.im.dot(&b.im),
        a.re * b.im + b.re * a.im + a.im.cross(b.im),
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.re * *b, a.im * *b)
});

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |a, b| { b * *a });

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::new(-val.re, -val.im)
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.re.abs_diff_eq(&b.re, epsilon) && a.im.abs_diff_eq(&b.im, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.re.relative_eq(&b.re, epsilon, max_relative)
        && a.im.relative_eq(&b.im, epsilon, max_relative)
});

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + ({})i", self.re, self.im)
    }
}
