//! Dual quaternions.

use crate::{
    dual_number::DualNumber,
    error::{Result, nonzero_divisor},
    quaternion::Quaternion,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A dual quaternion `real + dual·ε`, where the real quaternion holds the
/// rotation of a rigid transform and the dual quaternion holds its
/// translation coupled with the rotation.
///
/// Composing two transforms is a single multiplication. The norm, inverse and
/// normalization are computed through (non-commutative) quaternion products
/// rather than through the commutative rules of [`DualNumber`].
///
/// Defaults to the identity transform.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct DualQuaternion {
    real: Quaternion,
    dual: Quaternion,
}

impl DualQuaternion {
    /// Creates a dual quaternion from its real and dual quaternions.
    #[inline]
    pub const fn new(real: Quaternion, dual: Quaternion) -> Self {
        Self { real, dual }
    }

    /// The identity transform, with identity real part and zero dual part.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(Quaternion::identity(), Quaternion::zero())
    }

    /// The real (rotation) quaternion.
    #[inline]
    pub const fn real(&self) -> &Quaternion {
        &self.real
    }

    /// The dual quaternion.
    #[inline]
    pub const fn dual(&self) -> &Quaternion {
        &self.dual
    }

    /// Mutable access to the real quaternion.
    #[inline]
    pub fn real_mut(&mut self) -> &mut Quaternion {
        &mut self.real
    }

    /// Mutable access to the dual quaternion.
    #[inline]
    pub fn dual_mut(&mut self) -> &mut Quaternion {
        &mut self.dual
    }

    /// Computes the dual-number norm `(|r|, [(r̄d + d̄r) / 2|r|].w)`, where
    /// `r` and `d` are the real and dual quaternions and the bar denotes
    /// quaternion conjugation.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// real quaternion is zero.
    pub fn norm(&self) -> Result<DualNumber<f64>> {
        let real_magnitude = nonzero_divisor(self.real.magnitude(), "DualQuaternion::norm")?;
        let sum = self.real.conjugated() * self.dual + self.dual.conjugated() * self.real;
        let dual = sum.try_div(2.0 * real_magnitude)?.w();
        Ok(DualNumber::new(real_magnitude, dual))
    }

    /// Inverts the dual quaternion in place. With `n` the square of the
    /// [`norm`](Self::norm), the new parts are `r̄ / n.real` and
    /// `d̄ n.real − r̄ n.dual`.
    ///
    /// For a unit dual quaternion this is the inverse transform. Applying it
    /// twice gives back the original value for any non-zero real part.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// real quaternion is zero, in which case nothing is modified.
    pub fn inverse(&mut self) -> Result<()> {
        with_trace_logging!("Inverting dual quaternion {}", self; self.invert_in_place())
    }

    /// # Errors
    /// See [`Self::inverse`].
    pub fn inverted(&self) -> Result<Self> {
        let mut inverted = *self;
        inverted.inverse()?;
        Ok(inverted)
    }

    /// Scales the dual quaternion to unit norm in place, so that the real
    /// quaternion gets unit magnitude and becomes orthogonal to the dual
    /// quaternion.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// real quaternion is zero, in which case nothing is modified.
    pub fn normalize(&mut self) -> Result<()> {
        with_trace_logging!("Normalizing dual quaternion {}", self; self.normalize_in_place())
    }

    /// # Errors
    /// See [`Self::normalize`].
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }

    /// Conjugates the real and dual quaternions independently.
    #[inline]
    pub fn quaternion_conjugate(&mut self) {
        self.real.conjugate();
        self.dual.conjugate();
    }

    /// Conjugates both quaternions and then negates the dual part, giving
    /// `r̄ − d̄ε`.
    #[inline]
    pub fn conjugate(&mut self) {
        self.quaternion_conjugate();
        self.dual = -self.dual;
    }

    /// Returns the result of [`Self::conjugate`].
    #[inline]
    pub fn conjugated(&self) -> Self {
        let mut conjugated = *self;
        conjugated.conjugate();
        conjugated
    }

    /// Divides both quaternions by the given scalar.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// scalar is zero.
    pub fn try_div(&self, divisor: f64) -> Result<Self> {
        let divisor = nonzero_divisor(divisor, "DualQuaternion / f64")?;
        Ok(Self::new(
            self.real.try_div(divisor)?,
            self.dual.try_div(divisor)?,
        ))
    }

    fn invert_in_place(&mut self) -> Result<()> {
        let norm = self.norm()?;
        let norm_squared = norm * norm;
        let real_conjugate = self.real.conjugated();
        let dual_conjugate = self.dual.conjugated();

        let real = real_conjugate.try_div(norm_squared.real())?;
        self.dual = dual_conjugate * norm_squared.real() - real_conjugate * norm_squared.dual();
        self.real = real;
        Ok(())
    }

    fn normalize_in_place(&mut self) -> Result<()> {
        let norm = self.norm()?;
        let dual = (self.dual * norm.real() - self.real * norm.dual())
            .try_div(norm.real() * norm.real())?;
        self.real = self.real.try_div(norm.real())?;
        self.dual = dual;
        Ok(())
    }
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<DualQuaternion> for DualNumber<Quaternion> {
    #[inline]
    fn from(dq: DualQuaternion) -> Self {
        DualNumber::new(dq.real, dq.dual)
    }
}

impl From<DualNumber<Quaternion>> for DualQuaternion {
    #[inline]
    fn from(dual_number: DualNumber<Quaternion>) -> Self {
        let (real, dual) = dual_number.into_parts();
        Self::new(real, dual)
    }
}

impl_binop!(Add, add, DualQuaternion, DualQuaternion, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real + b.real, a.dual + b.dual)
});

impl_binop!(Sub, sub, DualQuaternion, DualQuaternion, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real - b.real, a.dual - b.dual)
});

impl_binop!(Add, add, DualQuaternion, f64, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real + *b, a.dual)
});

impl_binop!(Add, add, f64, DualQuaternion, DualQuaternion, |a, b| { b + *a });

impl_binop!(Sub, sub, DualQuaternion, f64, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real - *b, a.dual)
});

impl_binop!(Sub, sub, f64, DualQuaternion, DualQuaternion, |a, b| {
    DualQuaternion::new(*a - b.real, -b.dual)
});

// Composition of transforms, `b` applied first
impl_binop!(Mul, mul, DualQuaternion, DualQuaternion, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real * b.real, a.real * b.dual + a.dual * b.real)
});

impl_binop!(Mul, mul, DualQuaternion, f64, DualQuaternion, |a, b| {
    DualQuaternion::new(a.real * *b, a.dual * *b)
});

impl_binop!(Mul, mul, f64, DualQuaternion, DualQuaternion, |a, b| { b * *a });

impl_unary_op!(Neg, neg, DualQuaternion, DualQuaternion, |val| {
    DualQuaternion::new(-val.real, -val.dual)
});

impl_binop_assign!(MulAssign, mul_assign, DualQuaternion, DualQuaternion, |a, b| {
    *a = *a * b;
});

impl_abs_diff_eq!(DualQuaternion, |a, b, epsilon| {
    a.real.abs_diff_eq(&b.real, epsilon) && a.dual.abs_diff_eq(&b.dual, epsilon)
});

impl_relative_eq!(DualQuaternion, |a, b, epsilon, max_relative| {
    a.real.relative_eq(&b.real, epsilon, max_relative)
        && a.dual.relative_eq(&b.dual, epsilon, max_relative)
});

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DualNumber::<Quaternion>::from(*self))
    }
}
