//! Dual numbers.

use crate::error::{AlgebraError, Result};
use approx::{AbsDiffEq, RelativeEq};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// A number `real + dual·ε` with `ε² = 0`.
///
/// The component type only needs to form a ring with a fallible division (see
/// [`DualComponent`]), so besides real scalars the components may be
/// [`Quaternion`](crate::Quaternion)s. Note that the multiplication and
/// division rules assume commutative components; with quaternion components
/// the products keep their operand order but the quotient is not meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualNumber<T> {
    real: T,
    dual: T,
}

/// Operations required of the components of a [`DualNumber`].
pub trait DualComponent:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Whether the value is the additive identity.
    fn is_zero(&self) -> bool;

    /// Divides `self` by `divisor`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if `divisor` is zero.
    fn try_div(&self, divisor: &Self) -> Result<Self>;
}

macro_rules! impl_dual_component_for_float {
    ($f:ty) => {
        impl DualComponent for $f {
            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            #[inline]
            fn try_div(&self, divisor: &Self) -> Result<Self> {
                if divisor.is_zero() {
                    Err(AlgebraError::division_by_zero(concat!(
                        stringify!($f),
                        " / ",
                        stringify!($f)
                    )))
                } else {
                    Ok(*self / *divisor)
                }
            }
        }
    };
}

impl_dual_component_for_float!(f32);
impl_dual_component_for_float!(f64);

impl_dual_component_ops!(f32);
impl_dual_component_ops!(f64);

impl<T> DualNumber<T> {
    /// Creates a dual number with the given real and dual parts.
    #[inline]
    pub const fn new(real: T, dual: T) -> Self {
        Self { real, dual }
    }

    /// Sets the real part.
    #[inline]
    pub fn set_real(&mut self, real: T) {
        self.real = real;
    }

    /// Sets the dual part.
    #[inline]
    pub fn set_dual(&mut self, dual: T) {
        self.dual = dual;
    }

    /// Consumes the number and returns its `(real, dual)` parts.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.real, self.dual)
    }
}

impl<T: Copy> DualNumber<T> {
    /// The real part.
    #[inline]
    pub fn real(&self) -> T {
        self.real
    }

    /// The dual part.
    #[inline]
    pub fn dual(&self) -> T {
        self.dual
    }
}

impl<T: DualComponent> DualNumber<T> {
    /// Negates the dual part in place.
    #[inline]
    pub fn conjugate(&mut self) {
        self.dual = -self.dual;
    }

    /// Returns the conjugate `real - dual·ε`.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(self.real, -self.dual)
    }

    /// Computes `(real·real, real·dual − dual·real)`.
    ///
    /// For commutative components the dual part is always zero.
    #[inline]
    pub fn magnitude(&self) -> Self {
        Self::new(
            self.real * self.real,
            self.real * self.dual - self.dual * self.real,
        )
    }

    /// Computes `(a + bε) / (c + dε) = a/c + ((bc − ad)/c²)ε`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the real part of the
    /// divisor is zero.
    pub fn try_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.real.is_zero() {
            return Err(AlgebraError::division_by_zero("DualNumber / DualNumber"));
        }
        let real = self.real.try_div(&divisor.real)?;
        let dual = (self.dual * divisor.real - self.real * divisor.dual)
            .try_div(&(divisor.real * divisor.real))?;
        Ok(Self::new(real, dual))
    }

    /// Divides both parts by the given component value.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the divisor is zero.
    pub fn try_div_component(&self, divisor: T) -> Result<Self> {
        Ok(Self::new(
            self.real.try_div(&divisor)?,
            self.dual.try_div(&divisor)?,
        ))
    }
}

impl Default for DualNumber<f64> {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Default for DualNumber<f32> {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl<T: DualComponent> Add for DualNumber<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<T: DualComponent> Sub for DualNumber<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl<T: DualComponent> Mul for DualNumber<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl<T: DualComponent> Neg for DualNumber<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.dual)
    }
}

impl<T> AbsDiffEq for DualNumber<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon)
            && self.dual.abs_diff_eq(&other.dual, epsilon)
    }
}

impl<T> RelativeEq for DualNumber<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.real.relative_eq(&other.real, epsilon, max_relative)
            && self.dual.relative_eq(&other.dual, epsilon, max_relative)
    }
}

impl<T: fmt::Display> fmt::Display for DualNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + ({})e", self.real, self.dual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn default_dual_number_is_one() {
        let d = DualNumber::<f64>::default();
        assert_eq!(d.real(), 1.0);
        assert_eq!(d.dual(), 0.0);
    }

    #[test]
    fn dual_number_arithmetic_works() {
        let a = DualNumber::new(2.0_f64, 3.0);
        let b = DualNumber::new(4.0_f64, 5.0);

        assert_eq!(a + b, DualNumber::new(6.0_f64, 8.0));
        assert_eq!(a - b, DualNumber::new(-2.0_f64, -2.0));
        // 2*4 + (2*5 + 3*4)ε
        assert_eq!(a * b, DualNumber::new(8.0_f64, 22.0));
        assert_eq!(-a, DualNumber::new(-2.0_f64, -3.0));
    }

    #[test]
    fn scalar_addition_only_affects_real_part() {
        let a = DualNumber::new(2.0_f64, 3.0);
        assert_eq!(a + 1.0, DualNumber::new(3.0_f64, 3.0));
        assert_eq!(a - 1.0, DualNumber::new(1.0_f64, 3.0));
    }

    #[test]
    fn scalar_multiplication_scales_both_parts() {
        let a = DualNumber::new(2.0_f64, 3.0);
        assert_eq!(a * 2.0, DualNumber::new(4.0_f64, 6.0));
    }

    #[test]
    fn dual_number_division_works() {
        let a = DualNumber::new(8.0_f64, 22.0);
        let b = DualNumber::new(4.0_f64, 5.0);
        assert_abs_diff_eq!(
            a.try_div(&b).unwrap(),
            DualNumber::new(2.0_f64, 3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn dividing_by_pure_dual_number_fails() {
        let a = DualNumber::new(1.0_f64, 1.0);
        let b = DualNumber::new(0.0_f64, 1.0);
        assert_eq!(
            a.try_div(&b),
            Err(AlgebraError::DivisionByZero {
                operation: "DualNumber / DualNumber"
            })
        );
    }

    #[test]
    fn dividing_by_component_divides_both_parts() {
        let a = DualNumber::new(2.0_f64, 3.0);
        assert_abs_diff_eq!(
            a.try_div_component(2.0).unwrap(),
            DualNumber::new(1.0_f64, 1.5),
            epsilon = EPSILON
        );
        assert!(a.try_div_component(0.0).is_err());
    }

    #[test]
    fn conjugating_negates_dual_part_in_place() {
        let mut a = DualNumber::new(2.0_f64, 3.0);
        a.conjugate();
        assert_eq!(a, DualNumber::new(2.0_f64, -3.0));
        assert_eq!(a.conjugated(), DualNumber::new(2.0_f64, 3.0));
    }

    #[test]
    fn dual_number_display_works() {
        assert_eq!(DualNumber::new(1.5_f64, -2.0).to_string(), "1.5 + (-2)e");
    }

    #[test]
    fn dual_number_works_with_f32_components() {
        let a = DualNumber::new(1.0_f32, 2.0);
        let b = DualNumber::<f32>::default();
        assert_eq!(a * b, a);
    }

    proptest! {
        #[test]
        fn magnitude_of_scalar_dual_number_has_zero_dual_part(
            real in -1e6..1e6_f64,
            dual in -1e6..1e6_f64,
        ) {
            let magnitude = DualNumber::new(real, dual).magnitude();
            prop_assert_eq!(magnitude.dual(), 0.0);
            prop_assert_eq!(magnitude.real(), real * real);
        }

        #[test]
        fn multiplying_then_dividing_is_identity(
            a_real in -10.0..10.0_f64,
            a_dual in -10.0..10.0_f64,
            b_real in 0.5..10.0_f64,
            b_dual in -10.0..10.0_f64,
        ) {
            let a = DualNumber::new(a_real, a_dual);
            let b = DualNumber::new(b_real, b_dual);
            let quotient = (a * b).try_div(&b).unwrap();
            prop_assert!(quotient.abs_diff_eq(&a, 1e-9));
        }
    }
}
