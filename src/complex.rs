//! Complex numbers.

use crate::{
    error::{Result, nonzero_divisor},
    operand::Operand,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A complex number with real part `re` and imaginary part `im`.
///
/// Defaults to `1 + 0i`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Creates a complex number with the given real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a complex number with zero imaginary part.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// The real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// The imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Sets the real part.
    #[inline]
    pub fn set_re(&mut self, re: f64) {
        self.re = re;
    }

    /// Sets the imaginary part.
    #[inline]
    pub fn set_im(&mut self, im: f64) {
        self.im = im;
    }

    /// Computes `re² + im²`.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Computes `sqrt(re² + im²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Negates the imaginary part in place.
    #[inline]
    pub fn conjugate(&mut self) {
        self.im = -self.im;
    }

    /// Returns the conjugate `re - im·i`.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns the conjugate divided by the magnitude (not the squared
    /// magnitude), so this is only the multiplicative inverse for numbers of
    /// unit magnitude.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) for zero.
    pub fn inverse(&self) -> Result<Self> {
        let magnitude = nonzero_divisor(self.magnitude(), "Complex::inverse")?;
        let conjugate = self.conjugated();
        Ok(Self::new(conjugate.re / magnitude, conjugate.im / magnitude))
    }

    /// Divides this number by a scalar (taken as `s + 0i`) or another complex
    /// number `b`, giving
    ///
    /// ```text
    /// ((b.re * a.re + b.im * a.im) / |a|, (b.im * a.re - b.re * a.im) / |a|)
    /// ```
    ///
    /// where `a` is `self`. Note that the result is scaled by the magnitude of
    /// the dividend rather than by that of the divisor, so it does not agree
    /// with conventional complex division.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if `self`
    /// has zero magnitude.
    pub fn try_div(&self, divisor: impl Into<Operand<Self>>) -> Result<Self> {
        let b = divisor.into().into_typed(Self::from_real);
        let magnitude = nonzero_divisor(self.magnitude(), "Complex / Complex")?;
        Ok(Self::new(
            (b.re * self.re + b.im * self.im) / magnitude,
            (b.im * self.re - b.re * self.im) / magnitude,
        ))
    }

    /// Divides the given scalar by this number, using the formula of
    /// [`Self::try_div`] with `scalar + 0i` as the dividend.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`](crate::AlgebraError) if the
    /// scalar is zero.
    pub fn try_div_scalar_by(&self, scalar: f64) -> Result<Self> {
        Self::from_real(scalar).try_div(self)
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::from_real(1.0)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl_operand_from!(Complex);

impl_binop!(Add, add, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re + b.re, a.im + b.im)
});

impl_binop!(Add, add, Complex, f64, Complex, |a, b| {
    a + Complex::from_real(*b)
});

impl_binop!(Add, add, f64, Complex, Complex, |a, b| {
    Complex::from_real(*a) + b
});

impl_binop!(Sub, sub, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re - b.re, a.im - b.im)
});

impl_binop!(Sub, sub, Complex, f64, Complex, |a, b| {
    a - Complex::from_real(*b)
});

impl_binop!(Sub, sub, f64, Complex, Complex, |a, b| {
    Complex::from_real(*a) - b
});

impl_binop!(Mul, mul, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
});

impl_binop!(Mul, mul, Complex, f64, Complex, |a, b| {
    a * Complex::from_real(*b)
});

impl_binop!(Mul, mul, f64, Complex, Complex, |a, b| {
    Complex::from_real(*a) * b
});

impl_unary_op!(Neg, neg, Complex, Complex, |val| {
    Complex::new(-val.re, -val.im)
});

impl_binop_assign!(AddAssign, add_assign, Complex, Complex, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Complex, Complex, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Complex, Complex, |a, b| {
    *a = *a * b;
});

impl_abs_diff_eq!(Complex, |a, b, epsilon| {
    a.re.abs_diff_eq(&b.re, epsilon) && a.im.abs_diff_eq(&b.im, epsilon)
});

impl_relative_eq!(Complex, |a, b, epsilon, max_relative| {
    a.re.relative_eq(&b.re, epsilon, max_relative)
        && a.im.relative_eq(&b.im, epsilon, max_relative)
});

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::AlgebraError;
    use approx::{AbsDiffEq, assert_abs_diff_eq};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    fn literal_quotient(a: Complex, b: Complex) -> Complex {
        let m = (a.re() * a.re() + a.im() * a.im()).sqrt();
        Complex::new(
            (b.re() * a.re() + b.im() * a.im()) / m,
            (b.im() * a.re() - b.re() * a.im()) / m,
        )
    }

    #[test]
    fn default_complex_is_one() {
        assert_eq!(Complex::default(), Complex::new(1.0, 0.0));
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(3.0, 4.0).norm_squared(), 25.0);
    }

    #[test]
    fn conjugating_negates_imaginary_part_in_place() {
        let mut z = Complex::new(1.0, 2.0);
        z.conjugate();
        assert_eq!(z, Complex::new(1.0, -2.0));
        assert_eq!(z.conjugated(), Complex::new(1.0, 2.0));
    }

    #[test]
    fn complex_arithmetic_operations_work() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);

        assert_eq!(&a + &b, Complex::new(4.0, 1.0));
        assert_eq!(&a - &b, Complex::new(-2.0, 3.0));
        assert_eq!(&a * &b, Complex::new(5.0, 5.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn scalar_operands_act_on_real_part() {
        let a = Complex::new(1.0, 2.0);

        assert_eq!(a + 2.0, Complex::new(3.0, 2.0));
        assert_eq!(2.0 + a, Complex::new(3.0, 2.0));
        assert_eq!(a - 2.0, Complex::new(-1.0, 2.0));
        assert_eq!(2.0 - a, Complex::new(1.0, -2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0 * a, Complex::new(2.0, 4.0));
    }

    #[test]
    fn complex_assignment_operations_work() {
        let mut z = Complex::new(1.0, 1.0);
        z += Complex::new(1.0, 0.0);
        assert_eq!(z, Complex::new(2.0, 1.0));
        z -= Complex::new(0.0, 1.0);
        assert_eq!(z, Complex::new(2.0, 0.0));
        z *= Complex::new(0.0, 1.0);
        assert_eq!(z, Complex::new(0.0, 2.0));
    }

    #[test]
    fn inverse_is_conjugate_over_magnitude() {
        let z = Complex::new(3.0, 4.0);
        assert_abs_diff_eq!(
            z.inverse().unwrap(),
            Complex::new(0.6, -0.8),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverse_of_unit_number_is_reciprocal() {
        let z = Complex::new(0.6, 0.8);
        let product = z * z.inverse().unwrap();
        assert_abs_diff_eq!(product, Complex::new(1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(matches!(
            Complex::new(0.0, 0.0).inverse(),
            Err(AlgebraError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn division_is_scaled_by_dividend_magnitude() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);
        // ((1*3 + 2*4) / 5, (2*3 - 1*4) / 5)
        assert_abs_diff_eq!(
            a.try_div(b).unwrap(),
            Complex::new(2.2, 0.4),
            epsilon = EPSILON
        );
    }

    #[test]
    fn dividing_by_scalar_uses_scalar_as_real_number() {
        let a = Complex::new(3.0, 4.0);
        assert_abs_diff_eq!(
            a.try_div(5.0).unwrap(),
            Complex::new(3.0, -4.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn dividing_zero_fails() {
        let zero = Complex::new(0.0, 0.0);
        assert!(matches!(
            zero.try_div(Complex::new(1.0, 1.0)),
            Err(AlgebraError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn dividing_scalar_by_complex_uses_scalar_as_dividend() {
        let z = Complex::new(1.0, 2.0);
        assert_abs_diff_eq!(
            z.try_div_scalar_by(2.0).unwrap(),
            Complex::new(1.0, 2.0),
            epsilon = EPSILON
        );
        assert!(z.try_div_scalar_by(0.0).is_err());
    }

    #[test]
    fn complex_display_works() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 + -2i");
    }

    proptest! {
        #[test]
        fn dividing_product_follows_literal_formula(
            a_re in -10.0..10.0_f64,
            a_im in -10.0..10.0_f64,
            b_re in -10.0..10.0_f64,
            b_im in -10.0..10.0_f64,
        ) {
            let a = Complex::new(a_re, a_im);
            let b = Complex::new(b_re, b_im);
            prop_assume!(b.magnitude() > 1e-3);
            let product = a * b;
            prop_assume!(product.magnitude() > 1e-6);

            let quotient = product.try_div(b).unwrap();
            let expected = literal_quotient(product, b);
            prop_assert!(quotient.abs_diff_eq(&expected, 1e-9));
        }
    }
}
