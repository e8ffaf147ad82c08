//! Crate-local macros.

macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        log::trace!(concat!("Begin: ", $message)$(,$arg)*);
        let _result = $expression;
        log::trace!(concat!("Done: ", $message)$(,$arg)*);
        _result
    }};
}

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                $crate::DEFAULT_EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f64::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements conversion from a bare scalar and from the given type into an
/// [`Operand`](crate::operand::Operand) over that type.
macro_rules! impl_operand_from {
    ($t:ty) => {
        impl ::std::convert::From<f64> for $crate::operand::Operand<$t> {
            #[inline]
            fn from(scalar: f64) -> Self {
                Self::Scalar(scalar)
            }
        }

        impl ::std::convert::From<$t> for $crate::operand::Operand<$t> {
            #[inline]
            fn from(value: $t) -> Self {
                Self::Typed(value)
            }
        }

        impl ::std::convert::From<&$t> for $crate::operand::Operand<$t> {
            #[inline]
            fn from(value: &$t) -> Self {
                Self::Typed(*value)
            }
        }
    };
}

/// Implements the mixed operations between a
/// [`DualNumber`](crate::DualNumber) and a bare value of its component type:
/// addition and subtraction act on the real part, multiplication (from the
/// right) scales both parts.
macro_rules! impl_dual_component_ops {
    ($t:ty) => {
        impl ::std::ops::Add<$t> for $crate::dual_number::DualNumber<$t> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $t) -> Self::Output {
                Self::new(self.real() + rhs, self.dual())
            }
        }

        impl ::std::ops::Sub<$t> for $crate::dual_number::DualNumber<$t> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $t) -> Self::Output {
                Self::new(self.real() - rhs, self.dual())
            }
        }

        impl ::std::ops::Mul<$t> for $crate::dual_number::DualNumber<$t> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self::Output {
                Self::new(self.real() * rhs, self.dual() * rhs)
            }
        }
    };
}
