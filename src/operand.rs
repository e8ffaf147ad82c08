//! Operands accepted by the "scalar or same type" operations.

/// The right-hand side of an operation that accepts either a real scalar or a
/// value of the same type as the left-hand side.
///
/// Each operation decides how a [`Scalar`](Operand::Scalar) is lifted into
/// the typed domain, see for example [`Vector3::cross`](crate::Vector3::cross)
/// versus `Vector3 + f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<T> {
    Scalar(f64),
    Typed(T),
}

impl<T> Operand<T> {
    /// Whether this is a bare scalar.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Converts the operand into a typed value, using `lift` for a scalar.
    #[inline]
    pub fn into_typed(self, lift: impl FnOnce(f64) -> T) -> T {
        match self {
            Self::Scalar(scalar) => lift(scalar),
            Self::Typed(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;

    #[test]
    fn scalar_converts_into_scalar_operand() {
        let operand: Operand<Vector3> = 2.0.into();
        assert_eq!(operand, Operand::Scalar(2.0));
        assert!(operand.is_scalar());
    }

    #[test]
    fn value_converts_into_typed_operand() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let operand: Operand<Vector3> = (&v).into();
        assert_eq!(operand, Operand::Typed(v));
        assert!(!operand.is_scalar());
    }

    #[test]
    fn into_typed_lifts_scalar_with_given_rule() {
        let operand: Operand<Vector3> = 4.0.into();
        assert_eq!(
            operand.into_typed(|s| Vector3::new(s, 0.0, 0.0)),
            Vector3::new(4.0, 0.0, 0.0)
        );
    }
}
