//! Pure arithmetic operations backing the HTTP routes.
//!
//! Every function here is side-effect free and safe to call concurrently.
//! Integer operations use checked `i64` arithmetic: a result that does not fit
//! is reported as [`MathError::Overflow`] instead of wrapping or panicking.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Diagnostic returned in place of a quotient when the divisor is zero.
pub const DIVISION_BY_ZERO: &str = "Cannot divide by zero";

/// Failures an arithmetic operation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The exact result does not fit in a 64-bit signed integer.
    #[error("Result of {op} does not fit in a 64-bit integer")]
    Overflow { op: &'static str },
    /// `average` was given no numbers.
    #[error("Cannot average an empty list of numbers")]
    EmptyOperands,
    /// `factorial` was given a negative number.
    #[error("Factorial is undefined for negative numbers (got {0})")]
    NegativeFactorial(i64),
    /// `exponentiate` was asked for `0` raised to a negative power.
    #[error("Zero cannot be raised to a negative power (got exponent {0})")]
    ZeroToNegativePower(i64),
}

/// A numeric result that is either exact or real.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Real(f64),
}

/// Outcome of [`divide`]: a real quotient, or the in-band division-by-zero
/// diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quotient {
    Value(f64),
    DivisionByZero,
}

impl Serialize for Quotient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quotient::Value(v) => serializer.serialize_f64(*v),
            Quotient::DivisionByZero => serializer.serialize_str(DIVISION_BY_ZERO),
        }
    }
}

pub fn add(a: i64, b: i64) -> Result<i64, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow { op: "add" })
}

pub fn multiply(a: i64, b: i64) -> Result<i64, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow { op: "multiply" })
}

/// `a - b`.
pub fn subtract(a: i64, b: i64) -> Result<i64, MathError> {
    a.checked_sub(b).ok_or(MathError::Overflow { op: "subtract" })
}

/// True division of `a` by `b`.
///
/// A zero divisor is not an error: it yields [`Quotient::DivisionByZero`],
/// which callers receive as a string in the `result` field.
#[allow(clippy::cast_precision_loss)]
pub fn divide(a: i64, b: i64) -> Quotient {
    if b == 0 {
        return Quotient::DivisionByZero;
    }
    Quotient::Value(a as f64 / b as f64)
}

/// Raise `base` to `exponent`.
///
/// Non-negative exponents produce an exact [`Number::Int`]. Negative exponents
/// produce a [`Number::Real`] (`2^-1 = 0.5`), except for a zero base, which
/// has no finite result.
#[allow(clippy::cast_precision_loss)]
pub fn exponentiate(base: i64, exponent: i64) -> Result<Number, MathError> {
    const OVERFLOW: MathError = MathError::Overflow { op: "exponentiate" };

    if exponent < 0 {
        if base == 0 {
            return Err(MathError::ZeroToNegativePower(exponent));
        }
        return Ok(Number::Real((base as f64).powf(exponent as f64)));
    }
    let Ok(exp) = u32::try_from(exponent) else {
        // Only the bases whose powers stay bounded survive huge exponents.
        return match base {
            0 => Ok(Number::Int(0)),
            1 => Ok(Number::Int(1)),
            -1 => Ok(Number::Int(if exponent % 2 == 0 { 1 } else { -1 })),
            _ => Err(OVERFLOW),
        };
    };
    base.checked_pow(exp).map(Number::Int).ok_or(OVERFLOW)
}

/// Arithmetic mean of `numbers`.
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[i64]) -> Result<f64, MathError> {
    if numbers.is_empty() {
        return Err(MathError::EmptyOperands);
    }
    let sum: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    Ok(sum as f64 / numbers.len() as f64)
}

/// `n!`, computed iteratively.
pub fn factorial(n: i64) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::NegativeFactorial(n));
    }
    (2..=n).try_fold(1i64, |acc, k| {
        acc.checked_mul(k)
            .ok_or(MathError::Overflow { op: "factorial" })
    })
}

/// Extension point for the next operation. Currently behaves as [`subtract`].
pub fn new_function(a: i64, b: i64) -> Result<i64, MathError> {
    subtract(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_commutes() {
        for (a, b) in [(2, 3), (-7, 4), (0, 0), (i64::MAX, -1)] {
            assert_eq!(add(a, b), add(b, a));
        }
        assert_eq!(add(2, 3).unwrap(), 5);
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(i64::MAX, 1), Err(MathError::Overflow { op: "add" }));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(6, 7).unwrap(), 42);
        assert_eq!(multiply(-3, 4).unwrap(), -12);
        assert!(multiply(i64::MAX, 2).is_err());
    }

    #[test]
    fn test_subtract_antisymmetric() {
        for (a, b) in [(10, 3), (-5, 8), (0, 0)] {
            assert_eq!(subtract(a, b).unwrap(), -subtract(b, a).unwrap());
        }
    }

    #[test]
    fn test_subtract_overflow() {
        assert!(subtract(i64::MIN, 1).is_err());
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 4), Quotient::Value(2.5));
        assert_eq!(divide(-9, 3), Quotient::Value(-3.0));
        for (a, b) in [(7, 3), (1, 9), (-100, 7)] {
            let Quotient::Value(q) = divide(a, b) else {
                panic!("unexpected division by zero");
            };
            assert!((q * b as f64 - a as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        for a in [0, 1, -10, i64::MAX] {
            assert_eq!(divide(a, 0), Quotient::DivisionByZero);
        }
        assert_eq!(
            serde_json::to_value(divide(10, 0)).unwrap(),
            serde_json::json!("Cannot divide by zero")
        );
        assert_eq!(
            serde_json::to_value(divide(5, 2)).unwrap(),
            serde_json::json!(2.5)
        );
    }

    #[test]
    fn test_exponentiate() {
        assert_eq!(exponentiate(2, 10).unwrap(), Number::Int(1024));
        assert_eq!(exponentiate(5, 0).unwrap(), Number::Int(1));
        assert_eq!(exponentiate(0, 0).unwrap(), Number::Int(1));
        assert_eq!(exponentiate(-3, 3).unwrap(), Number::Int(-27));
    }

    #[test]
    fn test_exponentiate_negative_exponent() {
        assert_eq!(exponentiate(2, -1).unwrap(), Number::Real(0.5));
        assert_eq!(exponentiate(4, -2).unwrap(), Number::Real(0.0625));
        assert_eq!(exponentiate(-2, -3).unwrap(), Number::Real(-0.125));
    }

    #[test]
    fn test_exponentiate_zero_to_negative_power() {
        assert_eq!(exponentiate(0, -1), Err(MathError::ZeroToNegativePower(-1)));
        assert_eq!(
            exponentiate(0, i64::MIN),
            Err(MathError::ZeroToNegativePower(i64::MIN))
        );
    }

    #[test]
    fn test_exponentiate_large_exponent() {
        assert!(exponentiate(2, 64).is_err());
        assert!(exponentiate(3, i64::MAX).is_err());
        assert_eq!(exponentiate(1, i64::MAX).unwrap(), Number::Int(1));
        assert_eq!(exponentiate(-1, 5_000_000_001).unwrap(), Number::Int(-1));
        assert_eq!(exponentiate(0, 5_000_000_000).unwrap(), Number::Int(0));
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[5]).unwrap(), 5.0);
        assert_eq!(average(&[1, 2, 3]).unwrap(), 2.0);
        assert_eq!(average(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(average(&[i64::MAX, i64::MAX]).unwrap(), i64::MAX as f64);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), Err(MathError::EmptyOperands));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_rejects_bad_input() {
        assert_eq!(factorial(-1), Err(MathError::NegativeFactorial(-1)));
        assert_eq!(factorial(21), Err(MathError::Overflow { op: "factorial" }));
    }

    #[test]
    fn test_new_function_matches_subtract() {
        assert_eq!(new_function(9, 4), subtract(9, 4));
    }

    #[test]
    fn test_number_serializes_bare() {
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Number::Real(0.5)).unwrap(), "0.5");
    }
}
