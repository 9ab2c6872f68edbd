//! Arithmetic operators
//!
//! Addition and subtraction of the represented reals combine two
//! exponentials and go through the stable combinators. Multiplication,
//! division and powers are plain arithmetic on the log-magnitudes.
//!
//! | Operator | Log-space result |
//! |---|---|
//! | `a + b` | `logaddexp(la, lb)` |
//! | `a - b` | `logsubexp(la, lb)`, domain error when `la < lb` |
//! | `a * b` | `la + lb` |
//! | `a / b` | `la - lb` |
//! | `a.pow(b)` | `b * la`, `b` taken as an ordinary float |

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub};

use num_traits::Pow;

use crate::combine::{log_no_fp_error, logaddexp, logsubexp};
use crate::error::{LogError, LogResult};
use crate::operand::Operand;
use crate::value::LogFloat;

#[inline]
fn add_operands(a: Operand, b: Operand) -> LogFloat {
    LogFloat::from_log(logaddexp(a.log_magnitude(), b.log_magnitude()))
}

fn sub_operands(a: Operand, b: Operand) -> LogResult<LogFloat> {
    let (la, lb) = (a.log_magnitude(), b.log_magnitude());
    if la < lb {
        tracing::debug!(minuend = la, subtrahend = lb, "rejected negative difference");
        return Err(LogError::NegativeDifference);
    }
    Ok(LogFloat::from_log(logsubexp(la, lb)))
}

#[inline]
fn mul_operands(a: Operand, b: Operand) -> LogFloat {
    LogFloat::from_log(a.log_magnitude() + b.log_magnitude())
}

#[inline]
fn div_operands(a: Operand, b: Operand) -> LogFloat {
    LogFloat::from_log(a.log_magnitude() - b.log_magnitude())
}

/// The exponent is used as an ordinary float, never log-coerced.
#[inline]
fn pow_operands(base: Operand, exponent: Operand) -> LogFloat {
    LogFloat::from_log(exponent.to_f64() * base.log_magnitude())
}

impl LogFloat {
    /// Subtract, failing when the result would be negative.
    ///
    /// ```rust
    /// use logtypes_core::{LogError, LogFloat};
    ///
    /// let one = LogFloat::new(1.0);
    /// assert_eq!(one.checked_sub(one).unwrap().to_f64(), 0.0);
    /// assert_eq!(
    ///     LogFloat::new(0.5).checked_sub(one).unwrap_err(),
    ///     LogError::NegativeDifference
    /// );
    /// ```
    #[inline]
    pub fn checked_sub(self, rhs: impl Into<Operand>) -> LogResult<LogFloat> {
        sub_operands(Operand::Log(self), rhs.into())
    }

    /// Raise to an ordinary exponent.
    #[inline]
    pub fn powf(self, exponent: impl Into<Operand>) -> LogFloat {
        pow_operands(Operand::Log(self), exponent.into())
    }

    /// Reciprocal, `1 / self`.
    #[inline]
    pub fn recip(self) -> LogFloat {
        LogFloat::from_log(-self.log())
    }

    #[inline]
    pub fn square(self) -> LogFloat {
        LogFloat::from_log(2.0 * self.log())
    }

    #[inline]
    pub fn sqrt(self) -> LogFloat {
        LogFloat::from_log(self.log() / 2.0)
    }

    #[inline]
    pub fn cbrt(self) -> LogFloat {
        LogFloat::from_log(self.log() / 3.0)
    }

    /// `1` for a positive value, `0` for zero, NaN stays NaN.
    pub fn signum(self) -> LogFloat {
        if self.is_nan() {
            self
        } else if self.log() == f64::NEG_INFINITY {
            LogFloat::ZERO
        } else {
            LogFloat::ONE
        }
    }

    /// Natural logarithm of the represented value.
    ///
    /// Values below one have a negative logarithm, which has no
    /// representation and yields a NaN log-magnitude.
    ///
    /// ```rust
    /// use logtypes_core::LogFloat;
    ///
    /// let e = LogFloat::from_log(1.0);
    /// assert_eq!(e.ln(), LogFloat::ONE);
    /// assert!(LogFloat::new(0.5).ln().is_nan());
    /// ```
    #[inline]
    pub fn ln(self) -> LogFloat {
        LogFloat::from_log(log_no_fp_error(self.log()))
    }

    /// `e` raised to the represented value. The result's log-magnitude is
    /// the value itself.
    #[inline]
    pub fn exp(self) -> LogFloat {
        LogFloat::from_log(self.to_f64())
    }

    #[inline]
    pub fn exp2(self) -> LogFloat {
        LogFloat::from_log(self.to_f64() * std::f64::consts::LN_2)
    }

    /// `exp(x) - 1`, accurate for small values.
    #[inline]
    pub fn exp_m1(self) -> LogFloat {
        LogFloat::from_log(log_no_fp_error(self.to_f64().exp_m1()))
    }
}

impl<T: Into<Operand>> Add<T> for LogFloat {
    type Output = LogFloat;

    #[inline]
    fn add(self, rhs: T) -> LogFloat {
        add_operands(Operand::Log(self), rhs.into())
    }
}

/// Subtraction can fail, so its output is a `LogResult`.
impl<T: Into<Operand>> Sub<T> for LogFloat {
    type Output = LogResult<LogFloat>;

    #[inline]
    fn sub(self, rhs: T) -> LogResult<LogFloat> {
        sub_operands(Operand::Log(self), rhs.into())
    }
}

impl<T: Into<Operand>> Mul<T> for LogFloat {
    type Output = LogFloat;

    #[inline]
    fn mul(self, rhs: T) -> LogFloat {
        mul_operands(Operand::Log(self), rhs.into())
    }
}

impl<T: Into<Operand>> Div<T> for LogFloat {
    type Output = LogFloat;

    #[inline]
    fn div(self, rhs: T) -> LogFloat {
        div_operands(Operand::Log(self), rhs.into())
    }
}

impl<T: Into<Operand>> Pow<T> for LogFloat {
    type Output = LogFloat;

    #[inline]
    fn pow(self, rhs: T) -> LogFloat {
        pow_operands(Operand::Log(self), rhs.into())
    }
}

impl<T: Into<Operand>> AddAssign<T> for LogFloat {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Into<Operand>> MulAssign<T> for LogFloat {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Into<Operand>> DivAssign<T> for LogFloat {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! real_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<LogFloat> for $t {
                type Output = LogFloat;

                #[inline]
                fn add(self, rhs: LogFloat) -> LogFloat {
                    add_operands(Operand::from(self), Operand::Log(rhs))
                }
            }

            impl Sub<LogFloat> for $t {
                type Output = LogResult<LogFloat>;

                #[inline]
                fn sub(self, rhs: LogFloat) -> LogResult<LogFloat> {
                    sub_operands(Operand::from(self), Operand::Log(rhs))
                }
            }

            impl Mul<LogFloat> for $t {
                type Output = LogFloat;

                #[inline]
                fn mul(self, rhs: LogFloat) -> LogFloat {
                    mul_operands(Operand::from(self), Operand::Log(rhs))
                }
            }

            impl Div<LogFloat> for $t {
                type Output = LogFloat;

                #[inline]
                fn div(self, rhs: LogFloat) -> LogFloat {
                    div_operands(Operand::from(self), Operand::Log(rhs))
                }
            }

            impl Pow<LogFloat> for $t {
                type Output = LogFloat;

                #[inline]
                fn pow(self, rhs: LogFloat) -> LogFloat {
                    pow_operands(Operand::from(self), Operand::Log(rhs))
                }
            }
        )*
    };
}

real_lhs_ops!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

/// Binary operators, for callers that pick the operation at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn all() -> &'static [BinaryOp] {
        &[
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Pow,
        ]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }

    /// Apply to two operands. Either side may be a `LogFloat` or a number.
    ///
    /// ```rust
    /// use logtypes_core::{BinaryOp, LogFloat, Operand};
    ///
    /// let z = BinaryOp::Pow.apply(Operand::Real(3.0), LogFloat::new(4.0).into()).unwrap();
    /// assert!((z.log() - 4.0 * 3f64.ln()).abs() < 1e-14);
    /// ```
    pub fn apply(self, lhs: Operand, rhs: Operand) -> LogResult<LogFloat> {
        match self {
            BinaryOp::Add => Ok(add_operands(lhs, rhs)),
            BinaryOp::Sub => sub_operands(lhs, rhs),
            BinaryOp::Mul => Ok(mul_operands(lhs, rhs)),
            BinaryOp::Div => Ok(div_operands(lhs, rhs)),
            BinaryOp::Pow => Ok(pow_operands(lhs, rhs)),
        }
    }

    /// The same operation on ordinary floats.
    pub fn apply_real(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Pos,
    Abs,
    Neg,
}

impl UnaryOp {
    pub fn apply(self, value: LogFloat) -> LogResult<LogFloat> {
        match self {
            UnaryOp::Pos => Ok(value.pos()),
            UnaryOp::Abs => Ok(value.abs()),
            UnaryOp::Neg => value.checked_neg(),
        }
    }
}
