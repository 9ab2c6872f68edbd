//! The log-valued number type
//!
//! A `LogFloat` represents a non-negative real `x` by storing `ln(x)`:
//! - `log == -inf` is zero
//! - `log == NaN` is the invalid state left by a silent domain error

use std::fmt;
use std::str::FromStr;

use num_traits::{One, ToPrimitive, Zero};

use crate::error::{LogError, LogResult};
use crate::operand::Operand;

/// Non-negative real number stored as its natural logarithm.
///
/// ```rust
/// use logtypes_core::LogFloat;
///
/// let p = LogFloat::from_log(-1200.0);
/// let q = p * p;
/// assert_eq!(q.log(), -2400.0);
/// assert_eq!(q.to_f64(), 0.0); // underflows only when converted
/// ```
#[derive(Clone, Copy)]
pub struct LogFloat {
    log: f64,
}

impl Default for LogFloat {
    fn default() -> Self {
        LogFloat::ZERO
    }
}

impl LogFloat {
    pub const ZERO: LogFloat = LogFloat {
        log: f64::NEG_INFINITY,
    };
    pub const ONE: LogFloat = LogFloat { log: 0.0 };

    pub(crate) const DISPLAY_PREFIX: &'static str = "logfloat(log=";

    /// Construct from an ordinary number or another `LogFloat`.
    ///
    /// Negative numbers do not fail: they yield a NaN log-magnitude.
    #[inline]
    pub fn new(value: impl Into<Operand>) -> Self {
        LogFloat {
            log: value.into().log_magnitude(),
        }
    }

    /// Construct directly from a log-magnitude.
    #[inline]
    pub const fn from_log(log: f64) -> Self {
        LogFloat { log }
    }

    /// The natural log of the represented value.
    #[inline]
    pub fn log(self) -> f64 {
        self.log
    }

    /// Convert to an ordinary float. Extreme magnitudes give `inf` or `0.0`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.log.exp()
    }

    /// Real part: the value itself.
    #[inline]
    pub fn real(self) -> Self {
        self
    }

    /// Imaginary part: always zero.
    #[inline]
    pub fn imag(self) -> f64 {
        0.0
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        self
    }

    /// False only for exact zero. A NaN value is truthy.
    #[inline]
    pub fn is_truthy(self) -> bool {
        self.log != f64::NEG_INFINITY
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.log.is_nan()
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Absolute value. Every `LogFloat` is already non-negative.
    #[inline]
    pub fn abs(self) -> Self {
        self
    }

    /// Negation is never representable.
    pub fn checked_neg(self) -> LogResult<LogFloat> {
        tracing::debug!(log = self.log, "rejected negation");
        Err(LogError::Negation)
    }
}

/// Arguments of the dynamic constructor: an optional positional value and
/// an optional `log` keyword, at most one of which may be given.
///
/// ```rust
/// use logtypes_core::{LogError, LogFloatArgs};
///
/// assert_eq!(LogFloatArgs::new().build().unwrap().to_f64(), 0.0);
/// assert_eq!(LogFloatArgs::new().log(0.0).build().unwrap().to_f64(), 1.0);
/// assert_eq!(
///     LogFloatArgs::new().value(3).log(1.5).build().unwrap_err(),
///     LogError::ConflictingArguments
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFloatArgs {
    pub value: Option<Operand>,
    pub log: Option<f64>,
}

impl LogFloatArgs {
    pub fn new() -> Self {
        LogFloatArgs::default()
    }

    pub fn value(mut self, value: impl Into<Operand>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn log(mut self, log: f64) -> Self {
        self.log = Some(log);
        self
    }

    pub fn build(self) -> LogResult<LogFloat> {
        match (self.value, self.log) {
            (Some(_), Some(_)) => Err(LogError::ConflictingArguments),
            (Some(value), None) => Ok(LogFloat::new(value)),
            (None, Some(log)) => Ok(LogFloat::from_log(log)),
            (None, None) => Ok(LogFloat::ZERO),
        }
    }
}

impl TryFrom<LogFloatArgs> for LogFloat {
    type Error = LogError;

    fn try_from(args: LogFloatArgs) -> Result<Self, Self::Error> {
        args.build()
    }
}

macro_rules! log_float_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogFloat {
                #[inline]
                fn from(v: $t) -> Self {
                    LogFloat::new(v)
                }
            }
        )*
    };
}

log_float_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<LogFloat> for f64 {
    #[inline]
    fn from(value: LogFloat) -> Self {
        value.to_f64()
    }
}

impl ToPrimitive for LogFloat {
    fn to_i64(&self) -> Option<i64> {
        self.log.exp().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.log.exp().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.log.exp().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.log.exp().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.log.exp())
    }
}

impl Zero for LogFloat {
    fn zero() -> Self {
        LogFloat::ZERO
    }

    fn is_zero(&self) -> bool {
        !self.is_truthy()
    }
}

impl One for LogFloat {
    fn one() -> Self {
        LogFloat::ONE
    }
}

impl fmt::Display for LogFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.log.is_nan() {
            return write!(f, "{}nan)", LogFloat::DISPLAY_PREFIX);
        }
        // `{:?}` on f64 is the shortest text that parses back to the same bits
        write!(f, "{}{:?})", LogFloat::DISPLAY_PREFIX, self.log)
    }
}

impl fmt::Debug for LogFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for LogFloat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Operand>().map(LogFloat::new)
    }
}
