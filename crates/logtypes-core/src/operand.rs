//! Operand coercion
//!
//! Every operator accepts either a `LogFloat` or an ordinary number on each
//! side. The discriminator is fixed at the API boundary by the `From` impls
//! below; operators then call [`Operand::log_magnitude`] explicitly.

use std::fmt;
use std::str::FromStr;

use crate::combine::log_no_fp_error;
use crate::error::LogError;
use crate::value::LogFloat;

/// An operand of a log-space operation.
#[derive(Clone, Copy, PartialEq)]
pub enum Operand {
    /// Already in log-space
    Log(LogFloat),
    /// An ordinary real number
    Real(f64),
}

impl Operand {
    /// Coerce to a log-magnitude.
    ///
    /// A negative real coerces to NaN without raising.
    #[inline]
    pub fn log_magnitude(self) -> f64 {
        match self {
            Operand::Log(value) => value.log(),
            Operand::Real(v) => log_no_fp_error(v),
        }
    }

    /// The operand as an ordinary float, as used for exponents.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Operand::Log(value) => value.to_f64(),
            Operand::Real(v) => v,
        }
    }
}

impl From<LogFloat> for Operand {
    #[inline]
    fn from(value: LogFloat) -> Self {
        Operand::Log(value)
    }
}

impl From<&LogFloat> for Operand {
    #[inline]
    fn from(value: &LogFloat) -> Self {
        Operand::Log(*value)
    }
}

macro_rules! real_operand_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(v: $t) -> Self {
                    Operand::Real(v as f64)
                }
            }
        )*
    };
}

real_operand_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl FromStr for Operand {
    type Err = LogError;

    /// Parse either the display form `logfloat(log=...)` or a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some(inner) = text
            .strip_prefix(LogFloat::DISPLAY_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_f64(inner).map(|log| Operand::Log(LogFloat::from_log(log)));
        }
        parse_f64(text).map(Operand::Real)
    }
}

fn parse_f64(text: &str) -> Result<f64, LogError> {
    text.trim().parse::<f64>().map_err(|_| {
        tracing::debug!(text, "rejected non-numeric operand");
        LogError::InvalidNumber(text.to_string())
    })
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Log(value) => write!(f, "{}", value),
            Operand::Real(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_real() {
        assert_eq!(Operand::from(1.0).log_magnitude(), 0.0);
        assert_eq!(Operand::from(0u8).log_magnitude(), f64::NEG_INFINITY);
        assert!(Operand::from(-2i32).log_magnitude().is_nan());
        assert_eq!(Operand::from(1000u64).log_magnitude(), 1000f64.ln());
    }

    #[test]
    fn test_coerce_log_passes_through() {
        let value = LogFloat::from_log(-750.0);
        let operand = Operand::from(value);
        assert_eq!(operand, Operand::Log(value));
        assert_eq!(operand.log_magnitude(), -750.0);
    }

    #[test]
    fn test_exponent_conversion() {
        assert_eq!(Operand::from(3i64).to_f64(), 3.0);
        assert_eq!(Operand::from(LogFloat::from_log(0.0)).to_f64(), 1.0);
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!("2.5".parse::<Operand>().unwrap(), Operand::Real(2.5));
        match " logfloat(log=-3.5) ".parse::<Operand>().unwrap() {
            Operand::Log(value) => assert_eq!(value.log(), -3.5),
            other => panic!("expected log operand, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_operand_rejects_text() {
        let err = "three".parse::<Operand>().unwrap_err();
        assert_eq!(err, LogError::InvalidNumber("three".into()));
        assert!("logfloat(log=abc)".parse::<Operand>().is_err());
        assert!("logfloat(log=1.0".parse::<Operand>().is_err());
    }
}
