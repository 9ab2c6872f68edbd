//! Closeness tests evaluated in log-space

use crate::combine::logsubexp;
use crate::error::{LogError, LogResult};
use crate::operand::Operand;
use crate::value::LogFloat;

/// Tolerance configuration for [`LogFloat::is_close`].
///
/// Two values `a`, `b` are close when
/// `|a - b| <= max(rel * max(a, b), abs)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, in `[0, 1)`
    pub rel: f64,
    /// Absolute tolerance in real space, `>= 0`
    pub abs: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            rel: 1e-9,
            abs: 0.0,
        }
    }
}

impl Tolerance {
    /// A few ulps, for results of a single stable operation
    pub fn strict() -> Self {
        Tolerance {
            rel: 5e-15,
            abs: 0.0,
        }
    }

    /// For long accumulations
    pub fn loose() -> Self {
        Tolerance {
            rel: 1e-6,
            abs: 0.0,
        }
    }

    pub fn with_abs(mut self, abs: f64) -> Self {
        self.abs = abs;
        self
    }

    pub fn validate(&self) -> LogResult<()> {
        if !(0.0..1.0).contains(&self.rel) {
            return Err(LogError::InvalidTolerance(format!(
                "relative tolerance must be in [0, 1), got {}",
                self.rel
            )));
        }
        if !(self.abs >= 0.0) {
            return Err(LogError::InvalidTolerance(format!(
                "absolute tolerance must be non-negative, got {}",
                self.abs
            )));
        }
        Ok(())
    }

    /// Whether two log-magnitudes are close.
    pub fn logs_close(&self, la: f64, lb: f64) -> bool {
        if la.is_nan() || lb.is_nan() {
            return false;
        }
        if la == lb {
            return true;
        }
        let (hi, lo) = if la > lb { (la, lb) } else { (lb, la) };
        if hi == f64::INFINITY {
            return false;
        }
        // (hi - lo) / hi <= rel  <=>  lo - hi >= ln(1 - rel)
        if lo - hi >= (-self.rel).ln_1p() {
            return true;
        }
        logsubexp(hi, lo) <= self.abs.ln()
    }
}

impl LogFloat {
    /// Whether `self` and `other` are close under `tol`, without leaving
    /// log-space.
    ///
    /// ```rust
    /// use logtypes_core::{LogFloat, Tolerance};
    ///
    /// let a = LogFloat::from_log(-1200.0);
    /// let b = LogFloat::from_log(-1200.0 + 1e-12);
    /// assert!(a.is_close(b, Tolerance::default()));
    /// assert!(!a.is_close(b, Tolerance { rel: 1e-13, abs: 0.0 }));
    /// ```
    pub fn is_close(self, other: impl Into<Operand>, tol: Tolerance) -> bool {
        tol.logs_close(self.log(), other.into().log_magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::default();
        assert_eq!(tol.rel, 1e-9);
        assert_eq!(tol.abs, 0.0);
        assert!(tol.validate().is_ok());
        assert!(Tolerance::strict().validate().is_ok());
        assert!(Tolerance::loose().validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerance() {
        let bad_rel = Tolerance { rel: 1.0, abs: 0.0 };
        assert!(matches!(bad_rel.validate(), Err(LogError::InvalidTolerance(_))));
        let bad_abs = Tolerance::default().with_abs(-1.0);
        assert!(bad_abs.validate().is_err());
        let nan_abs = Tolerance::default().with_abs(f64::NAN);
        assert!(nan_abs.validate().is_err());
    }

    #[test]
    fn test_relative_closeness() {
        let tol = Tolerance { rel: 1e-6, abs: 0.0 };
        assert!(LogFloat::new(1.0).is_close(1.0000001, tol));
        assert!(!LogFloat::new(1.0).is_close(1.00001, tol));
        assert!(LogFloat::new(1e300).is_close(LogFloat::new(1e300) * 1.0000001, tol));
    }

    #[test]
    fn test_absolute_closeness() {
        let tol = Tolerance { rel: 0.0, abs: 1e-3 };
        assert!(LogFloat::ZERO.is_close(1e-4, tol));
        assert!(!LogFloat::ZERO.is_close(1e-2, tol));
        assert!(!LogFloat::ZERO.is_close(1e-4, Tolerance::default()));
    }

    #[test]
    fn test_special_values() {
        let tol = Tolerance::default();
        assert!(LogFloat::ZERO.is_close(0.0, tol));
        assert!(LogFloat::from_log(f64::INFINITY).is_close(LogFloat::from_log(f64::INFINITY), tol));
        assert!(!LogFloat::from_log(f64::INFINITY).is_close(1e300, tol));
        assert!(!LogFloat::new(-1.0).is_close(LogFloat::new(-1.0), tol));
    }
}
