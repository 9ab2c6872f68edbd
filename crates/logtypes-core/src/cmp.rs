//! Equality, ordering and hashing
//!
//! All six relational operators derive from [`LogFloat::compare`], which
//! compares log-magnitudes with IEEE semantics. NaN is unordered, so every
//! relation involving it is false except `!=`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::operand::Operand;
use crate::value::LogFloat;

impl LogFloat {
    /// Compare with a `LogFloat` or an ordinary number.
    ///
    /// A negative ordinary number is compared in real space against zero,
    /// so it always orders below any `LogFloat`.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use logtypes_core::LogFloat;
    ///
    /// assert_eq!(LogFloat::new(4.0).compare(5.0), Some(Ordering::Less));
    /// assert_eq!(LogFloat::ZERO.compare(-1.0), Some(Ordering::Greater));
    /// assert_eq!(LogFloat::new(-1.0).compare(1.0), None);
    /// ```
    pub fn compare(self, other: impl Into<Operand>) -> Option<Ordering> {
        match other.into() {
            Operand::Real(v) if v < 0.0 => 0.0f64.partial_cmp(&v),
            operand => self.log().partial_cmp(&operand.log_magnitude()),
        }
    }

    /// Integral hash code: the log-magnitude truncated toward zero.
    ///
    /// `-1` is reserved as the "no hash" sentinel and maps to `2`.
    #[inline]
    pub fn hash_code(self) -> i64 {
        let h = self.log() as i64;
        if h == -1 {
            2
        } else {
            h
        }
    }
}

impl PartialEq for LogFloat {
    #[inline]
    fn eq(&self, other: &LogFloat) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for LogFloat {
    #[inline]
    fn partial_cmp(&self, other: &LogFloat) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl Hash for LogFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

macro_rules! cmp_with_real {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for LogFloat {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.compare(*other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$t> for LogFloat {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.compare(*other)
                }
            }

            impl PartialEq<LogFloat> for $t {
                #[inline]
                fn eq(&self, other: &LogFloat) -> bool {
                    other.compare(*self) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<LogFloat> for $t {
                #[inline]
                fn partial_cmp(&self, other: &LogFloat) -> Option<Ordering> {
                    other.compare(*self).map(Ordering::reverse)
                }
            }
        )*
    };
}

cmp_with_real!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);
