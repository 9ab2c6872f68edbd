//! logtypes core - non-negative reals stored as natural logarithms
//!
//! This crate defines:
//! - Stable log-space combinators (`logaddexp`, `logsubexp`)
//! - The `LogFloat` value type and its operand coercion
//! - Comparison, hashing, display and parsing of `LogFloat`
//! - The arithmetic operator contract and its error policy
//! - Log-space closeness tolerances
//!
//! Structural misuse (conflicting constructor arguments, negation, a
//! negative difference) is reported through [`LogError`]. A negative
//! ordinary number is quieter: it coerces to a NaN log-magnitude that
//! propagates through later arithmetic like any IEEE NaN.
//!
//! ```rust
//! use logtypes_core::{LogError, LogFloat};
//!
//! let p = LogFloat::new(2.0) * LogFloat::new(3.0);
//! assert!((p.to_f64() - 6.0).abs() < 1e-12);
//! assert_eq!((LogFloat::new(0.5) - 1.0).unwrap_err(), LogError::NegativeDifference);
//! assert!(LogFloat::new(-1.0) != LogFloat::new(-1.0));
//! ```

pub mod combine;
pub mod error;
pub mod operand;
pub mod value;
pub mod cmp;
pub mod ops;
pub mod tolerance;

pub use combine::*;
pub use error::*;
pub use operand::*;
pub use value::*;
pub use ops::*;
pub use tolerance::*;
