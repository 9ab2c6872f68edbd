//! Algebraic properties of log-space arithmetic
//!
//! Each predicate returns `true` when the property holds for its inputs.
//! They are shared by the property tests and the fuzz target.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use logtypes_core::{LogFloat, Tolerance};

/// Property: addition commutes exactly
pub fn add_commutative(a: LogFloat, b: LogFloat) -> bool {
    same_log(a + b, b + a)
}

/// Property: multiplication commutes exactly
pub fn mul_commutative(a: LogFloat, b: LogFloat) -> bool {
    same_log(a * b, b * a)
}

/// Property: zero is the additive identity
pub fn add_identity(a: LogFloat) -> bool {
    same_log(a + LogFloat::ZERO, a)
}

/// Property: one is the multiplicative identity
pub fn mul_identity(a: LogFloat) -> bool {
    same_log(a * LogFloat::ONE, a)
}

/// Property: `(a + b) - b` recovers `a`.
///
/// Only meaningful when `a` is not negligible next to `b`.
pub fn sub_inverts_add(a: LogFloat, b: LogFloat, tol: Tolerance) -> bool {
    match (a + b) - b {
        Ok(value) => value.is_close(a, tol),
        Err(_) => false,
    }
}

/// Property: `(a * b) / b` recovers `a`
pub fn div_inverts_mul(a: LogFloat, b: LogFloat, tol: Tolerance) -> bool {
    ((a * b) / b).is_close(a, tol)
}

/// Property: multiplication distributes over addition
pub fn mul_distributes(a: LogFloat, b: LogFloat, c: LogFloat, tol: Tolerance) -> bool {
    (a * (b + c)).is_close(a * b + a * c, tol)
}

/// Property: a difference never succeeds with a smaller minuend
pub fn sub_respects_order(a: LogFloat, b: LogFloat) -> bool {
    match a - b {
        Ok(_) => !(a < b),
        Err(e) => e.is_domain() && a < b,
    }
}

/// Property: equal values hash equally
pub fn hash_consistent(a: LogFloat, b: LogFloat) -> bool {
    a != b || hash_of(a) == hash_of(b)
}

/// Property: ordering agrees with the represented reals
pub fn order_matches_real(a: LogFloat, b: LogFloat) -> bool {
    let (x, y) = (a.to_f64(), b.to_f64());
    if !(x.is_finite() && y.is_finite()) || x == y {
        return true;
    }
    (a < b) == (x < y)
}

fn same_log(a: LogFloat, b: LogFloat) -> bool {
    a.log().to_bits() == b.log().to_bits() || a == b || (a.is_nan() && b.is_nan())
}

fn hash_of(value: LogFloat) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
