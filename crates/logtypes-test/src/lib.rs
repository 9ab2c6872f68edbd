//! logtypes Test Harness - randomized checks and shared properties
//!
//! This crate provides:
//! - A seeded operation fuzzer that checks log-space results against
//!   ordinary `f64` arithmetic
//! - Algebraic property predicates for property tests and fuzz targets
//! - Criterion benchmarks (see `benches/`)

pub mod fuzzer;
pub mod properties;

pub use fuzzer::*;
