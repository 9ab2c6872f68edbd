//! Operation Fuzzer - randomized checks of log-space arithmetic
//!
//! Generates random operand pairs and operators, runs them through
//! `BinaryOp::apply`, and checks each outcome against ordinary `f64`
//! arithmetic wherever the real-space reference is trustworthy:
//! - finite, non-zero reference values must agree within tolerance
//! - exact zeros must stay exact zeros
//! - negative differences must be domain errors
//! - negative ordinary operands must yield NaN, never an error

use logtypes_core::{BinaryOp, LogError, LogFloat, Operand, Tolerance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of operations to run
    pub op_count: usize,
    /// Lower bound of generated log-magnitudes
    pub min_log: f64,
    /// Upper bound of generated log-magnitudes
    pub max_log: f64,
    /// Largest exponent magnitude for powers
    pub max_exponent: f64,
    /// Probability that an operand is an ordinary number rather than a `LogFloat`
    pub real_prob: f64,
    /// Probability that an ordinary operand is negative
    pub negative_prob: f64,
    /// Probability that an operand is exactly zero
    pub zero_prob: f64,
    /// Agreement required with the real-space reference
    pub tolerance: Tolerance,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            op_count: 1000,
            min_log: -30.0,
            max_log: 30.0,
            max_exponent: 4.0,
            real_prob: 0.5,
            negative_prob: 0.05,
            zero_prob: 0.05,
            tolerance: Tolerance::loose(),
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            op_count: 100,
            min_log: -5.0,
            max_log: 5.0,
            max_exponent: 2.0,
            negative_prob: 0.0,
            zero_prob: 0.0,
            ..FuzzerConfig::default()
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            op_count: 20000,
            min_log: -300.0,
            max_log: 300.0,
            max_exponent: 2.0,
            negative_prob: 0.1,
            zero_prob: 0.1,
            ..FuzzerConfig::default()
        }
    }

    /// Magnitudes far outside f64 range; most references overflow or
    /// underflow and only the structural checks apply
    pub fn extreme() -> Self {
        FuzzerConfig {
            op_count: 5000,
            min_log: -5000.0,
            max_log: 5000.0,
            max_exponent: 3.0,
            real_prob: 0.0,
            negative_prob: 0.0,
            zero_prob: 0.05,
            ..FuzzerConfig::default()
        }
    }
}

/// A disagreement between log-space and real-space arithmetic
#[derive(Clone, Debug)]
pub struct Mismatch {
    pub op: BinaryOp,
    pub lhs: Operand,
    pub rhs: Operand,
    pub outcome: Result<LogFloat, LogError>,
    pub expected: String,
}

/// Fuzz result
#[derive(Debug, Default)]
pub struct FuzzResult {
    /// Operations executed
    pub ops_executed: usize,
    /// Operations compared against the real-space reference
    pub ops_checked: usize,
    /// Explicit domain errors observed (all expected)
    pub domain_errors: usize,
    /// NaN results observed (all expected)
    pub nan_results: usize,
    /// Disagreements
    pub mismatches: Vec<Mismatch>,
}

impl FuzzResult {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Operation fuzzer
pub struct OpFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl OpFuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        OpFuzzer { config, rng }
    }

    pub fn config(&self) -> &FuzzerConfig {
        &self.config
    }

    /// Generate a random operand
    pub fn operand(&mut self) -> Operand {
        let as_real = self.rng.gen_bool(self.config.real_prob);
        if self.rng.gen_bool(self.config.zero_prob) {
            return if as_real {
                Operand::Real(0.0)
            } else {
                Operand::Log(LogFloat::ZERO)
            };
        }

        let log = self.rng.gen_range(self.config.min_log..=self.config.max_log);
        if !as_real {
            return Operand::Log(LogFloat::from_log(log));
        }
        let value = log.exp();
        if self.rng.gen_bool(self.config.negative_prob) {
            Operand::Real(-value)
        } else {
            Operand::Real(value)
        }
    }

    /// Generate a random exponent, never log-coerced
    pub fn exponent(&mut self) -> Operand {
        let max = self.config.max_exponent;
        Operand::Real(self.rng.gen_range(-max..=max))
    }

    /// Run one random operation and record its outcome
    pub fn step(&mut self, result: &mut FuzzResult) {
        let op = BinaryOp::all()[self.rng.gen_range(0..BinaryOp::all().len())];
        let lhs = self.operand();
        let rhs = if op == BinaryOp::Pow {
            self.exponent()
        } else {
            self.operand()
        };

        let outcome = op.apply(lhs, rhs);
        result.ops_executed += 1;

        match &outcome {
            Err(e) if e.is_domain() => result.domain_errors += 1,
            Ok(value) if value.is_nan() => result.nan_results += 1,
            _ => {}
        }

        match self.check(op, lhs, rhs, &outcome) {
            Check::Agreed => result.ops_checked += 1,
            Check::Skipped => {}
            Check::Failed(expected) => {
                tracing::warn!(
                    op = %op,
                    lhs = ?lhs,
                    rhs = ?rhs,
                    outcome = ?outcome,
                    expected = %expected,
                    "log-space result disagrees with reference"
                );
                result.ops_checked += 1;
                result.mismatches.push(Mismatch {
                    op,
                    lhs,
                    rhs,
                    outcome,
                    expected,
                });
            }
        }
    }

    /// Run the configured number of operations
    pub fn run(&mut self) -> FuzzResult {
        let mut result = FuzzResult::default();
        for _ in 0..self.config.op_count {
            self.step(&mut result);
        }
        tracing::info!(
            ops = result.ops_executed,
            checked = result.ops_checked,
            domain_errors = result.domain_errors,
            nan = result.nan_results,
            mismatches = result.mismatches.len(),
            "fuzz run finished"
        );
        result
    }

    fn check(
        &self,
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        outcome: &Result<LogFloat, LogError>,
    ) -> Check {
        let coerced_negative = |operand: Operand| matches!(operand, Operand::Real(v) if v < 0.0);
        let silent_nan = coerced_negative(lhs) || (op != BinaryOp::Pow && coerced_negative(rhs));
        if silent_nan {
            return match outcome {
                Ok(value) if value.is_nan() => Check::Agreed,
                _ => Check::Failed("silent NaN".to_string()),
            };
        }

        let (la, lb) = (lhs.log_magnitude(), rhs.log_magnitude());
        if op == BinaryOp::Sub && la < lb {
            return match outcome {
                Err(LogError::NegativeDifference) => Check::Agreed,
                _ => Check::Failed("NegativeDifference".to_string()),
            };
        }

        let value = match outcome {
            Ok(value) => *value,
            Err(_) => return Check::Failed("a value".to_string()),
        };

        let (a, b) = (lhs.to_f64(), rhs.to_f64());
        if op == BinaryOp::Pow && b == 0.0 && la == f64::NEG_INFINITY {
            // 0 ** 0 has no log-space answer
            return Check::Skipped;
        }
        if !a.is_finite()
            || !b.is_finite()
            || (la.is_finite() && a == 0.0)
            || (lb.is_finite() && b == 0.0)
        {
            // log-magnitude outside f64 range
            return Check::Skipped;
        }

        let expected = op.apply_real(a, b);
        if expected == 0.0 && (a == 0.0 || b == 0.0 || op == BinaryOp::Sub) {
            return if value.log() == f64::NEG_INFINITY {
                Check::Agreed
            } else {
                Check::Failed("exact zero".to_string())
            };
        }
        if !expected.is_normal() {
            return Check::Skipped;
        }
        if op == BinaryOp::Sub && expected < a * 1e-6 {
            // cancellation leaves too few correct digits in the reference
            return Check::Skipped;
        }

        if value.is_close(expected, self.config.tolerance) {
            Check::Agreed
        } else {
            Check::Failed(format!("{:e}", expected))
        }
    }
}

enum Check {
    Agreed,
    Skipped,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_light() {
        let mut fuzzer = OpFuzzer::new(FuzzerConfig::light());
        let result = fuzzer.run();

        assert_eq!(result.ops_executed, 100);
        assert!(result.passed(), "mismatches: {:?}", result.mismatches);
        assert_eq!(result.nan_results, 0);
    }

    #[test]
    fn test_fuzzer_default() {
        let mut fuzzer = OpFuzzer::new(FuzzerConfig::default());
        let result = fuzzer.run();

        assert!(result.passed(), "mismatches: {:?}", result.mismatches);
        assert!(result.ops_checked > 0);
        assert!(result.domain_errors > 0);
    }

    #[test]
    fn test_fuzzer_extreme_structural() {
        let mut fuzzer = OpFuzzer::new(FuzzerConfig::extreme());
        let result = fuzzer.run();

        assert!(result.passed(), "mismatches: {:?}", result.mismatches);
    }

    #[test]
    fn test_fuzzer_deterministic() {
        let a = OpFuzzer::new(FuzzerConfig::light()).run();
        let b = OpFuzzer::new(FuzzerConfig::light()).run();
        assert_eq!(a.ops_checked, b.ops_checked);
        assert_eq!(a.domain_errors, b.domain_errors);
    }

    #[test]
    fn test_negative_operands_produce_nan() {
        let config = FuzzerConfig {
            op_count: 500,
            real_prob: 1.0,
            negative_prob: 1.0,
            zero_prob: 0.0,
            ..FuzzerConfig::default()
        };
        let result = OpFuzzer::new(config).run();

        assert!(result.passed(), "mismatches: {:?}", result.mismatches);
        assert_eq!(result.domain_errors, 0);
        assert_eq!(result.nan_results, result.ops_executed);
    }
}
