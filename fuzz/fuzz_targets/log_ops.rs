#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use logtypes_core::{BinaryOp, LogError, LogFloat, Operand};
use logtypes_test::properties;

#[derive(Arbitrary, Debug)]
enum FuzzOperand {
    Log(f64),
    Real(f64),
}

impl From<FuzzOperand> for Operand {
    fn from(operand: FuzzOperand) -> Self {
        match operand {
            FuzzOperand::Log(log) => Operand::Log(LogFloat::from_log(log)),
            FuzzOperand::Real(v) => Operand::Real(v),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    op: u8,
    lhs: FuzzOperand,
    rhs: FuzzOperand,
}

fuzz_target!(|input: Input| {
    let ops = BinaryOp::all();
    let op = ops[input.op as usize % ops.len()];
    let lhs = Operand::from(input.lhs);
    let rhs = Operand::from(input.rhs);

    // Must never panic; only subtraction may fail, and only by domain
    match op.apply(lhs, rhs) {
        Ok(value) => {
            let _ = value.to_string();
        }
        Err(e) => {
            assert_eq!(op, BinaryOp::Sub);
            assert_eq!(e, LogError::NegativeDifference);
            assert!(lhs.log_magnitude() < rhs.log_magnitude());
        }
    }

    let a = LogFloat::new(lhs);
    let b = LogFloat::new(rhs);
    assert!(properties::add_commutative(a, b));
    assert!(properties::mul_commutative(a, b));
    assert!(properties::sub_respects_order(a, b));
    assert!(properties::hash_consistent(a, b));
});
