#![allow(dead_code)]

use xvm::{BytecodeHolder, Instruction, InstructionData};
use xvm_interp::{execute, State, Value};

/// Assembles and runs a program with no constants or debug info, returning
/// the final value.
pub fn run(insns: Vec<Instruction>) -> Value {
    run_with(Vec::new(), insns, Vec::new())
}

/// Assembles and runs a program, returning the final value. Panics on an
/// unhandled runtime error.
pub fn run_with(
    constants: Vec<Value>,
    insns: Vec<Instruction>,
    insn_data: Vec<InstructionData>,
) -> Value {
    let mut state = State::new(constants, BytecodeHolder::new(insns, insn_data));
    execute(&mut state).expect("program faulted")
}

/// Runs a program expected to terminate with an unhandled runtime error and
/// returns the error text.
pub fn run_expecting_fault(
    constants: Vec<Value>,
    insns: Vec<Instruction>,
    insn_data: Vec<InstructionData>,
) -> String {
    let mut state = State::new(constants, BytecodeHolder::new(insns, insn_data));
    execute(&mut state)
        .expect_err("program unexpectedly completed")
        .to_string()
}

/// Asserts the value is an `Int` equal to `expected`.
pub fn assert_int(value: &Value, expected: i32) {
    match value {
        Value::Int(i) => assert_eq!(*i, expected),
        other => panic!("expected Int({expected}), got {other:?}"),
    }
}

/// Asserts the value is a `String` equal to `expected`.
pub fn assert_string(value: &Value, expected: &str) {
    match value {
        Value::String(s) => assert_eq!(s.data, expected),
        other => panic!("expected String({expected:?}), got {other:?}"),
    }
}
