mod common;

use common::{assert_int, run_with};
use xvm::{Instruction, InstructionData, Opcode};

fn comment_at(pc: usize, text: &str, len: usize) -> Vec<InstructionData> {
    let mut data = vec![InstructionData::default(); len];
    data[pc] = InstructionData::comment(text);
    data
}

#[test]
fn closure_reads_captured_local() {
    // main pushes a local, builds a closure capturing it, and calls it.
    let insns = vec![
        Instruction::with_i32(Opcode::PushI, 0, 42),
        Instruction::new(Opcode::Closure, 0, 3, 0),
        Instruction::ab(Opcode::Capture, 0, 1),
        Instruction::ab(Opcode::GetUpv, 1, 0),
        Instruction::a(Opcode::Ret, 1),
        Instruction::a(Opcode::Call, 0),
        Instruction::op(Opcode::Exit),
    ];
    let result = run_with(Vec::new(), insns, comment_at(1, "inner", 7));
    assert_int(&result, 42);
}

#[test]
fn returned_closure_survives_outer_frame() {
    // The outer function captures a local and returns the inner closure; the
    // capture must still resolve after the outer frame is gone.
    let insns = vec![
        // 0: outer, body 1..=6
        Instruction::new(Opcode::Closure, 0, 6, 0),
        Instruction::with_i32(Opcode::PushI, 0, 42), // outer local 1
        Instruction::new(Opcode::Closure, 1, 3, 0),  // inner, body 3..=5
        Instruction::ab(Opcode::Capture, 0, 1),
        Instruction::ab(Opcode::GetUpv, 2, 0),
        Instruction::a(Opcode::Ret, 2),
        Instruction::a(Opcode::Ret, 1), // outer returns inner
        // 7: back in main
        Instruction::a(Opcode::Call, 0),       // call outer
        Instruction::ab(Opcode::GetLocal, 3, 1), // returned closure
        Instruction::a(Opcode::Call, 3),       // call inner
        Instruction::ab(Opcode::GetLocal, 4, 2),
        Instruction::a(Opcode::Ret, 4),
    ];
    let mut data = vec![InstructionData::default(); insns.len()];
    data[0] = InstructionData::comment("outer");
    data[2] = InstructionData::comment("inner");

    let result = run_with(Vec::new(), insns, data);
    assert_int(&result, 42);
}

#[test]
fn double_capture_is_independent() {
    // B captures an upvalue of A; mutating A's cell afterwards must not leak
    // into B.
    let insns = vec![
        Instruction::with_i32(Opcode::PushI, 0, 1), // main local 1
        // 1: A, body 2..=11
        Instruction::new(Opcode::Closure, 0, 10, 0),
        Instruction::ab(Opcode::Capture, 0, 1), // A captures main local 1
        // 3: B, body 4..=6
        Instruction::new(Opcode::Closure, 1, 3, 0),
        Instruction::ab(Opcode::Capture, 1, 0), // B captures A's upvalue 0
        Instruction::ab(Opcode::GetUpv, 2, 0),
        Instruction::a(Opcode::Ret, 2),
        // 7: mutate A's own cell, then call B
        Instruction::with_i32(Opcode::LoadI, 3, 99),
        Instruction::ab(Opcode::SetUpv, 3, 0),
        Instruction::a(Opcode::Call, 1),
        Instruction::ab(Opcode::GetLocal, 4, 1),
        Instruction::a(Opcode::Ret, 4),
        // 12: back in main; A's result lands above main's local
        Instruction::a(Opcode::Call, 0),
        Instruction::ab(Opcode::GetLocal, 5, 2),
        Instruction::a(Opcode::Ret, 5),
    ];
    let mut data = vec![InstructionData::default(); insns.len()];
    data[1] = InstructionData::comment("a");
    data[3] = InstructionData::comment("b");

    let result = run_with(Vec::new(), insns, data);
    assert_int(&result, 1);
}

#[test]
fn upvalue_mutation_is_visible_within_the_closure() {
    // SETUPV through a closed cell, then read it back.
    let insns = vec![
        Instruction::with_i32(Opcode::PushI, 0, 10),
        Instruction::new(Opcode::Closure, 0, 5, 0),
        Instruction::ab(Opcode::Capture, 0, 1),
        Instruction::with_i32(Opcode::LoadI, 1, 77),
        Instruction::ab(Opcode::SetUpv, 1, 0),
        Instruction::ab(Opcode::GetUpv, 2, 0),
        Instruction::a(Opcode::Ret, 2),
        Instruction::a(Opcode::Call, 0),
        Instruction::ab(Opcode::GetLocal, 3, 2),
        Instruction::a(Opcode::Ret, 3),
    ];
    let result = run_with(Vec::new(), insns, comment_at(1, "mutator", 10));
    assert_int(&result, 77);
}
