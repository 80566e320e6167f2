mod common;

use common::{assert_int, assert_string, run_with};
use xvm::{BytecodeHolder, Instruction, Opcode};
use xvm_interp::{execute, execute_step, State, StepOutcome, Value};

#[test]
fn global_round_trip() {
    let insns = vec![
        Instruction::ab(Opcode::LoadK, 0, 0), // key "k"
        Instruction::with_i32(Opcode::LoadI, 1, 7),
        Instruction::ab(Opcode::SetGlobal, 1, 0),
        Instruction::ab(Opcode::GetGlobal, 2, 0),
        Instruction::a(Opcode::Ret, 2),
    ];
    let result = run_with(vec![Value::string("k")], insns, Vec::new());
    assert_int(&result, 7);
}

#[test]
fn missing_global_loads_nil() {
    let insns = vec![
        Instruction::ab(Opcode::LoadK, 0, 0),
        Instruction::ab(Opcode::GetGlobal, 1, 0),
        Instruction::ab(Opcode::BCast, 2, 1),
        Instruction::a(Opcode::Ret, 2),
    ];
    let result = run_with(vec![Value::string("nobody")], insns, Vec::new());
    assert!(matches!(result, Value::Bool(false)), "got {result:?}");
}

#[test]
fn push_then_drop_restores_stack_height() {
    let holder = BytecodeHolder::from_insns(vec![
        Instruction::with_i32(Opcode::PushI, 0, 5),
        Instruction::op(Opcode::Drop),
        Instruction::op(Opcode::Exit),
    ]);
    let mut state = State::new(Vec::new(), holder);
    let before = state.stack_len();

    assert_eq!(execute_step(&mut state).unwrap(), StepOutcome::Running);
    assert_eq!(state.stack_len(), before + 1);

    assert_eq!(execute_step(&mut state).unwrap(), StepOutcome::Running);
    assert_eq!(state.stack_len(), before);

    assert_eq!(execute_step(&mut state).unwrap(), StepOutcome::Halted);
}

#[test]
fn mov_clones_instead_of_moving() {
    let insns = vec![
        Instruction::ab(Opcode::LoadK, 0, 0),
        Instruction::ab(Opcode::Mov, 1, 0),
        Instruction::ab(Opcode::ConStr, 1, 0), // needs both registers alive
        Instruction::a(Opcode::Ret, 1),
    ];
    let result = run_with(vec![Value::string("ab")], insns, Vec::new());
    assert_string(&result, "abab");
}

#[test]
fn print_native_returns_nil() {
    let insns = vec![
        Instruction::ab(Opcode::LoadK, 0, 0), // "print"
        Instruction::ab(Opcode::GetGlobal, 1, 0),
        Instruction::ab(Opcode::LoadK, 2, 1), // "hi"
        Instruction::a(Opcode::Push, 2),
        Instruction::a(Opcode::Call, 1),
        Instruction::ab(Opcode::GetLocal, 3, 2), // native result
        Instruction::a(Opcode::Ret, 3),
    ];
    let result = run_with(
        vec![Value::string("print"), Value::string("hi")],
        insns,
        Vec::new(),
    );
    assert!(result.is_nil(), "got {result:?}");
}

#[test]
fn getarg_reads_below_the_frame_base() {
    let insns = vec![
        Instruction::with_i32(Opcode::PushI, 0, 30), // arg 1
        Instruction::with_i32(Opcode::PushI, 0, 12), // arg 0
        Instruction::new(Opcode::Closure, 0, 4, 2),
        Instruction::ab(Opcode::GetArg, 1, 0),
        Instruction::ab(Opcode::GetArg, 2, 1),
        Instruction::ab(Opcode::Add, 1, 2),
        Instruction::a(Opcode::Ret, 1),
        Instruction::a(Opcode::Call, 0),
        Instruction::ab(Opcode::GetLocal, 3, 3),
        Instruction::a(Opcode::Ret, 3),
    ];
    let result = run_with(Vec::new(), insns, Vec::new());
    assert_int(&result, 42);
}

#[test]
fn exit_halts_without_returning() {
    let holder = BytecodeHolder::from_insns(vec![
        Instruction::with_i32(Opcode::PushI, 0, 9),
        Instruction::op(Opcode::Exit),
        Instruction::with_i32(Opcode::PushI, 0, 999),
    ]);
    let mut state = State::new(Vec::new(), holder);
    let result = execute(&mut state).unwrap();
    assert_int(&result, 9);
    // The frame is still live; EXIT is a halt, not a return.
    assert_eq!(state.call_depth(), 1);
}

#[test]
fn strcast_renders_primitives() {
    let insns = vec![
        Instruction::with_i32(Opcode::LoadI, 0, 42),
        Instruction::ab(Opcode::StrCast, 1, 0),
        Instruction::ab(Opcode::ICast, 2, 1), // back through the text
        Instruction::a(Opcode::Ret, 2),
    ];
    let result = run_with(Vec::new(), insns, Vec::new());
    assert_int(&result, 42);
}
