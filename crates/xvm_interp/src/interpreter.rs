//! Instruction dispatch: the execution loop of the virtual machine.

use std::cmp::Ordering;

use anyhow::{anyhow, Result};

use xvm::Opcode;

use crate::array::VmArray;
use crate::closure::{Callable, Closure, Function};
use crate::dict::VmDict;
use crate::state::State;
use crate::values::{clone_value, Value};

/// Result of a single dispatch iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine can execute another instruction.
    Running,
    /// Dispatch ended: `EXIT`, final return from `main`, or nothing left to
    /// run.
    Halted,
}

/// Flags a runtime error and moves past the faulting instruction; the next
/// iteration runs the unwinder.
macro_rules! vm_error {
    ($state:expr, $msg:expr) => {{
        $state.raise($msg);
        $state.pc += 1;
        return Ok(StepOutcome::Running);
    }};
}

/// Runs the program to completion.
///
/// Returns the value left on top of the stack (the final return of `main`,
/// or whatever `EXIT` halted on), or an error after an unhandled runtime
/// fault has printed its backtrace.
pub fn execute(state: &mut State) -> Result<Value> {
    loop {
        match dispatch_cycle(state)? {
            StepOutcome::Running => {}
            StepOutcome::Halted => break,
        }
    }

    Ok(match state.stack.last() {
        Some(top) => clone_value(&state.stack, top),
        None => Value::Nil,
    })
}

/// Executes exactly one dispatch iteration (error servicing included).
pub fn execute_step(state: &mut State) -> Result<StepOutcome> {
    dispatch_cycle(state)
}

fn dispatch_cycle(state: &mut State) -> Result<StepOutcome> {
    // Service the error slot first: either a protected frame consumes the
    // error and execution resumes, or the walk reaches the bottom and the
    // run is over.
    if state.has_error() && !state.handle_error() {
        let info = state.error_info();
        return Err(anyhow!("{}: {}", info.funcsig, info.message));
    }

    if state.call_stack.is_empty() {
        return Ok(StepOutcome::Halted);
    }

    let insn = *state
        .holder()
        .insns
        .get(state.pc)
        .ok_or_else(|| anyhow!("program counter {} out of bounds", state.pc))?;

    match insn.op {
        Opcode::Nop | Opcode::Lbl | Opcode::Capture => {
            state.pc += 1;
        }

        Opcode::Exit => return Ok(StepOutcome::Halted),

        // ----- arithmetic -----
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Mod | Opcode::Pow => {
            let rhs = match num_of(state.register(insn.b)) {
                Some(n) => n,
                None => vm_error!(
                    state,
                    format!(
                        "attempt to perform arithmetic on a {} value",
                        state.register(insn.b).type_name()
                    )
                ),
            };
            let lhs = match num_of(state.register(insn.a)) {
                Some(n) => n,
                None => vm_error!(
                    state,
                    format!(
                        "attempt to perform arithmetic on a {} value",
                        state.register(insn.a).type_name()
                    )
                ),
            };
            if is_div_or_mod(insn.op) && num_is_zero(rhs) {
                vm_error!(state, "Division by zero");
            }

            let result = match (lhs, rhs) {
                (Num::Int(a), Num::Int(b)) => Value::Int(arith_int(insn.op, a, b)),
                (a, b) => Value::Float(arith_float(insn.op, as_f32(a), as_f32(b))),
            };
            state.set_register(insn.a, result);
            state.pc += 1;
        }

        Opcode::IAdd | Opcode::ISub | Opcode::IMul | Opcode::IDiv | Opcode::IMod | Opcode::IPow => {
            let imm = insn.imm_i32();
            if is_div_or_mod(insn.op) && imm == 0 {
                vm_error!(state, "Division by zero");
            }

            match state.register_mut(insn.a) {
                Value::Int(i) => *i = arith_int(insn.op, *i, imm),
                Value::Float(f) => *f = arith_float(insn.op, *f, imm as f32),
                _ => {}
            }
            state.pc += 1;
        }

        Opcode::FAdd | Opcode::FSub | Opcode::FMul | Opcode::FDiv | Opcode::FMod | Opcode::FPow => {
            let imm = insn.imm_f32();
            if is_div_or_mod(insn.op) && imm == 0.0 {
                vm_error!(state, "Division by zero");
            }

            // A float immediate promotes an integer destination.
            if let Some(n) = num_of(state.register(insn.a)) {
                state.set_register(insn.a, Value::Float(arith_float(insn.op, as_f32(n), imm)));
            }
            state.pc += 1;
        }

        Opcode::Neg => {
            match state.register_mut(insn.a) {
                Value::Int(i) => *i = i.wrapping_neg(),
                Value::Float(f) => *f = -*f,
                _ => {}
            }
            state.pc += 1;
        }

        Opcode::Inc => {
            match state.register_mut(insn.a) {
                Value::Int(i) => *i = i.wrapping_add(1),
                Value::Float(f) => *f += 1.0,
                _ => {}
            }
            state.pc += 1;
        }

        Opcode::Dec => {
            match state.register_mut(insn.a) {
                Value::Int(i) => *i = i.wrapping_sub(1),
                Value::Float(f) => *f -= 1.0,
                _ => {}
            }
            state.pc += 1;
        }

        // ----- loads and moves -----
        Opcode::Mov => {
            let copy = state.clone_register(insn.b);
            state.set_register(insn.a, copy);
            state.pc += 1;
        }

        Opcode::LoadK => {
            let constant = match state.constant(insn.b as usize) {
                Some(k) => clone_value(&state.stack, k),
                None => vm_error!(state, "constant index out of range"),
            };
            state.set_register(insn.a, constant);
            state.pc += 1;
        }

        Opcode::LoadNil => {
            state.set_register(insn.a, Value::Nil);
            state.pc += 1;
        }

        Opcode::LoadI => {
            state.set_register(insn.a, Value::Int(insn.imm_i32()));
            state.pc += 1;
        }

        Opcode::LoadF => {
            state.set_register(insn.a, Value::Float(insn.imm_f32()));
            state.pc += 1;
        }

        Opcode::LoadBt => {
            state.set_register(insn.a, Value::Bool(true));
            state.pc += 1;
        }

        Opcode::LoadBf => {
            state.set_register(insn.a, Value::Bool(false));
            state.pc += 1;
        }

        Opcode::LoadArr => {
            state.set_register(insn.a, Value::Array(Box::new(VmArray::new())));
            state.pc += 1;
        }

        Opcode::LoadDict => {
            state.set_register(insn.a, Value::Dict(Box::new(VmDict::new())));
            state.pc += 1;
        }

        // ----- closures -----
        Opcode::Closure => {
            let size = insn.b as usize;
            let code = state.pc + 1;
            if code + size > state.holder().len() {
                return Err(anyhow!("closure body out of bounds at pc {}", state.pc));
            }

            let comment = state
                .holder()
                .insn_data
                .get(state.pc)
                .map(|data| data.comment.clone())
                .unwrap_or_default();
            let id = if comment.is_empty() {
                "<anonymous>".to_string()
            } else {
                comment
            };

            // CAPTURE pseudo-instructions inside the body declare the
            // upvalue sources.
            let mut upvalues = Vec::new();
            for offset in 0..size {
                let body = state.holder().insns[code + offset];
                if body.op == Opcode::Capture {
                    let cell = state.capture_upvalue(body.a, body.b);
                    upvalues.push(cell);
                }
            }

            let closure = Closure {
                callee: Callable::Function(Function {
                    id,
                    line: 0,
                    code,
                    size,
                }),
                upvalues,
            };
            state.set_register(insn.a, Value::Function(Box::new(closure)));

            // Execution continues past the inlined body.
            state.pc = code + size;
        }

        Opcode::GetUpv => match state.upvalue_value(insn.b) {
            Some(v) => {
                state.set_register(insn.a, v);
                state.pc += 1;
            }
            None => vm_error!(state, "upvalue index out of range"),
        },

        Opcode::SetUpv => {
            let value = state.clone_register(insn.a);
            state.set_upvalue(insn.b, value);
            state.pc += 1;
        }

        // ----- stack traffic -----
        Opcode::Push => {
            let value = state.take_register(insn.a);
            state.push(value);
            state.pc += 1;
        }

        Opcode::PushK => {
            let constant = match state.constant(insn.a as usize) {
                Some(k) => clone_value(&state.stack, k),
                None => vm_error!(state, "constant index out of range"),
            };
            state.push(constant);
            state.pc += 1;
        }

        Opcode::PushNil => {
            state.push(Value::Nil);
            state.pc += 1;
        }

        Opcode::PushI => {
            state.push(Value::Int(insn.imm_i32()));
            state.pc += 1;
        }

        Opcode::PushF => {
            state.push(Value::Float(insn.imm_f32()));
            state.pc += 1;
        }

        Opcode::PushBt => {
            state.push(Value::Bool(true));
            state.pc += 1;
        }

        Opcode::PushBf => {
            state.push(Value::Bool(false));
            state.pc += 1;
        }

        Opcode::Drop => {
            state.drop_top();
            state.pc += 1;
        }

        // ----- variable access -----
        Opcode::GetLocal => {
            let value = match state.local(insn.b as usize) {
                Some(v) => clone_value(&state.stack, v),
                None => vm_error!(state, "stack underflow"),
            };
            state.set_register(insn.a, value);
            state.pc += 1;
        }

        Opcode::SetLocal => {
            let value = state.take_register(insn.a);
            if !state.set_local(insn.b as usize, value) {
                vm_error!(state, "stack underflow");
            }
            state.pc += 1;
        }

        Opcode::GetArg => {
            let value = match state.argument(insn.b as usize) {
                Some(v) => clone_value(&state.stack, v),
                None => vm_error!(state, "stack underflow"),
            };
            state.set_register(insn.a, value);
            state.pc += 1;
        }

        Opcode::GetGlobal => {
            let key = match state.string_register(insn.b) {
                Some(s) => s.data.clone(),
                None => vm_error!(state, "global key is not a string"),
            };
            let value = match state.global(&key) {
                Some(v) => clone_value(&state.stack, v),
                None => Value::Nil,
            };
            state.set_register(insn.a, value);
            state.pc += 1;
        }

        Opcode::SetGlobal => {
            let key = match state.string_register(insn.b) {
                Some(s) => s.data.clone(),
                None => vm_error!(state, "global key is not a string"),
            };
            let value = state.take_register(insn.a);
            state.set_global(&key, value);
            state.pc += 1;
        }

        // ----- logic and comparison -----
        Opcode::Eq | Opcode::Deq => {
            let result = if insn.b == insn.c {
                true
            } else {
                let lhs = state.register(insn.b);
                let rhs = state.register(insn.c);
                match insn.op {
                    Opcode::Eq => lhs.compare(rhs),
                    _ => lhs.compare_deep(rhs),
                }
            };
            state.set_register(insn.a, Value::Bool(result));
            state.pc += 1;
        }

        Opcode::Neq => {
            let result = if insn.b == insn.c {
                false
            } else {
                !state.register(insn.b).compare(state.register(insn.c))
            };
            state.set_register(insn.a, Value::Bool(result));
            state.pc += 1;
        }

        Opcode::And => {
            let result = state.register(insn.b).to_bool() && state.register(insn.c).to_bool();
            state.set_register(insn.a, Value::Bool(result));
            state.pc += 1;
        }

        Opcode::Or => {
            let result = state.register(insn.b).to_bool() || state.register(insn.c).to_bool();
            state.set_register(insn.a, Value::Bool(result));
            state.pc += 1;
        }

        Opcode::Not => {
            let result = !state.register(insn.b).to_bool();
            state.set_register(insn.a, Value::Bool(result));
            state.pc += 1;
        }

        Opcode::Lt | Opcode::Gt | Opcode::LtEq | Opcode::GtEq => {
            // Numeric-only: anything else leaves the destination untouched.
            if let (Some(lhs), Some(rhs)) = (
                num_of(state.register(insn.b)),
                num_of(state.register(insn.c)),
            ) {
                let result = compare_num(insn.op, lhs, rhs);
                state.set_register(insn.a, Value::Bool(result));
            }
            state.pc += 1;
        }

        // ----- relative jumps -----
        Opcode::Jmp => {
            state.pc = offset_pc(state.pc, insn.a as i16);
        }

        Opcode::JmpIf | Opcode::JmpIfN => {
            let cond = state.register(insn.a).to_bool();
            let wanted = insn.op == Opcode::JmpIf;
            if cond == wanted {
                state.pc = offset_pc(state.pc, insn.b as i16);
            } else {
                state.pc += 1;
            }
        }

        Opcode::JmpIfEq | Opcode::JmpIfNeq => {
            let equal = insn.b == insn.a
                || state.register(insn.a).compare(state.register(insn.b));
            let wanted = insn.op == Opcode::JmpIfEq;
            if equal == wanted {
                state.pc = offset_pc(state.pc, insn.c as i16);
            } else {
                state.pc += 1;
            }
        }

        Opcode::JmpIfLt | Opcode::JmpIfGt | Opcode::JmpIfLtEq | Opcode::JmpIfGtEq => {
            let taken = match (
                num_of(state.register(insn.a)),
                num_of(state.register(insn.b)),
            ) {
                (Some(lhs), Some(rhs)) => compare_num(insn.op, lhs, rhs),
                _ => false,
            };
            if taken {
                state.pc = offset_pc(state.pc, insn.c as i16);
            } else {
                state.pc += 1;
            }
        }

        // ----- label jumps -----
        Opcode::LJmp => match state.label_target(insn.a) {
            Some(target) => state.pc = target,
            None => vm_error!(state, "unknown label"),
        },

        Opcode::LJmpIf | Opcode::LJmpIfN => {
            let cond = state.register(insn.a).to_bool();
            let wanted = insn.op == Opcode::LJmpIf;
            if cond == wanted {
                match state.label_target(insn.b) {
                    Some(target) => state.pc = target,
                    None => vm_error!(state, "unknown label"),
                }
            } else {
                state.pc += 1;
            }
        }

        Opcode::LJmpIfEq | Opcode::LJmpIfNeq => {
            let equal = insn.b == insn.a
                || state.register(insn.a).compare(state.register(insn.b));
            let wanted = insn.op == Opcode::LJmpIfEq;
            if equal == wanted {
                match state.label_target(insn.c) {
                    Some(target) => state.pc = target,
                    None => vm_error!(state, "unknown label"),
                }
            } else {
                state.pc += 1;
            }
        }

        Opcode::LJmpIfLt | Opcode::LJmpIfGt | Opcode::LJmpIfLtEq | Opcode::LJmpIfGtEq => {
            let taken = match (
                num_of(state.register(insn.a)),
                num_of(state.register(insn.b)),
            ) {
                (Some(lhs), Some(rhs)) => compare_num(insn.op, lhs, rhs),
                _ => false,
            };
            if taken {
                match state.label_target(insn.c) {
                    Some(target) => state.pc = target,
                    None => vm_error!(state, "unknown label"),
                }
            } else {
                state.pc += 1;
            }
        }

        // ----- calls and returns -----
        Opcode::Call | Opcode::PCall => {
            let protect = insn.op == Opcode::PCall;
            let frame_closure = match state.register(insn.a) {
                Value::Function(clsr) => Some(clsr.clone_closed(&state.stack)),
                _ => None,
            };
            match frame_closure {
                Some(clsr) => state.call_with(clsr, protect),
                None => vm_error!(state, "attempt to call a non-function value"),
            }
        }

        Opcode::Ret => {
            let value = state.take_register(insn.a);
            state.return_value(value);
        }

        Opcode::RetBt => state.return_value(Value::Bool(true)),
        Opcode::RetBf => state.return_value(Value::Bool(false)),
        Opcode::RetNil => state.return_value(Value::Nil),

        // ----- arrays -----
        Opcode::GetArr => {
            let index = match state.int_register(insn.c) {
                Some(i) if i >= 0 => i as usize,
                Some(_) => vm_error!(state, "array index out of range"),
                None => vm_error!(state, "array index is not an integer"),
            };
            let value = match state.register(insn.b) {
                Value::Array(arr) => match arr.get(index) {
                    Some(slot) => clone_value(&state.stack, slot),
                    None => vm_error!(state, "array index out of range"),
                },
                _ => vm_error!(state, "attempt to index a non-array value"),
            };
            state.set_register(insn.a, value);
            state.pc += 1;
        }

        Opcode::SetArr => {
            let index = match state.int_register(insn.c) {
                Some(i) if i >= 0 => i as usize,
                Some(_) => vm_error!(state, "array index out of range"),
                None => vm_error!(state, "array index is not an integer"),
            };
            let value = state.take_register(insn.a);
            match state.register_mut(insn.b) {
                Value::Array(arr) => arr.set(index, value),
                _ => vm_error!(state, "attempt to index a non-array value"),
            }
            state.pc += 1;
        }

        Opcode::NextArr => {
            let addr = match state.register(insn.b) {
                arr @ Value::Array(_) => arr.heap_addr(),
                _ => vm_error!(state, "attempt to iterate a non-array value"),
            };
            let cursor = state.advance_cursor(addr);
            let next = match state.register(insn.b) {
                Value::Array(arr) => arr.get(cursor).map(|v| clone_value(&state.stack, v)),
                _ => None,
            };
            match next {
                Some(value) => state.set_register(insn.a, value),
                None => {
                    state.reset_cursor(addr);
                    state.set_register(insn.a, Value::Nil);
                }
            }
            state.pc += 1;
        }

        Opcode::LenArr => {
            let len = match state.register(insn.b) {
                Value::Array(arr) => arr.len() as i32,
                _ => vm_error!(state, "attempt to get length of a non-array value"),
            };
            state.set_register(insn.a, Value::Int(len));
            state.pc += 1;
        }

        // ----- dicts -----
        Opcode::GetDict => {
            let key = match state.string_register(insn.c) {
                Some(s) => s.data.clone(),
                None => vm_error!(state, "dict key is not a string"),
            };
            let value = match state.register(insn.b) {
                Value::Dict(dict) => dict
                    .get(&key)
                    .map(|v| clone_value(&state.stack, v))
                    .unwrap_or(Value::Nil),
                _ => vm_error!(state, "attempt to index a non-dict value"),
            };
            state.set_register(insn.a, value);
            state.pc += 1;
        }

        Opcode::SetDict => {
            let key = match state.string_register(insn.c) {
                Some(s) => s.data.clone(),
                None => vm_error!(state, "dict key is not a string"),
            };
            let value = state.take_register(insn.a);
            match state.register_mut(insn.b) {
                Value::Dict(dict) => dict.set(&key, value),
                _ => vm_error!(state, "attempt to index a non-dict value"),
            }
            state.pc += 1;
        }

        Opcode::NextDict => {
            let addr = match state.register(insn.b) {
                dict @ Value::Dict(_) => dict.heap_addr(),
                _ => vm_error!(state, "attempt to iterate a non-dict value"),
            };
            let cursor = state.advance_cursor(addr);
            let next = match state.register(insn.b) {
                Value::Dict(dict) => dict.nth_value(cursor).map(|v| clone_value(&state.stack, v)),
                _ => None,
            };
            match next {
                Some(value) => state.set_register(insn.a, value),
                None => {
                    state.reset_cursor(addr);
                    state.set_register(insn.a, Value::Nil);
                }
            }
            state.pc += 1;
        }

        Opcode::LenDict => {
            let len = match state.register(insn.b) {
                Value::Dict(dict) => dict.len() as i32,
                _ => vm_error!(state, "attempt to get length of a non-dict value"),
            };
            state.set_register(insn.a, Value::Int(len));
            state.pc += 1;
        }

        // ----- strings -----
        Opcode::ConStr => {
            let joined = match (state.register(insn.a), state.register(insn.b)) {
                (Value::String(lhs), Value::String(rhs)) => lhs.concat(rhs),
                _ => vm_error!(state, "attempt to concatenate a non-string value"),
            };
            state.set_register(insn.a, Value::String(Box::new(joined)));
            state.pc += 1;
        }

        Opcode::GetStr => {
            let byte = match state.string_register(insn.a) {
                Some(s) => match s.get(insn.c as usize) {
                    Some(b) => b,
                    None => vm_error!(state, "string index out of range"),
                },
                None => vm_error!(state, "attempt to index a non-string value"),
            };
            state.set_register(insn.b, Value::string((byte as char).to_string()));
            state.pc += 1;
        }

        Opcode::SetStr => {
            let ok = match state.register_mut(insn.a) {
                Value::String(s) => s.set(insn.c as usize, insn.b as u8),
                _ => vm_error!(state, "attempt to index a non-string value"),
            };
            if !ok {
                vm_error!(state, "string index out of range");
            }
            state.pc += 1;
        }

        Opcode::LenStr => {
            let len = match state.string_register(insn.b) {
                Some(s) => s.len() as i32,
                None => vm_error!(state, "attempt to get length of a non-string value"),
            };
            state.set_register(insn.a, Value::Int(len));
            state.pc += 1;
        }

        // ----- casts -----
        Opcode::ICast => {
            let result = match state.register(insn.b).to_int() {
                Some(i) => i,
                None => vm_error!(state, "Integer cast failed"),
            };
            state.set_register(insn.a, Value::Int(result));
            state.pc += 1;
        }

        Opcode::FCast => {
            let result = match state.register(insn.b).to_float() {
                Some(f) => f,
                None => vm_error!(state, "Float cast failed"),
            };
            state.set_register(insn.a, Value::Float(result));
            state.pc += 1;
        }

        Opcode::StrCast => {
            let text = state.register(insn.b).to_display_string();
            state.set_register(insn.a, Value::string(text));
            state.pc += 1;
        }

        Opcode::BCast => {
            let truth = state.register(insn.b).to_bool();
            state.set_register(insn.a, Value::Bool(truth));
            state.pc += 1;
        }
    }

    Ok(StepOutcome::Running)
}

#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i32),
    Float(f32),
}

#[inline(always)]
fn num_of(v: &Value) -> Option<Num> {
    match v {
        Value::Int(i) => Some(Num::Int(*i)),
        Value::Float(f) => Some(Num::Float(*f)),
        _ => None,
    }
}

#[inline(always)]
fn as_f32(n: Num) -> f32 {
    match n {
        Num::Int(i) => i as f32,
        Num::Float(f) => f,
    }
}

#[inline(always)]
fn num_is_zero(n: Num) -> bool {
    match n {
        Num::Int(i) => i == 0,
        Num::Float(f) => f == 0.0,
    }
}

#[inline(always)]
fn is_div_or_mod(op: Opcode) -> bool {
    matches!(
        op,
        Opcode::Div | Opcode::IDiv | Opcode::FDiv | Opcode::Mod | Opcode::IMod | Opcode::FMod
    )
}

#[inline(always)]
fn arith_int(op: Opcode, a: i32, b: i32) -> i32 {
    match op {
        Opcode::Add | Opcode::IAdd | Opcode::FAdd => a.wrapping_add(b),
        Opcode::Sub | Opcode::ISub | Opcode::FSub => a.wrapping_sub(b),
        Opcode::Mul | Opcode::IMul | Opcode::FMul => a.wrapping_mul(b),
        Opcode::Div | Opcode::IDiv | Opcode::FDiv => {
            if b == 0 {
                a
            } else {
                a.wrapping_div(b)
            }
        }
        Opcode::Mod | Opcode::IMod | Opcode::FMod => {
            if b == 0 {
                a
            } else {
                a.wrapping_rem(b)
            }
        }
        Opcode::Pow | Opcode::IPow | Opcode::FPow => (a as f64).powi(b) as i32,
        _ => a,
    }
}

#[inline(always)]
fn arith_float(op: Opcode, a: f32, b: f32) -> f32 {
    match op {
        Opcode::Add | Opcode::IAdd | Opcode::FAdd => a + b,
        Opcode::Sub | Opcode::ISub | Opcode::FSub => a - b,
        Opcode::Mul | Opcode::IMul | Opcode::FMul => a * b,
        Opcode::Div | Opcode::IDiv | Opcode::FDiv => a / b,
        Opcode::Mod | Opcode::IMod | Opcode::FMod => a % b,
        Opcode::Pow | Opcode::IPow | Opcode::FPow => a.powf(b),
        _ => a,
    }
}

fn compare_num(op: Opcode, lhs: Num, rhs: Num) -> bool {
    let ordering = match (lhs, rhs) {
        (Num::Int(a), Num::Int(b)) => a.partial_cmp(&b),
        (a, b) => as_f32(a).partial_cmp(&as_f32(b)),
    };
    let Some(ordering) = ordering else {
        return false;
    };

    match op {
        Opcode::Lt | Opcode::JmpIfLt | Opcode::LJmpIfLt => ordering == Ordering::Less,
        Opcode::Gt | Opcode::JmpIfGt | Opcode::LJmpIfGt => ordering == Ordering::Greater,
        Opcode::LtEq | Opcode::JmpIfLtEq | Opcode::LJmpIfLtEq => ordering != Ordering::Greater,
        Opcode::GtEq | Opcode::JmpIfGtEq | Opcode::LJmpIfGtEq => ordering != Ordering::Less,
        _ => false,
    }
}

#[inline(always)]
fn offset_pc(pc: usize, offset: i16) -> usize {
    (pc as i64 + offset as i64) as usize
}
