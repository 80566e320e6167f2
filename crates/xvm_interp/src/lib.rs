//! XVM execution engine.
//!
//! The engine consumes an already-assembled program — a constant pool, an
//! instruction vector, and its debug sidecar — and runs it to completion on a
//! single thread:
//!
//! ```
//! use xvm::{BytecodeHolder, Instruction, Opcode};
//! use xvm_interp::{execute, State, Value};
//!
//! let program = BytecodeHolder::from_insns(vec![
//!     Instruction::with_i32(Opcode::LoadI, 0, 2),
//!     Instruction::with_i32(Opcode::LoadI, 1, 3),
//!     Instruction::ab(Opcode::Add, 0, 1),
//!     Instruction::a(Opcode::Ret, 0),
//! ]);
//!
//! let mut state = State::new(Vec::new(), program);
//! let result = execute(&mut state).unwrap();
//! assert!(matches!(result, Value::Int(5)));
//! ```
//!
//! Values use exclusive-ownership semantics: composites are deep-cloned on
//! copy and there is no garbage collector. Runtime faults flow through the
//! state's error slot and the protected-call unwinder; the host stack is
//! never unwound by script errors.

pub mod array;
pub mod closure;
pub mod corelib;
pub mod dict;
pub mod interpreter;
pub mod state;
pub mod string;
pub mod values;

pub use array::VmArray;
pub use closure::{Callable, Closure, Function, NativeFn, NativeFnPtr, UpValue};
pub use dict::VmDict;
pub use interpreter::{execute, execute_step, StepOutcome};
pub use state::{CallInfo, ErrorInfo, State, MAX_CALL_DEPTH, MAX_LOCALS, REGISTER_COUNT};
pub use string::VmString;
pub use values::{clone_value, Value, ValueKind};
