//! Callables, closures, and captured-variable cells.

use crate::state::State;
use crate::values::{clone_value, Value};

/// Signature of a native function: it receives the full interpreter state and
/// produces the call's result. Failures are reported by setting the error
/// slot, never by panicking.
pub type NativeFnPtr = fn(&mut State) -> Value;

/// A captured variable cell.
///
/// While *open* the cell names a live slot on the data stack; once *closed*
/// it owns an independent heap copy. The transition happens when the owning
/// frame returns or when the closure is cloned.
#[derive(Debug)]
pub enum UpValue {
    Open { slot: usize },
    Closed(Value),
}

impl UpValue {
    /// A closed copy of the cell's current contents. An open slot at or above
    /// the live stack top resolves to nil.
    pub(crate) fn close_against(&self, stack: &[Value]) -> UpValue {
        match self {
            UpValue::Open { slot } => UpValue::Closed(
                stack
                    .get(*slot)
                    .map(|v| clone_value(stack, v))
                    .unwrap_or(Value::Nil),
            ),
            UpValue::Closed(value) => UpValue::Closed(clone_value(stack, value)),
        }
    }
}

/// A user-defined function: an id for diagnostics plus the location of its
/// body inside the owning instruction stream.
#[derive(Debug, Clone)]
pub struct Function {
    pub id: String,
    pub line: usize,
    /// Absolute index of the first body instruction.
    pub code: usize,
    /// Number of body instructions.
    pub size: usize,
}

/// A native function registered in the global environment.
///
/// The identifier lives here rather than in a process-wide registry, so two
/// states never observe each other's native names.
#[derive(Debug, Clone)]
pub struct NativeFn {
    pub name: String,
    pub func: NativeFnPtr,
    pub arity: usize,
}

/// Anything the `CALL`/`PCALL` opcodes can invoke.
#[derive(Debug, Clone)]
pub enum Callable {
    Function(Function),
    Native(NativeFn),
}

/// Diagnostic signature used in error reports and backtraces.
pub fn funcsig(callee: &Callable) -> String {
    match callee {
        Callable::Function(f) => format!("function {}", f.id),
        Callable::Native(n) => format!("function {}", n.name),
    }
}

/// A callable paired with its captured upvalues.
#[derive(Debug)]
pub struct Closure {
    pub callee: Callable,
    pub upvalues: Vec<UpValue>,
}

impl Closure {
    pub fn new(callee: Callable) -> Self {
        Closure {
            callee,
            upvalues: Vec::new(),
        }
    }

    /// Number of captured upvalues. Cells are addressed by indexes strictly
    /// less than this.
    pub fn upvalue_count(&self) -> usize {
        self.upvalues.len()
    }

    /// Deep copy whose upvalues are all closed; the clone never aliases the
    /// data stack.
    pub fn clone_closed(&self, stack: &[Value]) -> Closure {
        Closure {
            callee: self.callee.clone(),
            upvalues: self
                .upvalues
                .iter()
                .map(|upv| upv.close_against(stack))
                .collect(),
        }
    }

    /// Closes every still-open upvalue in place by copying the referenced
    /// stack slot into the cell.
    pub fn close_upvalues(&mut self, stack: &[Value]) {
        for upv in &mut self.upvalues {
            if matches!(upv, UpValue::Open { .. }) {
                *upv = upv.close_against(stack);
            }
        }
    }
}
