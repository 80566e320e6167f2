//! Core native functions seeded into every global environment.

use crate::state::State;
use crate::values::Value;

fn core_print(state: &mut State) -> Value {
    match state.argument(0) {
        Some(arg0) => println!("{}", arg0.to_display_string()),
        None => state.raise("stack underflow"),
    }
    Value::Nil
}

fn core_error(state: &mut State) -> Value {
    let message = match state.argument(0) {
        Some(arg0) => arg0.to_display_string(),
        None => "stack underflow".to_string(),
    };
    state.raise(message);
    Value::Nil
}

/// Registers the seed natives. Called once per [`State`] during construction.
pub fn load_core_lib(state: &mut State) {
    state.declare_native("print", core_print, 1);
    state.declare_native("error", core_error, 1);
}
