//! Instruction rendering and per-opcode queries for debug listings.

use std::fmt;
use std::fmt::Write as _;

use crate::bytecode::{BytecodeHolder, Instruction, OPERAND_INVALID};
use crate::opcodes::Opcode;

/// The wire mnemonic, derived from the variant name (`JmpIfLtEq` →
/// `JMPIFLTEQ`).
pub fn mnemonic(op: Opcode) -> String {
    format!("{op:?}").to_uppercase()
}

/// The signed pc-relative offset carried by a relative jump, `None` for
/// everything else.
pub fn jump_offset(insn: &Instruction) -> Option<i16> {
    match insn.op {
        Opcode::Jmp => Some(insn.a as i16),
        Opcode::JmpIf | Opcode::JmpIfN => Some(insn.b as i16),
        Opcode::JmpIfEq
        | Opcode::JmpIfNeq
        | Opcode::JmpIfLt
        | Opcode::JmpIfGt
        | Opcode::JmpIfLtEq
        | Opcode::JmpIfGtEq => Some(insn.c as i16),
        _ => None,
    }
}

/// The label id targeted by a label jump, `None` for everything else.
pub fn label_operand(insn: &Instruction) -> Option<u16> {
    match insn.op {
        Opcode::LJmp => Some(insn.a),
        Opcode::LJmpIf | Opcode::LJmpIfN => Some(insn.b),
        Opcode::LJmpIfEq
        | Opcode::LJmpIfNeq
        | Opcode::LJmpIfLt
        | Opcode::LJmpIfGt
        | Opcode::LJmpIfLtEq
        | Opcode::LJmpIfGtEq => Some(insn.c),
        _ => None,
    }
}

/// Whether execution never falls through to the next instruction.
pub fn is_terminator(op: Opcode) -> bool {
    matches!(
        op,
        Opcode::Jmp
            | Opcode::LJmp
            | Opcode::Ret
            | Opcode::RetBt
            | Opcode::RetBf
            | Opcode::RetNil
            | Opcode::Exit
    )
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Opcode::*;

        let m = mnemonic(self.op);
        let (a, b, c) = (self.a, self.b, self.c);

        match self.op {
            Nop | Exit | PushNil | PushBt | PushBf | Drop | RetBt | RetBf | RetNil => {
                write!(f, "{m}")
            }

            Lbl => {
                if a == OPERAND_INVALID {
                    write!(f, "{m}")
                } else {
                    write!(f, "{m} @{a}")
                }
            }

            Neg | Inc | Dec | LoadNil | LoadBt | LoadBf | LoadArr | LoadDict | Push | Call
            | PCall | Ret => write!(f, "{m} r{a}"),

            Add | Sub | Mul | Div | Mod | Pow | Mov | Not | ConStr | NextArr | NextDict
            | LenArr | LenDict | LenStr | ICast | FCast | StrCast | BCast | GetGlobal
            | SetGlobal => write!(f, "{m} r{a}, r{b}"),

            Eq | Deq | Neq | And | Or | Lt | Gt | LtEq | GtEq | GetArr | SetArr | GetDict
            | SetDict => write!(f, "{m} r{a}, r{b}, r{c}"),

            GetUpv | SetUpv | GetLocal | SetLocal | GetArg => write!(f, "{m} r{a}, {b}"),

            GetStr => write!(f, "{m} r{a}, r{b}, {c}"),
            SetStr => write!(f, "{m} r{a}, {b}, {c}"),

            IAdd | ISub | IMul | IDiv | IMod | IPow | LoadI => {
                write!(f, "{m} r{a}, {}", self.imm_i32())
            }
            FAdd | FSub | FMul | FDiv | FMod | FPow | LoadF => {
                write!(f, "{m} r{a}, {}", self.imm_f32())
            }
            PushI => write!(f, "{m} {}", self.imm_i32()),
            PushF => write!(f, "{m} {}", self.imm_f32()),

            LoadK => write!(f, "{m} r{a}, k{b}"),
            PushK => write!(f, "{m} k{a}"),

            Closure => write!(f, "{m} r{a}, size={b}, arity={c}"),
            Capture => write!(f, "{m} {a}, {b}"),

            Jmp => write!(f, "{m} {:+}", a as i16),
            JmpIf | JmpIfN => write!(f, "{m} r{a}, {:+}", b as i16),
            JmpIfEq | JmpIfNeq | JmpIfLt | JmpIfGt | JmpIfLtEq | JmpIfGtEq => {
                write!(f, "{m} r{a}, r{b}, {:+}", c as i16)
            }

            LJmp => write!(f, "{m} @{a}"),
            LJmpIf | LJmpIfN => write!(f, "{m} r{a}, @{b}"),
            LJmpIfEq | LJmpIfNeq | LJmpIfLt | LJmpIfGt | LJmpIfLtEq | LJmpIfGtEq => {
                write!(f, "{m} r{a}, r{b}, @{c}")
            }
        }
    }
}

impl BytecodeHolder {
    /// One instruction per line, with the debug-sidecar comment appended when
    /// present.
    pub fn disassemble(&self) -> String {
        let mut out = String::new();

        for (index, insn) in self.insns.iter().enumerate() {
            let comment = self
                .insn_data
                .get(index)
                .map(|data| data.comment.as_str())
                .unwrap_or("");

            if comment.is_empty() {
                let _ = writeln!(out, "{index:4}  {insn}");
            } else {
                let _ = writeln!(out, "{index:4}  {:<24} ; {comment}", insn.to_string());
            }
        }

        out
    }
}
