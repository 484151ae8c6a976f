//! ILOC instructions
//!
//! This module defines the instruction set for ILOC (three-address code
//! over virtual registers). Operand arity and kind are fixed per variant,
//! so a malformed instruction is unrepresentable: the immediate forms
//! exist only for the operators that have them.

use crate::backend::iloc::operand::{Label, Reg};
use std::fmt;

/// Three-register binary operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mult,
    Div,
    And,
    Or,
    CmpLt,
    CmpLe,
    CmpEq,
    CmpGe,
    CmpGt,
    CmpNe,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "add"),
            BinOp::Sub => write!(f, "sub"),
            BinOp::Mult => write!(f, "mult"),
            BinOp::Div => write!(f, "div"),
            BinOp::And => write!(f, "and"),
            BinOp::Or => write!(f, "or"),
            BinOp::CmpLt => write!(f, "cmp_lt"),
            BinOp::CmpLe => write!(f, "cmp_le"),
            BinOp::CmpEq => write!(f, "cmp_eq"),
            BinOp::CmpGe => write!(f, "cmp_ge"),
            BinOp::CmpGt => write!(f, "cmp_gt"),
            BinOp::CmpNe => write!(f, "cmp_ne"),
        }
    }
}

/// Register-immediate binary operations (only add and mult have them)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmOp {
    AddI,
    MultI,
}

impl fmt::Display for ImmOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImmOp::AddI => write!(f, "addI"),
            ImmOp::MultI => write!(f, "multI"),
        }
    }
}

/// Unary operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "not"),
            UnaryOp::Neg => write!(f, "neg"),
        }
    }
}

/// An ILOC instruction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insn {
    /// dst = immediate
    LoadI { value: i64, dst: Reg },

    /// dst = src (register-to-register move)
    I2i { src: Reg, dst: Reg },

    /// dst = lhs op rhs
    BinOp {
        op: BinOp,
        lhs: Reg,
        rhs: Reg,
        dst: Reg,
    },

    /// dst = lhs op immediate
    BinOpI {
        op: ImmOp,
        lhs: Reg,
        imm: i64,
        dst: Reg,
    },

    /// dst = op src
    UnaryOp { op: UnaryOp, src: Reg, dst: Reg },

    /// dst = MEM(addr)
    Load { addr: Reg, dst: Reg },

    /// MEM(addr) = src
    Store { src: Reg, addr: Reg },

    /// Jump target marker
    Label(Label),

    /// Unconditional jump
    Jump(Label),

    /// Conditional jump on a boolean register
    Cbr {
        cond: Reg,
        taken: Label,
        not_taken: Label,
    },

    /// Call a function by its label
    Call(Label),

    /// Return to the caller
    Return,
}

impl Insn {
    /// Get the destination register of this instruction (if any)
    pub fn dst(&self) -> Option<Reg> {
        match self {
            Insn::LoadI { dst, .. } => Some(*dst),
            Insn::I2i { dst, .. } => Some(*dst),
            Insn::BinOp { dst, .. } => Some(*dst),
            Insn::BinOpI { dst, .. } => Some(*dst),
            Insn::UnaryOp { dst, .. } => Some(*dst),
            Insn::Load { dst, .. } => Some(*dst),
            Insn::Store { .. } => None,
            Insn::Label(_) => None,
            Insn::Jump(_) => None,
            Insn::Cbr { .. } => None,
            Insn::Call(_) => None,
            Insn::Return => None,
        }
    }
}

impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Insn::LoadI { value, dst } => write!(f, "loadI {} => {}", value, dst),
            Insn::I2i { src, dst } => write!(f, "i2i {} => {}", src, dst),
            Insn::BinOp { op, lhs, rhs, dst } => {
                write!(f, "{} {}, {} => {}", op, lhs, rhs, dst)
            }
            Insn::BinOpI { op, lhs, imm, dst } => {
                write!(f, "{} {}, {} => {}", op, lhs, imm, dst)
            }
            Insn::UnaryOp { op, src, dst } => write!(f, "{} {} => {}", op, src, dst),
            Insn::Load { addr, dst } => write!(f, "load {} => {}", addr, dst),
            Insn::Store { src, addr } => write!(f, "store {} => {}", src, addr),
            Insn::Label(label) => write!(f, "{}:", label),
            Insn::Jump(target) => write!(f, "jumpI -> {}", target),
            Insn::Cbr {
                cond,
                taken,
                not_taken,
            } => write!(f, "cbr {} -> {}, {}", cond, taken, not_taken),
            Insn::Call(target) => write!(f, "call {}", target),
            Insn::Return => write!(f, "return"),
        }
    }
}
