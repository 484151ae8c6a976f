//! Register and label operands
//!
//! This module defines the operand kinds ILOC instructions work with and
//! the allocators that hand out fresh identifiers. Allocators are owned
//! by a single code-generation run, so independent runs never collide.

use std::fmt;

/// A virtual register (before physical allocation)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VirtualReg(pub u32);

impl fmt::Display for VirtualReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Allocator for virtual registers
#[derive(Debug, Default)]
pub struct VirtualRegAllocator {
    next_id: u32,
}

impl VirtualRegAllocator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Allocate a fresh virtual register, never reused within this run
    pub fn fresh(&mut self) -> VirtualReg {
        let id = self.next_id;
        self.next_id += 1;
        VirtualReg(id)
    }

    /// Get the number of registers allocated so far
    pub fn count(&self) -> u32 {
        self.next_id
    }
}

/// A register operand: virtual, or one of the two physical registers
/// the lowering pass is allowed to name directly
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    Virtual(VirtualReg),
    /// Frame base pointer
    Base,
    /// Return-value register
    Ret,
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reg::Virtual(v) => write!(f, "{}", v),
            Reg::Base => write!(f, "bp"),
            Reg::Ret => write!(f, "ret"),
        }
    }
}

impl From<VirtualReg> for Reg {
    fn from(v: VirtualReg) -> Self {
        Reg::Virtual(v)
    }
}

/// A code label
///
/// Function labels are derived from the function name, so the same name
/// always yields an equal label. Anonymous labels come from a
/// [`LabelAllocator`] and are unique within a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Func(String),
    Anon(u32),
}

impl Label {
    /// The call label for a function name (same name, same label)
    pub fn func(name: impl Into<String>) -> Self {
        Label::Func(name.into())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Func(name) => write!(f, "{}", name),
            Label::Anon(n) => write!(f, "l{}", n),
        }
    }
}

/// Allocator for anonymous labels
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next_id: u32,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Allocate a fresh anonymous label
    pub fn fresh(&mut self) -> Label {
        let id = self.next_id;
        self.next_id += 1;
        Label::Anon(id)
    }
}
