//! Code-generation context
//!
//! This module provides the per-run state for lowering: the operand
//! allocators, the instruction buffer being appended to, and any value
//! that must stay visible across a whole function body (currently the
//! epilogue jump label; loop-exit and loop-continue labels would live
//! here too once control flow is lowered).

use crate::backend::iloc::{Insn, InsnList, Label, LabelAllocator, Reg, VirtualRegAllocator};
use crate::backend::lower::error::CodegenError;

/// Context for lowering an AST to ILOC
///
/// One instance per code-generation run. The operand allocators live
/// here, so register and label numbering restarts with each run and
/// two runs never share operand identities.
pub struct CodegenContext {
    /// Virtual register allocator
    regs: VirtualRegAllocator,

    /// Anonymous label allocator
    labels: LabelAllocator,

    /// Instructions emitted since the last [`take_code`](Self::take_code)
    code: InsnList,

    /// Epilogue jump label of the function currently being lowered
    current_epilogue_jump_label: Option<Label>,
}

impl CodegenContext {
    /// Create a fresh context for one run
    pub fn new() -> Self {
        Self {
            regs: VirtualRegAllocator::new(),
            labels: LabelAllocator::new(),
            code: InsnList::new(),
            current_epilogue_jump_label: None,
        }
    }

    // ========================================================================
    // Operand allocation
    // ========================================================================

    /// Allocate a fresh virtual register
    pub fn fresh_reg(&mut self) -> Reg {
        Reg::Virtual(self.regs.fresh())
    }

    /// Allocate a fresh anonymous label
    pub fn fresh_label(&mut self) -> Label {
        self.labels.fresh()
    }

    // ========================================================================
    // Code emission
    // ========================================================================

    /// Append an instruction to the current buffer
    pub fn emit(&mut self, insn: Insn) {
        self.code.push(insn);
    }

    /// Take the instructions accumulated since the last call
    pub fn take_code(&mut self) -> InsnList {
        std::mem::take(&mut self.code)
    }

    // ========================================================================
    // Function-scoped state
    // ========================================================================

    /// Rebind the epilogue jump label on function entry
    pub fn set_epilogue_label(&mut self, label: Label) {
        self.current_epilogue_jump_label = Some(label);
    }

    /// The epilogue jump label of the enclosing function
    ///
    /// Errors if no function is being lowered, which means a return
    /// statement appeared outside any function body.
    pub fn epilogue_label(&self) -> Result<&Label, CodegenError> {
        self.current_epilogue_jump_label
            .as_ref()
            .ok_or(CodegenError::ReturnOutsideFunction)
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self::new()
    }
}
