//! Function lowering and the code-generation driver

use crate::backend::iloc::{Insn, InsnList, Label};
use crate::backend::lower::context::CodegenContext;
use crate::backend::lower::error::CodegenError;
use crate::backend::lower::stmt::lower_block;
use crate::common::ast::{Function, Program};
use log::debug;

/// Lower one function to ILOC
///
/// The emitted shape is: entry label derived from the function name,
/// the body's code, the epilogue label, and a `return`. The epilogue
/// label is reserved before the body is lowered so that return
/// statements inside it can jump there.
pub fn lower_function(
    ctx: &mut CodegenContext,
    func: &Function,
) -> Result<InsnList, CodegenError> {
    debug!("lowering function `{}`", func.name);

    let epilogue = ctx.fresh_label();
    ctx.set_epilogue_label(epilogue.clone());

    ctx.emit(Insn::Label(Label::func(&func.name)));
    // TODO: emit the prologue once stack frames are laid out

    lower_block(ctx, &func.body)?;

    ctx.emit(Insn::Label(epilogue));
    // TODO: emit the epilogue once stack frames are laid out
    ctx.emit(Insn::Return);

    Ok(ctx.take_code())
}

/// Generate ILOC code for a whole program
///
/// Functions are lowered in declaration order and their code is
/// concatenated. An empty program yields an empty list. The returned
/// list owns its instructions outright and stays valid after the AST
/// is dropped.
pub fn generate_code(program: &Program) -> Result<InsnList, CodegenError> {
    let mut ctx = CodegenContext::new();

    let mut code = InsnList::new();
    for func in &program.functions {
        code.append(lower_function(&mut ctx, func)?);
    }

    debug!(
        "generated {} instructions for {} function(s)",
        code.len(),
        program.functions.len()
    );
    Ok(code)
}
