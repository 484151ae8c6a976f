//! Statement lowering from AST to ILOC

use crate::backend::iloc::{Insn, Reg};
use crate::backend::lower::context::CodegenContext;
use crate::backend::lower::error::CodegenError;
use crate::backend::lower::expr::{lower_expr, var_addr};
use crate::common::ast::{Block, Expr, Stmt};
use crate::common::symbol::Symbol;

/// Lower a statement to ILOC
pub fn lower_stmt(ctx: &mut CodegenContext, stmt: &Stmt) -> Result<(), CodegenError> {
    match stmt {
        Stmt::Assignment { target, value } => lower_assignment(ctx, target, value),

        Stmt::Return { value } => lower_return(ctx, value.as_ref()),
    }
}

/// Lower a block: each statement in declared order, nothing else
pub fn lower_block(ctx: &mut CodegenContext, block: &Block) -> Result<(), CodegenError> {
    for stmt in &block.stmts {
        lower_stmt(ctx, stmt)?;
    }
    Ok(())
}

/// Lower an assignment
///
/// The target address is computed before the value, matching source
/// evaluation order.
fn lower_assignment(
    ctx: &mut CodegenContext,
    target: &Symbol,
    value: &Expr,
) -> Result<(), CodegenError> {
    let addr = var_addr(ctx, target)?;
    let value_reg = lower_expr(ctx, value)?;
    ctx.emit(Insn::Store {
        src: value_reg,
        addr,
    });
    Ok(())
}

/// Lower a return statement
///
/// Moves the value (if any) into the return register, then jumps to the
/// enclosing function's epilogue.
fn lower_return(ctx: &mut CodegenContext, value: Option<&Expr>) -> Result<(), CodegenError> {
    if let Some(expr) = value {
        let value_reg = lower_expr(ctx, expr)?;
        ctx.emit(Insn::I2i {
            src: value_reg,
            dst: Reg::Ret,
        });
    }
    let target = ctx.epilogue_label()?.clone();
    ctx.emit(Insn::Jump(target));
    Ok(())
}
