//! Code-generation error types

use thiserror::Error;

/// Internal errors surfaced by the lowering pass
///
/// These indicate a tree that semantic analysis should not have let
/// through; they are reported rather than silently lowered to invalid
/// operands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A symbol reached code generation without a storage location
    #[error("symbol '{name}' has no storage location")]
    UnplacedSymbol { name: String },

    /// A return statement was lowered with no enclosing function
    #[error("return statement outside of a function body")]
    ReturnOutsideFunction,
}
