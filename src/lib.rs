//! Ferrum compiler backend: ILOC code generation
//!
//! This crate implements the code-generation phase of the Ferrum compiler.
//! It walks a typed, semantically-checked AST and emits a linear sequence
//! of ILOC instructions over an unbounded set of virtual registers,
//! leaving register allocation and machine-specific instruction selection
//! to later phases.
//!
//! # Pipeline position
//!
//! ```text
//! Typed AST (Program)
//!     │
//!     ▼ lower
//! ILOC (InsnList) - linear three-address code
//!     │
//!     ▼ register allocator / emitter (separate phases)
//! ```
//!
//! # Modules
//!
//! - [`common`]: AST and symbol data produced by the upstream phases
//! - [`backend`]: the ILOC instruction set and the lowering pass

pub mod backend;
pub mod common;

pub use backend::lower::{generate_code, lower_function, CodegenError};
pub use backend::{Insn, InsnList, Label, Reg, VirtualReg};
