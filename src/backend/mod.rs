//! Ferrum compiler backend
//!
//! This module implements code generation: the typed AST produced by the
//! frontend is lowered into ILOC, a linear three-address intermediate
//! language over unbounded virtual registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   Typed AST     │────▶│  ILOC Lowering  │────▶│ Register Alloc  │
//! │   (Program)     │     │   (InsnList)    │     │ (later phase)   │
//! └─────────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - `iloc`: ILOC instruction set definitions (target language)
//! - `lower`: AST to ILOC lowering

pub mod iloc;
pub mod lower;

// Re-export commonly used types from iloc
pub use iloc::{Insn, InsnList, Label, Reg, VirtualReg};

// Re-export the lowering entry points
pub use lower::{generate_code, lower_function};
