//! Symbol storage locations
//!
//! Semantic analysis assigns every variable a storage class and an
//! offset; code generation only reads them to compute addresses.

use std::fmt;

/// Where a variable lives at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageClass {
    /// Fixed absolute location (global data segment)
    Static,
    /// Parameter slot relative to the frame base pointer
    StackParam,
    /// Local slot relative to the frame base pointer
    StackLocal,
    /// No location assigned yet (analysis default; invalid in codegen)
    Unplaced,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StorageClass::Static => write!(f, "static"),
            StorageClass::StackParam => write!(f, "param"),
            StorageClass::StackLocal => write!(f, "local"),
            StorageClass::Unplaced => write!(f, "unplaced"),
        }
    }
}

/// A variable symbol as annotated by semantic analysis
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// Storage class assigned by semantic analysis
    pub location: StorageClass,
    /// Absolute offset for statics, frame-relative offset for stack slots
    pub offset: i64,
}

impl Symbol {
    pub fn new(name: impl Into<String>, location: StorageClass, offset: i64) -> Self {
        Self {
            name: name.into(),
            location,
            offset,
        }
    }

    /// A static variable at an absolute offset
    pub fn static_var(name: impl Into<String>, offset: i64) -> Self {
        Self::new(name, StorageClass::Static, offset)
    }

    /// A stack-resident local at a frame-relative offset
    pub fn stack_local(name: impl Into<String>, offset: i64) -> Self {
        Self::new(name, StorageClass::StackLocal, offset)
    }

    /// A stack-resident parameter at a frame-relative offset
    pub fn stack_param(name: impl Into<String>, offset: i64) -> Self {
        Self::new(name, StorageClass::StackParam, offset)
    }
}
