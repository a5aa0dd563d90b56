//! `scl-hir` - Symbol forest and diagnostic rules for Siemens SCL.
//!
//! This crate turns raw SCL source text into the two artefacts the editor
//! features are built on:
//!
//! - **Symbol forest**: a tree of declaration nodes (variable blocks,
//!   nested structures, leaf variables) addressable by dotted path, with a
//!   flat path index for O(1) lookup
//! - **Diagnostics**: a rule engine that scans the raw line sequence
//!   against the forest and reports undefined identifiers, missing
//!   statement terminators, unbalanced conditional blocks, and symbol
//!   naming problems
//!
//! # Architecture
//!
//! The forest is rebuilt wholesale from the full document text on every
//! edit; there is no incremental reparsing and no state shared between
//! documents. Lookups never fail loudly: a miss is `None` or an empty
//! sequence, so editor features degrade to "no information" instead of
//! erroring. The builder tolerates malformed input the same way - lines it
//! cannot classify contribute no node, and unmatched block or structure
//! closers are no-ops.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod builder;
pub mod checks;
pub mod diagnostics;
pub mod symbols;

pub use checks::{run_diagnostics, run_diagnostics_with, CheckOptions};
pub use diagnostics::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, LineRange, Position, RelatedInfo, Severity,
};
pub use symbols::{DeclKind, DeclNode, NodeId, SymbolForest, STRUCT_TYPE};
