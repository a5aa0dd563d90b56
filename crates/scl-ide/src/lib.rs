//! `scl-ide` - Editor features for Siemens SCL.
//!
//! This crate provides the editor-facing features built on top of
//! `scl-hir`:
//!
//! - **Hover**: type, default, and inherited documentation for the symbol
//!   under the cursor
//! - **Completion**: member and top-level suggestions for a dotted path
//! - **Bracket highlighting**: cross-line matching of `()`, `[]`, `{}`
//! - **Diagnostics**: collection and filtering of rule-engine findings
//!
//! # Architecture
//!
//! Every feature is a pure function over a [`scl_hir::SymbolForest`] and
//! the document's line sequence; no feature holds state or talks to the
//! protocol layer. A feature that has nothing to say returns `None` or an
//! empty vector, never an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod completion;
pub mod diagnostics;
pub mod highlight;
pub mod hover;

pub use completion::{complete, CompletionItem, CompletionKind};
pub use diagnostics::{collect_diagnostics, errors_only, filter_by_severity, has_errors};
pub use highlight::matching_brackets;
pub use hover::{hover, HoverResult};
