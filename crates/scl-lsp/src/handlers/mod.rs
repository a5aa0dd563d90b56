//! LSP request and notification handlers.

mod diagnostics;
mod features;
mod lsp_utils;
mod sync;

pub use features::{completion, document_highlight, hover};
pub use sync::{did_change, did_close, did_open, did_save};
