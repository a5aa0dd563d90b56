//! `scl-syntax` - Keyword table and line classification for Siemens SCL.
//!
//! This crate provides the low-level lexical layer for SCL source text:
//!
//! - **Keyword table**: the static set of reserved words and elementary
//!   data type names
//! - **Line classification**: predicates and extractors that recognise
//!   declaration-block markers, structure boundaries, and variable
//!   declarations on a single physical line
//! - **Token scanning**: dotted-word extraction with column positions,
//!   literal classification, and cursor-to-token mapping
//!
//! # Design Principles
//!
//! SCL intelligence in this workspace is deliberately line-oriented: there
//! is no token stream or syntax tree, only a left-to-right pass over
//! physical lines. Every pattern the symbol builder or a diagnostic rule
//! relies on is therefore exported here as an explicit, independently
//! testable function rather than an inline match buried in a scanner loop.
//!
//! # Example
//!
//! ```
//! use scl_syntax::lines;
//!
//! let decl = lines::var_decl("    speed : REAL := 0.0; // setpoint").unwrap();
//! assert_eq!(decl.name, "speed");
//! assert_eq!(decl.data_type, "REAL");
//! assert_eq!(decl.default, Some("0.0"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod keywords;
pub mod lines;
pub mod tokens;

pub use keywords::{is_elementary_type, is_keyword};
pub use lines::{
    block_open, is_begin_marker, is_block_close, is_struct_close, strip_comment, struct_open,
    trailing_comment, var_decl, BlockKind, VarDecl,
};
pub use tokens::{
    completion_prefix, is_numeric_literal, is_time_literal, paren_balance, token_at, word_tokens,
    Token, TokenAt,
};
