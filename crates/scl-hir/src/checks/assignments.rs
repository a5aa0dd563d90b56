//! Undefined-identifier detection in the executable body.
//!
//! Scans the lines between the `BEGIN` marker and end of file. Every
//! assignment line has its dotted word tokens checked against the symbol
//! forest; a token survives the exemptions only if nothing declared,
//! reserved, or literal accounts for it.

use rustc_hash::FxHashSet;

use scl_syntax::{is_keyword, tokens};

use crate::checks::{body_start, char_len, code_of};
use crate::diagnostics::{DiagnosticBuilder, DiagnosticCode, LineRange};
use crate::symbols::SymbolForest;

/// Rule (a): flag identifiers in assignments that resolve to nothing.
pub fn check(lines: &[&str], forest: &SymbolForest, builder: &mut DiagnosticBuilder) {
    let Some(start) = body_start(lines) else {
        return;
    };

    // Parenthesis balance carried across lines, so formal argument names
    // in multi-line calls stay exempt.
    let mut depth = 0;
    for (line_no, raw) in lines.iter().enumerate().skip(start) {
        let code = code_of(raw);
        if !code.contains(":=") {
            depth = tokens::word_tokens(code, depth).1.max(0);
            continue;
        }

        let (words, new_depth) = tokens::word_tokens(code, depth);
        depth = new_depth.max(0);

        let mut reported: FxHashSet<&str> = FxHashSet::default();
        for token in words {
            if token.named_arg || is_exempt(token.text, forest) {
                continue;
            }
            if !reported.insert(token.text) {
                continue;
            }
            let start_col = token.start as u32;
            builder.report(
                DiagnosticCode::UndefinedVariable,
                LineRange::on_line(line_no as u32, start_col, start_col + char_len(token.text)),
                format!("variable '{}' is not defined", token.text),
            );
        }
    }
}

fn is_exempt(token: &str, forest: &SymbolForest) -> bool {
    // Tokens without a single identifier character are punctuation noise
    // from the dotted-word scan, not identifiers.
    if !token.chars().any(|c| c.is_ascii_alphanumeric() || c == '_') {
        return true;
    }
    if tokens::is_numeric_literal(token) || tokens::is_time_literal(token) {
        return true;
    }
    if is_keyword(token) {
        return true;
    }
    let path: Vec<&str> = token.split('.').collect();
    if forest.resolve(&path).is_some() {
        return true;
    }
    // A dotted access rooted at a function-block instance: the instance is
    // declared here but its members are not, so the tail is unknowable.
    if let Some(root) = forest.resolve(&path[..1]) {
        if !root.is_struct() && !scl_syntax::is_elementary_type(&root.data_type) {
            return true;
        }
    }
    false
}
