//! Conditional-block balance checking.
//!
//! A stack machine over IF/THEN/ELSE/END_IF: each open block records
//! where it opened, whether a THEN was seen, and where its ELSE is. The
//! terminal state is an empty stack at end of input; anything left open
//! is reported at its opening line.

use crate::checks::{char_len, code_of};
use crate::diagnostics::{DiagnosticBuilder, DiagnosticCode, LineRange};

struct IfBlock {
    open_line: usize,
    then_line: Option<usize>,
}

/// Rule (c): report unbalanced or malformed IF blocks.
pub fn check(lines: &[&str], builder: &mut DiagnosticBuilder) {
    let mut stack: Vec<IfBlock> = Vec::new();

    for (line_no, raw) in lines.iter().enumerate() {
        let code = code_of(raw);
        let upper = code.trim().to_ascii_uppercase();

        if first_word(&upper) == Some("IF") {
            stack.push(IfBlock {
                open_line: line_no,
                then_line: None,
            });
        }

        if contains_word(&upper, "THEN") {
            if let Some(block) = stack.last_mut() {
                block.then_line = Some(line_no);
            }
        }

        if first_word(&upper) == Some("ELSE") {
            if else_branch_is_empty(lines, line_no) {
                builder.report(
                    DiagnosticCode::EmptyElse,
                    LineRange::on_line(line_no as u32, 0, char_len(raw)),
                    "ELSE branch is empty",
                );
            }
        }

        if contains_word(&upper, "END_IF") {
            if let Some(block) = stack.pop() {
                if block.then_line.is_none() {
                    builder.report(
                        DiagnosticCode::MissingThen,
                        full_line_range(lines, block.open_line),
                        "missing THEN after IF",
                    );
                }
                if !code.ends_with(';') {
                    let col = char_len(code);
                    builder.report(
                        DiagnosticCode::MissingSemicolon,
                        LineRange::on_line(line_no as u32, col, col + 1),
                        "missing ';'",
                    );
                }
            }
        }
    }

    for block in stack {
        builder.report(
            DiagnosticCode::UnclosedIf,
            full_line_range(lines, block.open_line),
            "missing END_IF after IF",
        );
    }
}

/// True when nothing but blanks and comments sit between the ELSE line
/// and the closing END_IF - no statement terminator at all.
fn else_branch_is_empty(lines: &[&str], else_line: usize) -> bool {
    for line in lines.iter().skip(else_line + 1) {
        let code = code_of(line).trim();
        if code.is_empty() {
            continue;
        }
        if code.contains(';') && !code.to_ascii_uppercase().starts_with("END_IF") {
            return false;
        }
        if code.to_ascii_uppercase().starts_with("END_IF") {
            return true;
        }
    }
    false
}

fn full_line_range(lines: &[&str], line_no: usize) -> LineRange {
    let len = lines.get(line_no).map_or(0, |line| char_len(line));
    LineRange::on_line(line_no as u32, 0, len)
}

fn first_word(upper: &str) -> Option<&str> {
    let end = upper
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(upper.len());
    if end == 0 {
        None
    } else {
        Some(&upper[..end])
    }
}

/// Substring search with identifier-boundary checks on both sides.
fn contains_word(upper: &str, word: &str) -> bool {
    let bytes = upper.as_bytes();
    let mut offset = 0;
    while let Some(pos) = upper[offset..].find(word) {
        let begin = offset + pos;
        let end = begin + word.len();
        let before_ok = begin == 0 || !is_ident_byte(bytes[begin - 1]);
        let after_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        offset = begin + 1;
    }
    false
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
