//! Statement-termination checking with line-continuation tolerance.
//!
//! An assignment line in the executable body must end in `;`. Two kinds
//! of continuation are legitimate: a multi-line call whose parentheses
//! close on a later line, and a logical expression continued with
//! AND/OR/XOR/NOT on the following line. Everything else is a missing
//! terminator, reported just past the end of the code text.

use scl_syntax::tokens::paren_balance;

use crate::checks::{body_start, char_len, code_of};
use crate::diagnostics::{DiagnosticBuilder, DiagnosticCode, LineRange};

/// Rule (b): report assignment statements without a terminator.
pub fn check(lines: &[&str], builder: &mut DiagnosticBuilder) {
    let Some(start) = body_start(lines) else {
        return;
    };

    let mut i = start;
    while i < lines.len() {
        let code = code_of(lines[i]);
        if code.trim().is_empty() || !code.contains(":=") || code.ends_with(';') {
            i += 1;
            continue;
        }

        let balance = paren_balance(code);
        if balance > 0 {
            // An in-progress multi-line call: find the line that closes
            // the parenthesis balance.
            match closing_line(lines, i + 1, balance) {
                Some(close) => {
                    let closing_code = code_of(lines[close]);
                    if !closing_code.ends_with(';') {
                        let col = char_len(closing_code);
                        builder.report(
                            DiagnosticCode::MissingSemicolon,
                            LineRange::on_line(close as u32, col, col + 1),
                            "missing ';' after call",
                        );
                    }
                    i = close + 1;
                    continue;
                }
                // Balance never closes: incomplete input, not yet an error.
                None => break,
            }
        }

        if next_code_line(lines, i + 1).is_some_and(starts_with_continuation) {
            i += 1;
            continue;
        }

        let col = char_len(code);
        builder.report(
            DiagnosticCode::MissingSemicolon,
            LineRange::on_line(i as u32, col, col + 1),
            "missing ';'",
        );
        i += 1;
    }
}

fn closing_line(lines: &[&str], from: usize, mut balance: i32) -> Option<usize> {
    for (idx, line) in lines.iter().enumerate().skip(from) {
        balance += paren_balance(code_of(line));
        if balance <= 0 {
            return Some(idx);
        }
    }
    None
}

/// First following line that is neither blank nor comment-only.
fn next_code_line<'a>(lines: &[&'a str], from: usize) -> Option<&'a str> {
    lines
        .iter()
        .skip(from)
        .map(|line| code_of(line))
        .find(|code| !code.trim().is_empty())
}

/// True if the line's first or second word is a logical-continuation
/// operator (the second word is accepted to tolerate one level of
/// indentation by a leading label or operand).
fn starts_with_continuation(code: &str) -> bool {
    code.split_whitespace()
        .take(2)
        .any(|word| is_continuation_operator(word))
}

fn is_continuation_operator(word: &str) -> bool {
    let end = word
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(word.len());
    matches!(
        word[..end].to_ascii_uppercase().as_str(),
        "AND" | "OR" | "XOR" | "NOT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Vec<crate::diagnostics::Diagnostic> {
        let lines: Vec<&str> = source.lines().collect();
        let mut builder = DiagnosticBuilder::new();
        check(&lines, &mut builder);
        builder.finish()
    }

    #[test]
    fn terminated_statements_pass() {
        assert!(run("BEGIN\nx := 1;\ny := 2; // done\nEND").is_empty());
    }

    #[test]
    fn missing_semicolon_is_reported_after_code() {
        let diags = run("BEGIN\nx := 5\n\nEND_IF");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range.start.line, 1);
        assert_eq!(diags[0].range.start.character, 6);
        assert_eq!(diags[0].range.end.character, 7);
    }

    #[test]
    fn logical_continuation_suppresses() {
        assert!(run("BEGIN\nok := a\n  AND b;\nEND").is_empty());
        assert!(run("BEGIN\nok := a\n  b OR c;\nEND").is_empty());
    }

    #[test]
    fn multiline_call_closing_without_semicolon() {
        let diags = run("BEGIN\nout := FB1(\n  IN := x,\n  PT := T#5s\n)\nEND");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "missing ';' after call");
        assert_eq!(diags[0].range.start.line, 4);
    }

    #[test]
    fn multiline_call_with_semicolon_passes() {
        assert!(run("BEGIN\nout := FB1(\n  IN := x\n);\nEND").is_empty());
    }

    #[test]
    fn unclosed_call_is_suppressed() {
        assert!(run("BEGIN\nout := FB1(\n  IN := x,").is_empty());
    }

    #[test]
    fn nothing_before_begin_is_checked() {
        assert!(run("x := 1\nBEGIN\nEND").is_empty());
    }
}
