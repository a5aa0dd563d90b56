//! The diagnostic rule engine.
//!
//! Four independent rules run over the raw line sequence and the current
//! symbol forest, reporting into a shared [`DiagnosticBuilder`] in a
//! fixed order: undefined identifiers, statement termination,
//! conditional-block balance, then name collisions and lengths. Within a
//! rule, findings appear in source-line order. A rule that cannot match
//! a line simply contributes nothing - malformed input degrades
//! coverage, never aborts the scan.

pub mod assignments;
pub mod conditionals;
pub mod naming;
pub mod statements;

use tracing::trace;

use scl_syntax::lines::{is_begin_marker, strip_comment};

use crate::diagnostics::{Diagnostic, DiagnosticBuilder};
use crate::symbols::SymbolForest;

/// Tunables for the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Symbol name length limit for the naming rule.
    pub max_name_len: usize,
    /// Run the undefined-identifier rule.
    pub undefined_variables: bool,
    /// Run the statement-termination rule.
    pub statement_termination: bool,
    /// Run the conditional-block balance rule.
    pub conditional_balance: bool,
    /// Run the name collision/length rule.
    pub naming: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_name_len: 24,
            undefined_variables: true,
            statement_termination: true,
            conditional_balance: true,
            naming: true,
        }
    }
}

/// Runs every rule with default options.
#[must_use]
pub fn run_diagnostics(lines: &[&str], forest: &SymbolForest) -> Vec<Diagnostic> {
    run_diagnostics_with(lines, forest, &CheckOptions::default())
}

/// Runs the enabled rules and concatenates their findings in rule order.
#[must_use]
pub fn run_diagnostics_with(
    lines: &[&str],
    forest: &SymbolForest,
    options: &CheckOptions,
) -> Vec<Diagnostic> {
    let mut builder = DiagnosticBuilder::new();
    if options.undefined_variables {
        assignments::check(lines, forest, &mut builder);
    }
    if options.statement_termination {
        statements::check(lines, &mut builder);
    }
    if options.conditional_balance {
        conditionals::check(lines, &mut builder);
    }
    if options.naming {
        naming::check(lines, options, &mut builder);
    }
    let out = builder.finish();
    trace!(findings = out.len(), "diagnostic pass complete");
    out
}

/// Index of the first executable-body line, i.e. the line after `BEGIN`.
pub(crate) fn body_start(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| is_begin_marker(line))
        .map(|idx| idx + 1)
}

/// The code portion of a line with trailing whitespace removed. Leading
/// whitespace is kept so character columns line up with the source.
pub(crate) fn code_of(line: &str) -> &str {
    strip_comment(line).trim_end()
}

/// Character length of a string, for column arithmetic.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn char_len(s: &str) -> u32 {
    s.chars().count() as u32
}
