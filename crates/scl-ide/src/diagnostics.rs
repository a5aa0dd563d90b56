//! Diagnostics collection for SCL documents.
//!
//! This module runs the rule engine over a document and provides
//! severity-based filtering helpers.

use tracing::debug;

use scl_hir::{run_diagnostics_with, CheckOptions, Diagnostic, Severity, SymbolForest};

/// Collects all diagnostics for a document.
pub fn collect_diagnostics(
    text: &str,
    forest: &SymbolForest,
    options: &CheckOptions,
) -> Vec<Diagnostic> {
    let lines: Vec<&str> = text.lines().collect();
    let diagnostics = run_diagnostics_with(&lines, forest, options);
    debug!("{} diagnostics over {} lines", diagnostics.len(), lines.len());
    diagnostics
}

/// Filters diagnostics by severity.
pub fn filter_by_severity(diagnostics: &[Diagnostic], min_severity: Severity) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.severity <= min_severity)
        .collect()
}

/// Returns only error diagnostics.
pub fn errors_only(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics.iter().filter(|d| d.is_error()).collect()
}

/// Returns true if there are any errors.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
