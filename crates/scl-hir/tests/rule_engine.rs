//! Integration tests for the diagnostic rule engine.

use scl_hir::{run_diagnostics, run_diagnostics_with, CheckOptions, DiagnosticCode, Severity, SymbolForest};

fn diagnose(source: &str) -> Vec<scl_hir::Diagnostic> {
    let forest = SymbolForest::parse(source);
    let lines: Vec<&str> = source.lines().collect();
    run_diagnostics(&lines, &forest)
}

#[test]
fn undefined_assignment_operands_warn() {
    let diags = diagnose("BEGIN\n x := y;\n END");
    let undefined: Vec<_> = diags
        .iter()
        .filter(|d| d.code == DiagnosticCode::UndefinedVariable)
        .collect();
    assert_eq!(undefined.len(), 2);
    assert!(undefined[0].message.contains("'x'"));
    assert!(undefined[1].message.contains("'y'"));
    assert!(undefined.iter().all(|d| d.severity == Severity::Warning));
}

#[test]
fn balanced_if_with_then_and_terminator_is_clean() {
    let source = "VAR\na : BOOL;\nx : INT;\nEND_VAR\nBEGIN\nIF a THEN\n x := 1;\n END_IF;\nEND";
    assert!(diagnose(source).is_empty());
}

#[test]
fn missing_then_cites_the_if_line() {
    let diags = diagnose("BEGIN\nIF a\n x := 1;\n END_IF;\nEND");
    let conditionals: Vec<_> = diags
        .iter()
        .filter(|d| d.code == DiagnosticCode::MissingThen)
        .collect();
    assert_eq!(conditionals.len(), 1);
    assert_eq!(conditionals[0].range.start.line, 1);
}

#[test]
fn rule_order_is_stable() {
    // One finding per rule, deliberately out of line order across rules.
    let source = "\
VAR
MotorSpeedSetpointValue_X : REAL;
MotorSpeedSetpointValue_Y : REAL;
END_VAR
BEGIN
q := 1
IF c THEN
 r := 2;
END_IF
END
";
    let diags = diagnose(source);
    let codes: Vec<DiagnosticCode> = diags.iter().map(|d| d.code).collect();
    // undefined identifiers first, then termination, then conditionals,
    // then naming
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::UndefinedVariable, // q
            DiagnosticCode::UndefinedVariable, // r
            DiagnosticCode::MissingSemicolon,  // q := 1
            DiagnosticCode::MissingSemicolon,  // END_IF
            DiagnosticCode::NameTooLong,
            DiagnosticCode::NameTooLong,
            DiagnosticCode::NameCollision,
        ]
    );
}

#[test]
fn rules_can_be_disabled() {
    let source = "BEGIN\n x := y\nEND";
    let forest = SymbolForest::parse(source);
    let lines: Vec<&str> = source.lines().collect();

    let all = run_diagnostics(&lines, &forest);
    assert!(all.iter().any(|d| d.code == DiagnosticCode::UndefinedVariable));
    assert!(all.iter().any(|d| d.code == DiagnosticCode::MissingSemicolon));

    let options = CheckOptions {
        undefined_variables: false,
        ..CheckOptions::default()
    };
    let trimmed = run_diagnostics_with(&lines, &forest, &options);
    assert!(trimmed.iter().all(|d| d.code != DiagnosticCode::UndefinedVariable));
    assert!(trimmed.iter().any(|d| d.code == DiagnosticCode::MissingSemicolon));
}

#[test]
fn empty_input_produces_no_diagnostics() {
    assert!(diagnose("").is_empty());
}

#[test]
fn non_scl_text_never_panics() {
    let diags = diagnose("{ \"json\": [1, 2, 3] }\n<xml></xml>\n");
    assert!(diags.is_empty());
}
