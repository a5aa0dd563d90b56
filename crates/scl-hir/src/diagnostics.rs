//! Diagnostic types for the rule engine.
//!
//! Ranges are half-open line/character spans, zero-based, matching the
//! addressing convention of the editor protocol. Diagnostics are the
//! engine's output, not its failure mode - the rules themselves never
//! error.

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Error - the statement is wrong.
    Error,
    /// Warning - likely a mistake.
    Warning,
    /// Information - style or limit notice.
    Info,
}

/// A zero-based line/character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based character column.
    pub character: u32,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRange {
    /// Start position, inclusive.
    pub start: Position,
    /// End position, exclusive.
    pub end: Position,
}

impl LineRange {
    /// Creates a range from two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a single-line range.
    #[must_use]
    pub const fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }
}

/// A diagnostic code identifying the finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// IF statement without a THEN.
    MissingThen,
    /// IF statement never closed by END_IF.
    UnclosedIf,
    /// Statement without a terminating semicolon.
    MissingSemicolon,
    /// Truncated-name collision between two declarations.
    NameCollision,
    /// Identifier used in the executable body but never declared.
    UndefinedVariable,
    /// ELSE branch with no statement before END_IF.
    EmptyElse,
    /// Declared name longer than the symbol length limit.
    NameTooLong,
}

impl DiagnosticCode {
    /// Returns the string code (e.g., "E002").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingThen => "E002",
            Self::UnclosedIf => "E003",
            Self::MissingSemicolon => "E004",
            Self::NameCollision => "E104",
            Self::UndefinedVariable => "W101",
            Self::EmptyElse => "W004",
            Self::NameTooLong => "I001",
        }
    }

    /// Returns the severity for this diagnostic code.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::MissingThen | Self::UnclosedIf | Self::MissingSemicolon | Self::NameCollision => {
                Severity::Error
            }
            Self::UndefinedVariable | Self::EmptyElse => Severity::Warning,
            Self::NameTooLong => Severity::Info,
        }
    }
}

/// Related information for a diagnostic (e.g. "first declared here").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// The location of the related information.
    pub range: LineRange,
    /// The message.
    pub message: String,
}

/// A single finding of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: Severity,
    /// The source span the finding applies to.
    pub range: LineRange,
    /// The human-readable message.
    pub message: String,
    /// Related locations (e.g. the colliding declaration).
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// Creates a diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, range: LineRange, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Adds a related location.
    #[must_use]
    pub fn with_related(mut self, range: LineRange, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            range,
            message: message.into(),
        });
        self
    }

    /// Returns true if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(
            f,
            "{severity}[{}]: {} (at {}:{})",
            self.code.code(),
            self.message,
            self.range.start.line,
            self.range.start.character
        )
    }
}

/// Accumulator used by the individual rules.
#[derive(Debug, Default)]
pub struct DiagnosticBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Adds a finding with the code's default severity.
    pub fn report(&mut self, code: DiagnosticCode, range: LineRange, message: impl Into<String>) {
        self.add(Diagnostic::new(code, range, message));
    }

    /// Returns true if any errors have been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Consumes the builder and returns the diagnostics.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_severities() {
        assert_eq!(DiagnosticCode::MissingThen.severity(), Severity::Error);
        assert_eq!(
            DiagnosticCode::UndefinedVariable.severity(),
            Severity::Warning
        );
        assert_eq!(DiagnosticCode::NameTooLong.severity(), Severity::Info);
    }

    #[test]
    fn display_format() {
        let diag = Diagnostic::new(
            DiagnosticCode::UndefinedVariable,
            LineRange::on_line(3, 4, 9),
            "variable 'speed' is not defined",
        );
        assert_eq!(
            diag.to_string(),
            "warning[W101]: variable 'speed' is not defined (at 3:4)"
        );
    }

    #[test]
    fn builder_collects() {
        let mut builder = DiagnosticBuilder::new();
        builder.report(
            DiagnosticCode::MissingSemicolon,
            LineRange::on_line(0, 7, 8),
            "missing ';'",
        );
        builder.report(
            DiagnosticCode::NameTooLong,
            LineRange::on_line(1, 0, 30),
            "name exceeds 24 characters",
        );
        assert!(builder.has_errors());
        assert_eq!(builder.finish().len(), 2);
    }
}
