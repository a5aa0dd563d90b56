//! Conversions between core analysis types and LSP wire types.

use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString,
    Position, Range, Url,
};

use scl_hir::Severity;

pub fn to_lsp_position(position: scl_hir::Position) -> Position {
    Position::new(position.line, position.character)
}

pub fn from_lsp_position(position: Position) -> scl_hir::Position {
    scl_hir::Position::new(position.line, position.character)
}

pub fn to_lsp_range(range: scl_hir::LineRange) -> Range {
    Range::new(to_lsp_position(range.start), to_lsp_position(range.end))
}

pub fn to_lsp_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    }
}

/// Converts one core diagnostic to its LSP form.
pub fn to_lsp_diagnostic(uri: &Url, diagnostic: &scl_hir::Diagnostic) -> Diagnostic {
    let related = if diagnostic.related.is_empty() {
        None
    } else {
        Some(
            diagnostic
                .related
                .iter()
                .map(|info| DiagnosticRelatedInformation {
                    location: Location {
                        uri: uri.clone(),
                        range: to_lsp_range(info.range),
                    },
                    message: info.message.clone(),
                })
                .collect(),
        )
    };

    Diagnostic {
        range: to_lsp_range(diagnostic.range),
        severity: Some(to_lsp_severity(diagnostic.severity)),
        code: Some(NumberOrString::String(diagnostic.code.code().to_string())),
        source: Some("scl-lsp".to_string()),
        message: diagnostic.message.clone(),
        related_information: related,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_hir::{DiagnosticCode, LineRange};

    #[test]
    fn range_conversion_is_positional() {
        let range = to_lsp_range(LineRange::on_line(3, 2, 9));
        assert_eq!(range.start, Position::new(3, 2));
        assert_eq!(range.end, Position::new(3, 9));
    }

    #[test]
    fn severity_mapping() {
        assert_eq!(to_lsp_severity(Severity::Error), DiagnosticSeverity::ERROR);
        assert_eq!(
            to_lsp_severity(Severity::Warning),
            DiagnosticSeverity::WARNING
        );
        assert_eq!(
            to_lsp_severity(Severity::Info),
            DiagnosticSeverity::INFORMATION
        );
    }

    #[test]
    fn diagnostic_carries_code_source_and_related() {
        let uri = Url::parse("file:///project/main.scl").unwrap();
        let core = scl_hir::Diagnostic::new(
            DiagnosticCode::NameCollision,
            LineRange::on_line(5, 0, 10),
            "name 'a' collides with 'b'",
        )
        .with_related(LineRange::on_line(1, 0, 10), "first declared here");
        let lsp = to_lsp_diagnostic(&uri, &core);
        assert_eq!(lsp.code, Some(NumberOrString::String("E104".to_string())));
        assert_eq!(lsp.source.as_deref(), Some("scl-lsp"));
        let related = lsp.related_information.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].location.range.start.line, 1);
    }
}
