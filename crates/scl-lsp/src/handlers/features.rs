//! Language feature handlers: hover, completion, document highlight.

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionParams, CompletionResponse, DocumentHighlight,
    DocumentHighlightKind, DocumentHighlightParams, Hover, HoverContents, HoverParams,
    MarkedString,
};

use scl_ide::CompletionKind;

use crate::state::ServerState;

use super::lsp_utils::{from_lsp_position, to_lsp_range};

pub fn hover(state: &ServerState, params: HoverParams) -> Option<Hover> {
    let position = params.text_document_position_params;
    let document = state.get_document(&position.text_document.uri)?;
    let lines: Vec<&str> = document.content.lines().collect();

    let result = scl_ide::hover(
        &document.forest,
        &lines,
        from_lsp_position(position.position),
    )?;
    Some(Hover {
        contents: HoverContents::Scalar(MarkedString::String(result.contents)),
        range: Some(to_lsp_range(result.range)),
    })
}

pub fn completion(state: &ServerState, params: CompletionParams) -> Option<CompletionResponse> {
    let position = params.text_document_position;
    let document = state.get_document(&position.text_document.uri)?;
    let lines: Vec<&str> = document.content.lines().collect();

    let items = scl_ide::complete(
        &document.forest,
        &lines,
        from_lsp_position(position.position),
    );
    if items.is_empty() {
        return None;
    }

    let items = items
        .into_iter()
        .map(|item| CompletionItem {
            label: item.label.to_string(),
            kind: Some(match item.kind {
                CompletionKind::Variable => CompletionItemKind::VARIABLE,
                CompletionKind::Structure => CompletionItemKind::STRUCT,
            }),
            detail: item.detail.map(|detail| detail.to_string()),
            ..Default::default()
        })
        .collect();
    Some(CompletionResponse::Array(items))
}

pub fn document_highlight(
    state: &ServerState,
    params: DocumentHighlightParams,
) -> Option<Vec<DocumentHighlight>> {
    let position = params.text_document_position_params;
    let document = state.get_document(&position.text_document.uri)?;
    let lines: Vec<&str> = document.content.lines().collect();

    let ranges = scl_ide::matching_brackets(&lines, from_lsp_position(position.position));
    if ranges.is_empty() {
        return None;
    }
    Some(
        ranges
            .into_iter()
            .map(|range| DocumentHighlight {
                range: to_lsp_range(range),
                kind: Some(DocumentHighlightKind::TEXT),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::{
        PartialResultParams, Position, TextDocumentIdentifier, TextDocumentPositionParams, Url,
        WorkDoneProgressParams,
    };

    const SOURCE: &str = "\
VAR
motor : STRUCT // main drive
  speed : REAL := 0.0;
END_STRUCT;
END_VAR
BEGIN
motor.speed := 1.0;
END
";

    fn uri() -> Url {
        Url::parse("file:///project/main.scl").unwrap()
    }

    fn state_with_source() -> ServerState {
        let state = ServerState::new();
        state.open_document(uri(), 1, SOURCE.to_string());
        state
    }

    fn at(line: u32, character: u32) -> TextDocumentPositionParams {
        TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri() },
            position: Position::new(line, character),
        }
    }

    #[test]
    fn hover_returns_marked_string() {
        let state = state_with_source();
        let result = hover(
            &state,
            HoverParams {
                text_document_position_params: at(6, 8),
                work_done_progress_params: WorkDoneProgressParams::default(),
            },
        )
        .unwrap();
        match result.contents {
            HoverContents::Scalar(MarkedString::String(text)) => {
                assert!(text.contains("Type: REAL"));
            }
            other => panic!("unexpected hover contents: {other:?}"),
        }
    }

    #[test]
    fn completion_maps_kinds() {
        let state = state_with_source();
        let response = completion(
            &state,
            CompletionParams {
                text_document_position: at(6, 6),
                work_done_progress_params: WorkDoneProgressParams::default(),
                partial_result_params: PartialResultParams::default(),
                context: None,
            },
        )
        .unwrap();
        let CompletionResponse::Array(items) = response else {
            panic!("expected array response");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "speed");
        assert_eq!(items[0].kind, Some(CompletionItemKind::VARIABLE));
        assert_eq!(items[0].detail.as_deref(), Some("REAL"));
    }

    #[test]
    fn highlight_marks_both_brackets() {
        let state = ServerState::new();
        state.open_document(uri(), 1, "x := f(a);\n".to_string());
        let highlights = document_highlight(
            &state,
            DocumentHighlightParams {
                text_document_position_params: at(0, 6),
                work_done_progress_params: WorkDoneProgressParams::default(),
                partial_result_params: PartialResultParams::default(),
            },
        )
        .unwrap();
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].kind, Some(DocumentHighlightKind::TEXT));
    }

    #[test]
    fn features_on_unknown_document_return_none() {
        let state = ServerState::new();
        assert!(hover(
            &state,
            HoverParams {
                text_document_position_params: at(0, 0),
                work_done_progress_params: WorkDoneProgressParams::default(),
            },
        )
        .is_none());
    }
}
