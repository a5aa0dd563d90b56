//! Document synchronization handlers.
//!
//! The server negotiates full-text sync, so every change event carries
//! the complete document content and the forest is rebuilt before the
//! document is served from again.

use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams,
};
use tower_lsp::Client;
use tracing::{info, warn};

use crate::state::ServerState;

use super::diagnostics::{clear_diagnostics, publish_diagnostics};

pub async fn did_open(client: &Client, state: &ServerState, params: DidOpenTextDocumentParams) {
    let uri = params.text_document.uri;
    info!("Document opened: {}", uri);

    state.open_document(uri.clone(), params.text_document.version, params.text_document.text);
    if let Some(document) = state.get_document(&uri) {
        publish_diagnostics(client, state, &document).await;
    }
}

pub async fn did_change(client: &Client, state: &ServerState, params: DidChangeTextDocumentParams) {
    let uri = params.text_document.uri;

    // Full sync: the last change event holds the whole document.
    let Some(change) = params.content_changes.into_iter().last() else {
        return;
    };
    if change.range.is_some() {
        warn!("Ignoring ranged change for {}: full sync was negotiated", uri);
        return;
    }

    state.update_document(&uri, params.text_document.version, change.text);
    if let Some(document) = state.get_document(&uri) {
        publish_diagnostics(client, state, &document).await;
    }
}

pub async fn did_save(client: &Client, state: &ServerState, params: DidSaveTextDocumentParams) {
    let uri = params.text_document.uri;
    info!("Document saved: {}", uri);

    if let Some(text) = params.text {
        if let Some(document) = state.get_document(&uri) {
            state.update_document(&uri, document.version, text);
        }
    }
    if let Some(document) = state.get_document(&uri) {
        publish_diagnostics(client, state, &document).await;
    }
}

pub async fn did_close(client: &Client, state: &ServerState, params: DidCloseTextDocumentParams) {
    let uri = params.text_document.uri;
    info!("Document closed: {}", uri);

    state.close_document(&uri);
    clear_diagnostics(client, uri).await;
}
