//! Diagnostics publishing.

use tower_lsp::lsp_types::Url;
use tower_lsp::Client;
use tracing::debug;

use crate::state::{Document, ServerState};

use super::lsp_utils::to_lsp_diagnostic;

/// Runs the rule engine over a document and pushes the results to the client.
pub async fn publish_diagnostics(client: &Client, state: &ServerState, document: &Document) {
    let options = state.check_options();
    let diagnostics =
        scl_ide::collect_diagnostics(&document.content, &document.forest, &options);
    debug!(
        "Publishing {} diagnostics for {}",
        diagnostics.len(),
        document.uri
    );

    let lsp_diagnostics = diagnostics
        .iter()
        .map(|d| to_lsp_diagnostic(&document.uri, d))
        .collect();
    client
        .publish_diagnostics(document.uri.clone(), lsp_diagnostics, Some(document.version))
        .await;
}

/// Clears previously published diagnostics, used when a document closes.
pub async fn clear_diagnostics(client: &Client, uri: Url) {
    client.publish_diagnostics(uri, Vec::new(), None).await;
}
