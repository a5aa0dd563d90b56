//! Server state management.
//!
//! This module manages the state of the language server: the set of
//! open documents and the symbol forest built for each of them.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tower_lsp::lsp_types::Url;

use scl_hir::{CheckOptions, SymbolForest};

use crate::config::SclConfig;

/// A document managed by the server.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document URI.
    pub uri: Url,
    /// The document version.
    pub version: i32,
    /// The document content.
    pub content: String,
    /// The symbol forest built from the current content.
    pub forest: SymbolForest,
}

impl Document {
    /// Creates a document, building its forest from the content.
    pub fn new(uri: Url, version: i32, content: String) -> Self {
        let forest = SymbolForest::parse(&content);
        Self {
            uri,
            version,
            content,
            forest,
        }
    }
}

/// The server's shared state.
pub struct ServerState {
    documents: RwLock<FxHashMap<Url, Document>>,
    config: RwLock<SclConfig>,
}

impl ServerState {
    /// Creates empty server state with default configuration.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(FxHashMap::default()),
            config: RwLock::new(SclConfig::default()),
        }
    }

    /// Replaces the server configuration.
    pub fn set_config(&self, config: SclConfig) {
        *self.config.write() = config;
    }

    /// Returns the rule options derived from the current configuration.
    pub fn check_options(&self) -> CheckOptions {
        self.config.read().check_options()
    }

    /// Opens a document, building its forest before it is served from.
    pub fn open_document(&self, uri: Url, version: i32, content: String) {
        let document = Document::new(uri.clone(), version, content);
        self.documents.write().insert(uri, document);
    }

    /// Replaces a document's content and rebuilds its forest.
    pub fn update_document(&self, uri: &Url, version: i32, content: String) {
        let mut documents = self.documents.write();
        match documents.get_mut(uri) {
            Some(document) => {
                document.version = version;
                document.content = content;
                document.forest = SymbolForest::parse(&document.content);
            }
            None => {
                documents.insert(uri.clone(), Document::new(uri.clone(), version, content));
            }
        }
    }

    /// Removes a closed document.
    pub fn close_document(&self, uri: &Url) {
        self.documents.write().remove(uri);
    }

    /// Returns a snapshot of a document.
    pub fn get_document(&self, uri: &Url) -> Option<Document> {
        self.documents.read().get(uri).cloned()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///project/main.scl").unwrap()
    }

    #[test]
    fn open_builds_the_forest() {
        let state = ServerState::new();
        state.open_document(uri(), 1, "VAR\nspeed : REAL;\nEND_VAR\n".to_string());
        let doc = state.get_document(&uri()).unwrap();
        assert!(doc.forest.resolve(&["speed"]).is_some());
    }

    #[test]
    fn update_rebuilds_the_forest() {
        let state = ServerState::new();
        state.open_document(uri(), 1, "VAR\nspeed : REAL;\nEND_VAR\n".to_string());
        state.update_document(&uri(), 2, "VAR\ncount : INT;\nEND_VAR\n".to_string());
        let doc = state.get_document(&uri()).unwrap();
        assert_eq!(doc.version, 2);
        assert!(doc.forest.resolve(&["speed"]).is_none());
        assert!(doc.forest.resolve(&["count"]).is_some());
    }

    #[test]
    fn update_of_unknown_document_opens_it() {
        let state = ServerState::new();
        state.update_document(&uri(), 1, "VAR\nx : INT;\nEND_VAR\n".to_string());
        assert!(state.get_document(&uri()).is_some());
    }

    #[test]
    fn close_drops_the_document() {
        let state = ServerState::new();
        state.open_document(uri(), 1, String::new());
        state.close_document(&uri());
        assert!(state.get_document(&uri()).is_none());
    }
}
