//! Code completion for SCL dotted paths.
//!
//! The text left of the cursor yields a dotted prefix; everything before
//! the last dot selects the container, the rest filters its members.
//! Without a container the top-level declarations are offered.

use smol_str::SmolStr;

use scl_hir::{DeclNode, Position, SymbolForest};
use scl_syntax::completion_prefix;

/// The kind of completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// A leaf variable.
    Variable,
    /// A nested structure.
    Structure,
}

/// A completion item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The label shown in the completion list.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Additional detail: the declared type.
    pub detail: Option<SmolStr>,
}

impl CompletionItem {
    fn from_node(node: &DeclNode) -> Self {
        let kind = if node.is_struct() {
            CompletionKind::Structure
        } else {
            CompletionKind::Variable
        };
        Self {
            label: node.name.clone(),
            kind,
            detail: Some(node.data_type.clone()),
        }
    }
}

/// Computes completion suggestions at the given position.
#[must_use]
pub fn complete(forest: &SymbolForest, lines: &[&str], position: Position) -> Vec<CompletionItem> {
    let Some(line) = lines.get(position.line as usize) else {
        return Vec::new();
    };
    let prefix: String = line.chars().take(position.character as usize).collect();
    let Some(token) = completion_prefix(&prefix) else {
        return Vec::new();
    };

    let (container, partial) = match token.rsplit_once('.') {
        Some((container, partial)) => (Some(container), partial),
        None => (None, token),
    };

    let candidates = match container {
        Some(container) => {
            let path: Vec<&str> = container.split('.').collect();
            forest.child_nodes(&path)
        }
        None => forest.top_level_nodes(),
    };

    candidates
        .into_iter()
        .filter(|node| node.name.starts_with(partial))
        .map(CompletionItem::from_node)
        .collect()
}
