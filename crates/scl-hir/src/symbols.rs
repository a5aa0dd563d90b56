//! The symbol forest: declaration nodes and path-based lookup.
//!
//! Nodes live in an arena (`Vec<DeclNode>`) and refer to each other by
//! [`NodeId`]; the tree owns its children through per-node ordered child
//! tables, while `parent` is a non-owning back-reference used for scope
//! bookkeeping during the build. Every node is additionally indexed by its
//! full dotted path.

use std::fmt::Write as _;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use scl_syntax::lines::BlockKind;

/// The sentinel data type of structure nodes.
pub const STRUCT_TYPE: &str = "STRUCT";

/// Index of a node in the forest arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The variable class of a declaration, derived from its enclosing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// Declared in `VAR_INPUT`.
    Input,
    /// Declared in `VAR_OUTPUT`.
    Output,
    /// Declared in `VAR_IN_OUT`.
    InOut,
    /// Declared in `VAR_STAT`.
    Static,
    /// Declared in `VAR_TEMP`.
    Temp,
    /// Declared in `CONST` / `CONSTANT`.
    Constant,
    /// Declared in a plain `VAR` block.
    Normal,
}

impl DeclKind {
    /// Maps a declaration-block marker to the variable class.
    #[must_use]
    pub fn from_block(block: BlockKind) -> Self {
        match block {
            BlockKind::Input => Self::Input,
            BlockKind::Output => Self::Output,
            BlockKind::InOut => Self::InOut,
            BlockKind::Static => Self::Static,
            BlockKind::Temp => Self::Temp,
            BlockKind::Constant => Self::Constant,
            BlockKind::Normal => Self::Normal,
        }
    }

    /// Lower-case display name (`input`, `temporary`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::InOut => "inout",
            Self::Static => "static",
            Self::Temp => "temporary",
            Self::Constant => "constant",
            Self::Normal => "normal",
        }
    }
}

/// One declared variable or nested structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclNode {
    /// Declared identifier, unique among siblings.
    pub name: SmolStr,
    /// Variable class from the enclosing block.
    pub kind: DeclKind,
    /// Declared type name, or [`STRUCT_TYPE`] for aggregates.
    pub data_type: SmolStr,
    /// Literal text of the initializer (leaf variables only).
    pub default: Option<String>,
    /// Trailing documentation comment from the declaration line.
    pub comment: Option<String>,
    /// Ordered name-to-child table; non-empty only for structures.
    pub children: IndexMap<SmolStr, NodeId>,
    /// Enclosing structure, if any.
    pub parent: Option<NodeId>,
}

impl DeclNode {
    /// Returns true if this node is a nested structure.
    #[must_use]
    pub fn is_struct(&self) -> bool {
        self.data_type == STRUCT_TYPE
    }
}

/// The set of top-level declaration nodes plus a flat path index.
///
/// Built by [`SymbolForest::parse`] and rebuilt from scratch on every
/// document change. Owned by one document session; never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolForest {
    pub(crate) nodes: Vec<DeclNode>,
    pub(crate) roots: IndexMap<SmolStr, NodeId>,
    pub(crate) by_path: FxHashMap<String, NodeId>,
}

impl SymbolForest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&DeclNode> {
        self.nodes.get(id.index())
    }

    /// Resolves a dotted path, segment by segment, through the child
    /// tables. A missing segment or a non-terminal leaf resolves to `None`.
    #[must_use]
    pub fn resolve(&self, path: &[&str]) -> Option<&DeclNode> {
        self.resolve_id(path).and_then(|id| self.node(id))
    }

    /// Resolves a dotted path string (`"motor.speed"`) via the flat index.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> Option<&DeclNode> {
        self.by_path.get(path).and_then(|id| self.node(*id))
    }

    pub(crate) fn resolve_id(&self, path: &[&str]) -> Option<NodeId> {
        let (first, rest) = path.split_first()?;
        let mut id = *self.roots.get(*first)?;
        for segment in rest {
            id = *self.nodes.get(id.index())?.children.get(*segment)?;
        }
        Some(id)
    }

    /// The ordered child names of the node at `path`; empty if the path
    /// does not resolve or names a leaf.
    #[must_use]
    pub fn children_of(&self, path: &[&str]) -> Vec<SmolStr> {
        self.child_nodes(path)
            .into_iter()
            .map(|node| node.name.clone())
            .collect()
    }

    /// The ordered child nodes of the node at `path`.
    #[must_use]
    pub fn child_nodes(&self, path: &[&str]) -> Vec<&DeclNode> {
        match self.resolve(path) {
            Some(node) => node
                .children
                .values()
                .filter_map(|id| self.node(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The ordered names of all top-level declarations.
    #[must_use]
    pub fn top_level_names(&self) -> Vec<SmolStr> {
        self.roots.keys().cloned().collect()
    }

    /// The top-level declaration nodes, in declaration order.
    #[must_use]
    pub fn top_level_nodes(&self) -> Vec<&DeclNode> {
        self.roots
            .values()
            .filter_map(|id| self.node(*id))
            .collect()
    }

    /// Collects the non-empty documentation comments along each prefix of
    /// `path`, outer to inner. Collection stops at the first segment that
    /// does not resolve.
    #[must_use]
    pub fn comment_chain(&self, path: &[&str]) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current: Option<NodeId> = None;
        for segment in path {
            let next = match current {
                None => self.roots.get(*segment).copied(),
                Some(id) => self
                    .node(id)
                    .and_then(|node| node.children.get(*segment).copied()),
            };
            let Some(id) = next else { break };
            if let Some(comment) = self.node(id).and_then(|n| n.comment.as_deref()) {
                if !comment.is_empty() {
                    chain.push(comment);
                }
            }
            current = Some(id);
        }
        chain
    }

    /// The full dotted path of a node, from its top-level ancestor down.
    #[must_use]
    pub fn full_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(node) = self.node(id) else { break };
            segments.push(node.name.as_str());
            current = node.parent;
        }
        segments.reverse();
        segments.join(".")
    }

    /// Renders the forest as an indented tree, for tests and debugging.
    #[must_use]
    pub fn dump(&self) -> String {
        fn render(forest: &SymbolForest, id: NodeId, depth: usize, out: &mut String) {
            let Some(node) = forest.node(id) else { return };
            for _ in 0..depth {
                out.push_str("  ");
            }
            let _ = write!(out, "{}: {} ({})", node.name, node.data_type, node.kind.as_str());
            if let Some(default) = &node.default {
                let _ = write!(out, " := {default}");
            }
            if let Some(comment) = &node.comment {
                let _ = write!(out, " // {comment}");
            }
            out.push('\n');
            for child in node.children.values() {
                render(forest, *child, depth + 1, out);
            }
        }

        let mut out = String::new();
        for id in self.roots.values() {
            render(self, *id, 0, &mut out);
        }
        out
    }
}
