//! The symbol tree builder: one left-to-right pass over physical lines.
//!
//! The builder only reads declaration sections. It tracks which
//! declaration block is open and a stack of currently open structures;
//! executable statements and lines it cannot classify are skipped.
//! Structural problems (unmatched closers, declarations outside any block)
//! degrade to a partial forest, never to an error.

use tracing::debug;

use scl_syntax::lines;

use crate::symbols::{DeclKind, DeclNode, NodeId, SymbolForest, STRUCT_TYPE};

enum Insert {
    Fresh(NodeId),
    /// A sibling with this name already exists; the first declaration wins.
    Duplicate(NodeId),
}

impl SymbolForest {
    /// Builds a forest from the full source text.
    ///
    /// Deterministic: parsing identical text twice yields equal forests.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut forest = Self::new();
        let mut block = None;
        let mut open_structs: Vec<NodeId> = Vec::new();

        for line in text.lines() {
            if let Some(kind) = lines::block_open(line) {
                block = Some(kind);
                continue;
            }
            if lines::is_block_close(line) {
                block = None;
                continue;
            }
            if lines::is_struct_close(line) {
                // Tolerate unmatched closers.
                open_structs.pop();
                continue;
            }
            let Some(block_kind) = block else { continue };
            let parent = open_structs.last().copied();

            if let Some(name) = lines::struct_open(line) {
                let kind = DeclKind::from_block(block_kind);
                match forest.insert(name, kind, STRUCT_TYPE, None, lines::trailing_comment(line), parent) {
                    Insert::Fresh(id) => open_structs.push(id),
                    // Re-open the original structure so its members still
                    // land somewhere sensible.
                    Insert::Duplicate(id) => {
                        if forest.node(id).is_some_and(DeclNode::is_struct) {
                            open_structs.push(id);
                        }
                    }
                }
                continue;
            }

            if let Some(decl) = lines::var_decl(line) {
                forest.insert(
                    decl.name,
                    DeclKind::from_block(block_kind),
                    decl.data_type,
                    decl.default,
                    lines::trailing_comment(line),
                    parent,
                );
            }
        }

        debug!(symbols = forest.len(), "rebuilt symbol forest");
        forest
    }

    fn insert(
        &mut self,
        name: &str,
        kind: DeclKind,
        data_type: &str,
        default: Option<&str>,
        comment: Option<&str>,
        parent: Option<NodeId>,
    ) -> Insert {
        let existing = match parent {
            Some(p) => self
                .node(p)
                .and_then(|node| node.children.get(name).copied()),
            None => self.roots.get(name).copied(),
        };
        if let Some(id) = existing {
            return Insert::Duplicate(id);
        }

        let id = NodeId(self.nodes.len() as u32);
        let path = match parent {
            Some(p) => format!("{}.{name}", self.full_path(p)),
            None => name.to_string(),
        };
        self.nodes.push(DeclNode {
            name: name.into(),
            kind,
            data_type: data_type.into(),
            default: default.map(str::to_owned),
            comment: comment.map(str::to_owned),
            children: indexmap::IndexMap::new(),
            parent,
        });
        match parent {
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p.index()) {
                    node.children.insert(name.into(), id);
                }
            }
            None => {
                self.roots.insert(name.into(), id);
            }
        }
        self.by_path.entry(path).or_insert(id);
        Insert::Fresh(id)
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn builds_nested_structures() {
        let source = "\
FUNCTION_BLOCK FB_Drive
VAR_INPUT
    enable : BOOL := FALSE; // start request
    motor : STRUCT // main drive
        speed : REAL := 0.0; // setpoint
        limits : STRUCT
            max : REAL;
        END_STRUCT;
    END_STRUCT;
END_VAR
VAR_TEMP
    scratch : INT;
END_VAR
BEGIN
    motor.speed := 1.0;
END_FUNCTION_BLOCK
";
        let forest = SymbolForest::parse(source);
        expect![[r#"
            enable: BOOL (input) := FALSE // start request
            motor: STRUCT (input) // main drive
              speed: REAL (input) := 0.0 // setpoint
              limits: STRUCT (input)
                max: REAL (input)
            scratch: INT (temporary)
        "#]]
        .assert_eq(&forest.dump());
    }

    #[test]
    fn declarations_outside_blocks_are_ignored() {
        let forest = SymbolForest::parse("x : INT;\ny : BOOL;\n");
        assert!(forest.is_empty());
    }

    #[test]
    fn unmatched_struct_close_is_tolerated() {
        let forest = SymbolForest::parse("END_STRUCT;\n");
        assert!(forest.is_empty());
    }

    #[test]
    fn block_close_ends_collection() {
        let forest = SymbolForest::parse("VAR\nx : INT;\nEND_VAR\ny : INT;\n");
        assert_eq!(forest.top_level_names(), vec!["x"]);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let forest = SymbolForest::parse("VAR\nx : INT\n: BOOL;\nok : BOOL;\nEND_VAR\n");
        assert_eq!(forest.top_level_names(), vec!["ok"]);
    }

    #[test]
    fn first_declaration_wins_on_collision() {
        let source = "VAR\nx : INT := 1;\nx : BOOL;\nEND_VAR\n";
        let forest = SymbolForest::parse(source);
        let node = forest.resolve(&["x"]).unwrap();
        assert_eq!(node.data_type, "INT");
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn duplicate_struct_reopens_original() {
        let source = "\
VAR
    cfg : STRUCT
        a : INT;
    END_STRUCT;
    cfg : STRUCT
        b : INT;
    END_STRUCT;
END_VAR
";
        let forest = SymbolForest::parse(source);
        assert_eq!(forest.children_of(&["cfg"]), vec!["a", "b"]);
    }

    #[test]
    fn reparse_is_deterministic() {
        let source = "VAR_INPUT\nm : STRUCT // m\n  s : REAL := 2.5;\nEND_STRUCT;\nEND_VAR\n";
        assert_eq!(SymbolForest::parse(source), SymbolForest::parse(source));
    }
}
