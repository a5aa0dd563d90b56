//! Hover information for SCL symbols.
//!
//! The cursor position is mapped to a dotted token and the dot-segment
//! under the cursor; the path up to and including that segment is
//! resolved against the forest. Hovering `speed` in `motor.speed` shows
//! the leaf, hovering `motor` shows the structure.

use scl_hir::{LineRange, Position, SymbolForest};
use scl_syntax::token_at;

/// Result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverResult {
    /// Plain-text hover contents.
    pub contents: String,
    /// The span of the hovered path segment.
    pub range: LineRange,
}

/// Computes hover information at the given position.
#[must_use]
pub fn hover(forest: &SymbolForest, lines: &[&str], position: Position) -> Option<HoverResult> {
    let line = lines.get(position.line as usize)?;
    let token = token_at(line, position.character as usize)?;

    let segments: Vec<&str> = token.text.split('.').collect();
    let path = segments.get(..=token.segment)?;
    let node = forest.resolve(path)?;
    let chain = forest.comment_chain(path).join(", ");

    let mut contents = format!("Type: {}", node.data_type);
    if node.is_struct() {
        if !chain.is_empty() {
            contents.push_str("\nComment:\n");
            contents.push_str(&chain);
        }
    } else {
        if let Some(default) = &node.default {
            contents.push_str("\nDefault: ");
            contents.push_str(default);
        }
        if !chain.is_empty() {
            contents.push_str("\nComment: ");
            contents.push_str(&chain);
        }
    }

    // Highlight only the path prefix that was resolved.
    let prefix_chars: usize = path
        .iter()
        .map(|segment| segment.chars().count())
        .sum::<usize>()
        + path.len()
        - 1;
    #[allow(clippy::cast_possible_truncation)]
    let range = LineRange::on_line(
        position.line,
        token.start as u32,
        (token.start + prefix_chars) as u32,
    );

    Some(HoverResult { contents, range })
}
