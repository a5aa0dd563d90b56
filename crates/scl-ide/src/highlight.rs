//! Bracket-pair highlighting.
//!
//! With the cursor on a bracket, the matching bracket is located by a
//! depth-counting scan that may cross line boundaries.

use scl_hir::{LineRange, Position};

const OPENERS: [char; 3] = ['(', '[', '{'];
const CLOSERS: [char; 3] = [')', ']', '}'];

fn partner(bracket: char) -> char {
    match bracket {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        _ => unreachable!("not a bracket"),
    }
}

fn scan_forward(lines: &[Vec<char>], from: Position, open: char, close: char) -> Option<Position> {
    let mut depth = 1i32;
    for (l, line) in lines.iter().enumerate().skip(from.line as usize) {
        let first = if l == from.line as usize {
            from.character as usize + 1
        } else {
            0
        };
        for (c, &ch) in line.iter().enumerate().skip(first) {
            if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(l as u32, c as u32));
                }
            }
        }
    }
    None
}

fn scan_backward(lines: &[Vec<char>], from: Position, open: char, close: char) -> Option<Position> {
    let mut depth = 1i32;
    for l in (0..=from.line as usize).rev() {
        let line = &lines[l];
        let last = if l == from.line as usize {
            from.character as usize
        } else {
            line.len()
        };
        for c in (0..last).rev() {
            let ch = line[c];
            if ch == close {
                depth += 1;
            } else if ch == open {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(l as u32, c as u32));
                }
            }
        }
    }
    None
}

fn single_char(position: Position) -> LineRange {
    LineRange::new(
        position,
        Position::new(position.line, position.character + 1),
    )
}

/// Returns the ranges of the bracket under the cursor and its partner,
/// or an empty vector when the cursor is not on a bracket or the
/// partner is missing.
#[must_use]
pub fn matching_brackets(lines: &[&str], position: Position) -> Vec<LineRange> {
    let chars: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let Some(&bracket) = chars
        .get(position.line as usize)
        .and_then(|line| line.get(position.character as usize))
    else {
        return Vec::new();
    };

    let matched = if OPENERS.contains(&bracket) {
        scan_forward(&chars, position, bracket, partner(bracket))
    } else if CLOSERS.contains(&bracket) {
        scan_backward(&chars, position, partner(bracket), bracket)
    } else {
        return Vec::new();
    };

    match matched {
        Some(other) => vec![single_char(position), single_char(other)],
        None => Vec::new(),
    }
}
