//! Token scanning over single lines.
//!
//! The diagnostic rules and the editor features never see a token stream;
//! they pull dotted words out of individual lines with the helpers here.
//! All columns are character offsets, matching the line/character
//! addressing of editor positions.

/// A dotted word extracted from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, e.g. `motor.speed` or `T#5s`.
    pub text: &'a str,
    /// Character column of the first character.
    pub start: usize,
    /// True when the token names a formal call argument: it is followed by
    /// `:=` while inside parentheses.
    pub named_arg: bool,
}

/// The dotted token under a cursor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAt<'a> {
    /// The full dotted token.
    pub text: &'a str,
    /// Character column of the first character.
    pub start: usize,
    /// Index of the dot-segment the cursor is in.
    pub segment: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_char(c: char) -> bool {
    // `#` keeps time and based literals (T#5s, 16#FF) in one piece.
    is_ident_char(c) || c == '.' || c == '#'
}

/// Extracts all dotted words from a line, tracking parenthesis depth.
///
/// `paren_depth` is the balance carried in from preceding lines of a
/// multi-line call; the final balance is returned alongside the tokens so
/// the caller can thread it through the executable body.
#[must_use]
pub fn word_tokens(line: &str, paren_depth: i32) -> (Vec<Token<'_>>, i32) {
    let mut tokens = Vec::new();
    let mut depth = paren_depth;
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        let (start_byte, c) = chars[i];
        if is_word_char(c) {
            let start_col = i;
            while i < chars.len() && is_word_char(chars[i].1) {
                i += 1;
            }
            let end_byte = chars.get(i).map_or(line.len(), |&(b, _)| b);
            let mut peek = i;
            while peek < chars.len() && chars[peek].1.is_whitespace() {
                peek += 1;
            }
            let named_arg = depth > 0
                && peek + 1 < chars.len()
                && chars[peek].1 == ':'
                && chars[peek + 1].1 == '=';
            tokens.push(Token {
                text: &line[start_byte..end_byte],
                start: start_col,
                named_arg,
            });
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    (tokens, depth)
}

/// Net parenthesis balance of a line: opens minus closes.
#[must_use]
pub fn paren_balance(line: &str) -> i32 {
    let mut balance = 0;
    for c in line.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }
    balance
}

/// Returns true for plain (`42`, `3.14`) and based (`16#FF`, `2#1010_0110`)
/// numeric literals.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    if let Some((base, digits)) = text.split_once('#') {
        return !base.is_empty()
            && base.bytes().all(|b| b.is_ascii_digit())
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    }
    let mut parts = text.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// Returns true for time literals (`T#5s`, `time#10ms`).
#[must_use]
pub fn is_time_literal(text: &str) -> bool {
    let upper = text.to_ascii_uppercase();
    upper.starts_with("T#") || upper.starts_with("TIME#")
}

/// Finds the dotted token under a cursor column and the dot-segment the
/// cursor is in. Token characters are alphanumerics, `_` and `.`.
#[must_use]
pub fn token_at(line: &str, character: usize) -> Option<TokenAt<'_>> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    if character > chars.len() {
        return None;
    }
    let is_tok = |idx: usize| {
        let c = chars[idx].1;
        c.is_alphanumeric() || c == '.' || c == '_'
    };

    let mut start = character;
    let mut end = character;
    while start > 0 && is_tok(start - 1) {
        start -= 1;
    }
    while end < chars.len() && is_tok(end) {
        end += 1;
    }
    if start == end {
        return None;
    }

    let start_byte = chars[start].0;
    let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
    let text = &line[start_byte..end_byte];

    let relative = character - start;
    let mut segment = 0;
    let mut offset = 0;
    for (idx, seg) in text.split('.').enumerate() {
        let len = seg.chars().count();
        if offset <= relative && relative <= offset + len {
            segment = idx;
            break;
        }
        offset += len + 1; // +1 for the dot
    }

    Some(TokenAt {
        text,
        start,
        segment,
    })
}

/// Returns the trailing dotted-word run of a line prefix, used to derive
/// the completion context from the text left of the cursor.
#[must_use]
pub fn completion_prefix(line_prefix: &str) -> Option<&str> {
    let start = line_prefix
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_alphanumeric() || c == '_' || c == '.')
        .last()
        .map(|(idx, _)| idx)?;
    Some(&line_prefix[start..])
}
