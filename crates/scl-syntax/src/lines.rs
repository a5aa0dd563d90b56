//! Line classification for SCL declaration sections.
//!
//! Each function recognises one line shape used by the symbol tree builder
//! or the diagnostic rules. All matching is case-insensitive and tolerant
//! of surrounding whitespace; trailing `//` comments are stripped first.
//! A line that matches none of these shapes is simply not a declaration.

/// The declaration block a variable belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `VAR_INPUT`
    Input,
    /// `VAR_OUTPUT`
    Output,
    /// `VAR_IN_OUT`
    InOut,
    /// `VAR_STAT`
    Static,
    /// `VAR_TEMP`
    Temp,
    /// `CONST` / `CONSTANT`
    Constant,
    /// plain `VAR`
    Normal,
}

/// A leaf variable declaration extracted from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarDecl<'a> {
    /// Declared identifier.
    pub name: &'a str,
    /// Declared type name, possibly dotted (`UDT.Sub`).
    pub data_type: &'a str,
    /// Literal text of the `:=` initializer, if present.
    pub default: Option<&'a str>,
}

/// Returns the code portion of a line, before the first `//` marker.
///
/// Comments never span lines, so this is a pure prefix slice.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Returns the trimmed text after the first `//` marker, if non-empty.
#[must_use]
pub fn trailing_comment(line: &str) -> Option<&str> {
    let idx = line.find("//")?;
    let comment = line[idx + 2..].trim();
    if comment.is_empty() {
        None
    } else {
        Some(comment)
    }
}

/// Matches a declaration-block opener (`VAR_INPUT`, `VAR`, `CONST`, ...).
///
/// The marker must be the only code on the line.
#[must_use]
pub fn block_open(line: &str) -> Option<BlockKind> {
    let code = strip_comment(line).trim();
    let upper = code.to_ascii_uppercase();
    match upper.as_str() {
        "VAR_INPUT" => Some(BlockKind::Input),
        "VAR_OUTPUT" => Some(BlockKind::Output),
        "VAR_IN_OUT" => Some(BlockKind::InOut),
        "VAR_STAT" => Some(BlockKind::Static),
        "VAR_TEMP" => Some(BlockKind::Temp),
        "CONST" | "CONSTANT" => Some(BlockKind::Constant),
        "VAR" => Some(BlockKind::Normal),
        _ => None,
    }
}

/// Matches a declaration-block closer (`END_VAR` / `END_CONST`).
#[must_use]
pub fn is_block_close(line: &str) -> bool {
    let upper = strip_comment(line).trim().to_ascii_uppercase();
    upper.starts_with("END_VAR") || upper.starts_with("END_CONST")
}

/// Matches `<identifier> : STRUCT` and returns the structure name.
#[must_use]
pub fn struct_open(line: &str) -> Option<&str> {
    let code = strip_comment(line).trim();
    let (name, rest) = take_ident(code)?;
    let rest = rest.trim_start().strip_prefix(':')?;
    let rest = rest.trim_start();
    let keyword = rest.get(..6)?;
    if !keyword.eq_ignore_ascii_case("STRUCT") {
        return None;
    }
    // Word boundary: reject e.g. `x : STRUCTURED;`.
    match rest[6..].chars().next() {
        Some(c) if is_ident_char(c) => None,
        _ => Some(name),
    }
}

/// Matches a structure closer, `END_STRUCT ;`.
#[must_use]
pub fn is_struct_close(line: &str) -> bool {
    let code = strip_comment(line).trim();
    let Some(keyword) = code.get(..10) else {
        return false;
    };
    if !keyword.eq_ignore_ascii_case("END_STRUCT") {
        return false;
    }
    code[10..].trim_start().starts_with(';')
}

/// Matches `<identifier> : <type> [:= <default>] ;` and extracts the parts.
///
/// The type may be dotted. The default, when present, is the trimmed text
/// between `:=` and the terminating semicolon and must be non-empty.
#[must_use]
pub fn var_decl(line: &str) -> Option<VarDecl<'_>> {
    let code = strip_comment(line).trim();
    let (name, rest) = take_ident(code)?;
    let rest = rest.trim_start().strip_prefix(':')?;
    // `:=` here would be an assignment statement, not a declaration.
    if rest.starts_with('=') {
        return None;
    }
    let (data_type, rest) = take_dotted_ident(rest.trim_start())?;
    let rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix(":=") {
        let semi = after.find(';')?;
        let default = after[..semi].trim();
        if default.is_empty() {
            return None;
        }
        Some(VarDecl {
            name,
            data_type,
            default: Some(default),
        })
    } else if rest.starts_with(';') {
        Some(VarDecl {
            name,
            data_type,
            default: None,
        })
    } else {
        None
    }
}

/// Matches the `BEGIN` marker that opens the executable body.
#[must_use]
pub fn is_begin_marker(line: &str) -> bool {
    strip_comment(line).trim().eq_ignore_ascii_case("BEGIN")
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits a leading identifier run off `s`. Empty runs do not match.
fn take_ident(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some((&s[..end], &s[end..]))
    }
}

/// Like [`take_ident`], but also accepts dots inside the run.
fn take_dotted_ident(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !is_ident_char(c) && c != '.')
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some((&s[..end], &s[end..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    fn classify(line: &str) -> String {
        if let Some(kind) = block_open(line) {
            return format!("block open {kind:?}");
        }
        if is_block_close(line) {
            return "block close".to_string();
        }
        if let Some(name) = struct_open(line) {
            return format!("struct open '{name}'");
        }
        if is_struct_close(line) {
            return "struct close".to_string();
        }
        if let Some(decl) = var_decl(line) {
            let default = decl
                .default
                .map(|value| format!(" := {value}"))
                .unwrap_or_default();
            return format!("decl {} : {}{default}", decl.name, decl.data_type);
        }
        "no match".to_string()
    }

    #[test]
    fn classification_table() {
        let lines = [
            "VAR_TEMP",
            "motor : STRUCT",
            "  speed : REAL := 0.0; // setpoint",
            "END_STRUCT;",
            "timer : Lib.TON;",
            "count : INT",
            "END_VAR",
        ];
        let rendered: String = lines
            .iter()
            .map(|line| format!("{line} => {}\n", classify(line)))
            .collect();
        expect![[r#"
            VAR_TEMP => block open Temp
            motor : STRUCT => struct open 'motor'
              speed : REAL := 0.0; // setpoint => decl speed : REAL := 0.0
            END_STRUCT; => struct close
            timer : Lib.TON; => decl timer : Lib.TON
            count : INT => no match
            END_VAR => block close
        "#]]
        .assert_eq(&rendered);
    }

    #[test]
    fn comment_stripping() {
        assert_eq!(strip_comment("x : INT; // count"), "x : INT; ");
        assert_eq!(strip_comment("no comment"), "no comment");
        assert_eq!(trailing_comment("x : INT; // count"), Some("count"));
        assert_eq!(trailing_comment("x : INT; //"), None);
        assert_eq!(trailing_comment("x : INT;"), None);
    }

    #[test]
    fn block_markers() {
        assert_eq!(block_open("VAR_INPUT"), Some(BlockKind::Input));
        assert_eq!(block_open("  var_output  "), Some(BlockKind::Output));
        assert_eq!(block_open("VAR_IN_OUT"), Some(BlockKind::InOut));
        assert_eq!(block_open("VAR"), Some(BlockKind::Normal));
        assert_eq!(block_open("VAR_TEMP // locals"), Some(BlockKind::Temp));
        assert_eq!(block_open("CONST"), Some(BlockKind::Constant));
        assert_eq!(block_open("VAR x : INT;"), None);
        assert!(is_block_close("END_VAR"));
        assert!(is_block_close("  end_const  "));
        assert!(!is_block_close("END_STRUCT;"));
    }

    #[test]
    fn struct_markers() {
        assert_eq!(struct_open("motor : STRUCT"), Some("motor"));
        assert_eq!(struct_open("  Motor : struct // drive"), Some("Motor"));
        assert_eq!(struct_open("motor : STRUCTURED;"), None);
        assert_eq!(struct_open("motor : INT;"), None);
        assert!(is_struct_close("END_STRUCT;"));
        assert!(is_struct_close("  end_struct ; // done"));
        assert!(!is_struct_close("END_STRUCT"));
    }

    #[test]
    fn var_declarations() {
        let d = var_decl("speed : REAL;").unwrap();
        assert_eq!((d.name, d.data_type, d.default), ("speed", "REAL", None));

        let d = var_decl("  count : INT := 42 ; // total").unwrap();
        assert_eq!(
            (d.name, d.data_type, d.default),
            ("count", "INT", Some("42"))
        );

        let d = var_decl("timer : Lib.TON;").unwrap();
        assert_eq!(d.data_type, "Lib.TON");

        // Missing semicolon is not a declaration here; the rule engine
        // owns malformed-line reporting.
        assert_eq!(var_decl("speed : REAL"), None);
        assert_eq!(var_decl("speed := 5;"), None);
        assert_eq!(var_decl("speed : ;"), None);
    }

    #[test]
    fn begin_marker() {
        assert!(is_begin_marker("BEGIN"));
        assert!(is_begin_marker("  begin // body"));
        assert!(!is_begin_marker("BEGIN_X"));
        assert!(!is_begin_marker("x := BEGIN;"));
    }
}
