//! The static keyword table for Siemens SCL.
//!
//! Reserved words and elementary data type names, used to tell declared
//! identifiers apart from language vocabulary. The table is immutable after
//! initialization and shared by every document session.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// All reserved words, including elementary type names.
static KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    let mut set: FxHashSet<&'static str> = FxHashSet::default();
    set.extend(CONTROL_FLOW);
    set.extend(LOGIC);
    set.extend(ELEMENTARY_TYPES);
    set.extend(DECLARATION);
    set.extend(POU);
    set.extend(MISC);
    set
});

static ELEMENTARY: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ELEMENTARY_TYPES.iter().copied().collect());

const CONTROL_FLOW: &[&str] = &[
    "IF",
    "THEN",
    "ELSE",
    "ELSIF",
    "END_IF",
    "CASE",
    "OF",
    "END_CASE",
    "FOR",
    "TO",
    "BY",
    "DO",
    "END_FOR",
    "WHILE",
    "END_WHILE",
    "REPEAT",
    "UNTIL",
    "END_REPEAT",
    "EXIT",
    "RETURN",
    "CONTINUE",
    "BEGIN",
    "END",
];

const LOGIC: &[&str] = &[
    "TRUE",
    "FALSE",
    "NULL",
    "UNDEFINED",
    "AND",
    "OR",
    "NOT",
    "XOR",
];

const ELEMENTARY_TYPES: &[&str] = &[
    "BOOL",
    "BYTE",
    "WORD",
    "DWORD",
    "LWORD",
    "SINT",
    "USINT",
    "INT",
    "UINT",
    "DINT",
    "UDINT",
    "LINT",
    "ULINT",
    "REAL",
    "LREAL",
    "CHAR",
    "WCHAR",
    "STRING",
    "WSTRING",
    "TIME",
    "DATE",
    "TIME_OF_DAY",
    "TOD",
    "DATE_AND_TIME",
    "DT",
];

const DECLARATION: &[&str] = &[
    "VAR",
    "VAR_INPUT",
    "VAR_OUTPUT",
    "VAR_IN_OUT",
    "VAR_TEMP",
    "VAR_GLOBAL",
    "VAR_EXTERNAL",
    "VAR_ACCESS",
    "VAR_CONFIG",
    "VAR_RETAIN",
    "VAR_STAT",
    "VAR_INST",
    "END_VAR",
    "CONST",
    "CONSTANT",
    "END_CONST",
];

const POU: &[&str] = &[
    "FUNCTION",
    "END_FUNCTION",
    "FUNCTION_BLOCK",
    "END_FUNCTION_BLOCK",
    "PROGRAM",
    "END_PROGRAM",
    "STRUCT",
    "END_STRUCT",
    "TYPE",
    "END_TYPE",
    "ARRAY",
];

const MISC: &[&str] = &["WITH", "AT", "RETURNS", "REFERENCE", "EN", "ENO"];

/// Returns true if `word` is a reserved keyword or elementary type name.
///
/// SCL is case-insensitive, so the check upper-cases the candidate first.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}

/// Returns true if `name` is an elementary data type (BOOL, INT, REAL, ...).
///
/// Declared variables whose type is neither elementary nor `STRUCT` are
/// treated as function-block instances by the diagnostic rules.
#[must_use]
pub fn is_elementary_type(name: &str) -> bool {
    ELEMENTARY.contains(name.to_ascii_uppercase().as_str())
}
