//! Symbol name length and truncated-prefix collision checking.
//!
//! Walks declaration lines independent of block state, keyed only by
//! structure nesting. Names longer than the limit get an informational
//! notice; two names in the same scope whose first `max_name_len`
//! characters are identical collide, because the target system truncates
//! symbols to that length. The first declaration is the permanent
//! baseline; every later duplicate is reported against it.

use rustc_hash::FxHashMap;

use scl_syntax::lines;

use crate::checks::{char_len, CheckOptions};
use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode, LineRange};

struct Baseline {
    line: usize,
    column: u32,
    name: String,
}

/// Rule (d): report over-long names and truncated-name collisions.
pub fn check(lines_in: &[&str], options: &CheckOptions, builder: &mut DiagnosticBuilder) {
    let max = options.max_name_len;
    let mut scope_stack: Vec<&str> = Vec::new();
    let mut seen: FxHashMap<(String, String), Baseline> = FxHashMap::default();

    for (line_no, raw) in lines_in.iter().enumerate() {
        if lines::is_struct_close(raw) {
            scope_stack.pop();
            continue;
        }
        if let Some(name) = lines::struct_open(raw) {
            record(builder, &mut seen, &scope_stack, name, line_no, raw, max);
            scope_stack.push(name);
            continue;
        }
        if let Some(decl) = lines::var_decl(raw) {
            record(builder, &mut seen, &scope_stack, decl.name, line_no, raw, max);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn record(
    builder: &mut DiagnosticBuilder,
    seen: &mut FxHashMap<(String, String), Baseline>,
    scope_stack: &[&str],
    name: &str,
    line_no: usize,
    raw: &str,
    max: usize,
) {
    // The declared name is the first token on the line.
    let column = raw.chars().take_while(|c| c.is_whitespace()).count() as u32;
    let name_len = name.chars().count();
    let range = LineRange::on_line(line_no as u32, column, column + name_len as u32);

    if name_len > max {
        builder.report(
            DiagnosticCode::NameTooLong,
            range,
            format!("name '{name}' exceeds {max} characters"),
        );
    }

    let scope = scope_stack.join(".");
    let prefix: String = name.chars().take(max).collect();
    match seen.get(&(scope.clone(), prefix.clone())) {
        Some(baseline) => {
            let related_range = LineRange::on_line(
                baseline.line as u32,
                baseline.column,
                baseline.column + char_len(&baseline.name),
            );
            builder.add(
                Diagnostic::new(
                    DiagnosticCode::NameCollision,
                    range,
                    format!(
                        "name '{name}' collides with '{}' (line {}): the first {max} characters are identical",
                        baseline.name,
                        baseline.line + 1,
                    ),
                )
                .with_related(related_range, "first declared here"),
            );
        }
        None => {
            seen.insert(
                (scope, prefix),
                Baseline {
                    line: line_no,
                    column,
                    name: name.to_string(),
                },
            );
        }
    }
}
