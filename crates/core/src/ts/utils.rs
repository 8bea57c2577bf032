//! Common utilities for TypeScript code generation.

use std::collections::HashSet;
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier needs bracket notation (or quoting) for property/key access.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes and double quotes.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape static text placed inside a template literal.
pub fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Always quote a property key, e.g. for header names.
pub fn quote(name: &str) -> String {
    format!("\"{}\"", escape_js_string(name))
}

/// Quote a string if needed for use as a property key.
/// Returns the name quoted with escaped special characters if needed,
/// or the original name if it's a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        quote(name)
    } else {
        name.to_string()
    }
}

/// Format a property access expression (e.g., `params.foo` or `params["foo-bar"]`).
pub fn format_param_access(obj: &str, prop: &str) -> String {
    if needs_bracket_notation(prop) {
        let escaped = escape_js_string(prop);
        format!("{obj}[\"{escaped}\"]")
    } else {
        format!("{obj}.{prop}")
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Render a one-line doc comment, keeping the comment terminator out of the text.
pub fn doc_comment(text: &str) -> String {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("/** {} */", line.replace("*/", "*\\/"))
}
