//! Identifier sanitization for Mermaid output
//!
//! Every function here is pure and total: any input, including blank or
//! garbage text, comes back as a token that is safe to embed in the target
//! syntax. Blank input (or input that strips down to nothing) yields a
//! documented sentinel instead of an empty string.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
    static ref RE_NON_WORD_UPPER: Regex = Regex::new(r"[^A-Z0-9_]").unwrap();
    static ref RE_NON_METHOD: Regex = Regex::new(r"[^A-Za-z0-9_()]").unwrap();
    static ref RE_LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
}

/// Class identifier: `Blog::Post` becomes `Blog__Post`, every other
/// non-word character becomes an underscore
pub fn class_name(name: &str) -> String {
    if name.trim().is_empty() {
        return "UnknownClass".to_string();
    }
    let collapsed = name.trim().replace("::", "__");
    RE_NON_WORD.replace_all(&collapsed, "_").into_owned()
}

/// Flowchart node identifier: word characters only
pub fn node_id(name: &str) -> String {
    let stripped = RE_NON_WORD.replace_all(name.trim(), "");
    if stripped.is_empty() {
        "unknown_node".to_string()
    } else {
        stripped.into_owned()
    }
}

/// Flowchart node name, same rules as [`node_id`]
pub fn node_name(name: &str) -> String {
    node_id(name)
}

/// ER entity key. Uppercased unless `preserve_case` is set
pub fn table_name(name: &str, preserve_case: bool) -> String {
    let stripped = if preserve_case {
        RE_NON_WORD.replace_all(name.trim(), "").into_owned()
    } else {
        let upper = name.trim().to_uppercase();
        RE_NON_WORD_UPPER.replace_all(&upper, "").into_owned()
    };
    if stripped.is_empty() {
        "UNKNOWN_TABLE".to_string()
    } else {
        stripped
    }
}

/// Method token for class diagrams; a `()` suffix is appended when the
/// input carries no parenthesis of its own
pub fn method_name(name: &str) -> String {
    let stripped = RE_NON_METHOD.replace_all(name.trim(), "").into_owned();
    if stripped.is_empty() {
        return "unknown_method()".to_string();
    }
    if stripped.contains('(') {
        stripped
    } else {
        format!("{}()", stripped)
    }
}

/// Edge/label text destined for a double-quoted position: backslashes are
/// escaped before quotes, line breaks collapse to spaces
pub fn label(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    RE_LINE_BREAKS.replace_all(&escaped, " ").trim().to_string()
}

/// Attribute type token; blank input falls back to "string"
pub fn attribute_type(attr_type: &str) -> String {
    let stripped = RE_NON_WORD.replace_all(attr_type.trim(), "");
    if stripped.is_empty() {
        "string".to_string()
    } else {
        stripped.into_owned()
    }
}

/// Human display name: passthrough that preserves namespace separators
pub fn display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "UnknownClass".to_string()
    } else {
        trimmed.to_string()
    }
}
