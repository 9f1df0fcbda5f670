use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    // String literals are matched first so comment markers inside them survive.
    static ref COMMENT_RE: Regex =
        Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|//[^\n]*|/\*.*?\*/"#).unwrap();
}

/// Removes `//` line comments and `/* */` block comments outside string literals.
pub fn strip_comments(text: &str) -> String {
    COMMENT_RE
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            if matched.starts_with('"') {
                matched.to_string()
            } else if matched.starts_with("/*") {
                " ".to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Parses hand-edited JSON: comments are stripped, the rest must be strict JSON.
pub fn parse_relaxed(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_comments(text))
}
