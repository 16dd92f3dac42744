//! Stage 3: Comments — strip line and block comments.

use regex::Regex;
use std::sync::LazyLock;

// Line comments up to and including the newline, or non-greedy block
// comments spanning any number of lines.
static RE_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)//.*?\n|/\*.*?\*/").unwrap());

/// Remove every line comment and block comment from the text.
///
/// Purely textual: a comment introducer inside a string or character
/// literal is indistinguishable from a real comment and gets stripped too.
/// Accepted heuristic risk; the downstream compiler is the oracle.
pub fn strip(text: &str) -> String {
    RE_COMMENTS.replace_all(text, "").to_string()
}
