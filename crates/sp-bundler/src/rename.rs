//! Stage 6: Rename — the identifier shrinker.
//!
//! Replaces a curated list of long project symbols with short unique codes
//! across the whole text. Replacement is substring-based, not tokenizing:
//! correctness depends on the list being curated collision-free, and the
//! downstream compiler is the oracle.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One applied `(long, short)` rename pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEntry {
    pub long: String,
    pub short: String,
}

/// The eligible rename pairs (code strictly shorter than the token),
/// in substitution order (token length strictly descending). A pair is
/// recorded whether or not its token occurred in the text: keyword drift
/// is a silent non-error, and the table stays usable for re-applying the
/// same vocabulary to other text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameTable {
    pub entries: Vec<RenameEntry>,
}

impl RenameTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the curated keyword list: whitespace-delimited, blanks dropped,
/// duplicates removed keeping the first occurrence. Authored order is the
/// tie-break for equal-length tokens.
pub fn parse_keywords(list: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords = Vec::new();
    for token in list.split_whitespace() {
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Short code for the n-th token in length-descending order: a letter
/// cycling `A..Z` plus a counter that increments once per full cycle
/// (`A0, B0, …, Z0, A1, …`). Globally unique within one run.
pub fn short_code(n: usize) -> String {
    let letter = (b'A' + (n % 26) as u8) as char;
    format!("{}{}", letter, n / 26)
}

/// Replace every curated token with its short code across the whole text.
///
/// Tokens are processed in strictly descending length (stable among equal
/// lengths), which guarantees a shorter token that is a substring of a
/// longer one can never corrupt the longer token. A pair is applied only
/// when the code is strictly shorter than the token; the code position is
/// consumed either way, keeping the counter simple.
pub fn shrink(text: &str, keywords: &[String]) -> (String, RenameTable) {
    let mut sorted: Vec<&String> = keywords.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = text.to_string();
    let mut table = RenameTable::default();
    for (n, token) in sorted.iter().enumerate() {
        let code = short_code(n);
        if code.len() >= token.len() {
            continue;
        }
        result = result.replace(token.as_str(), &code);
        table.entries.push(RenameEntry {
            long: (*token).clone(),
            short: code,
        });
    }

    debug!(
        tokens = keywords.len(),
        applied = table.len(),
        "identifier shrink complete"
    );
    (result, table)
}

/// Re-apply an existing rename table to another text. Entries are already
/// in descending token-length order, so substitution is substring-safe for
/// the same curated vocabulary.
pub fn apply_table(text: &str, table: &RenameTable) -> String {
    let mut result = text.to_string();
    for entry in &table.entries {
        result = result.replace(entry.long.as_str(), entry.short.as_str());
    }
    result
}
