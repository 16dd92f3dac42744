//! Test-file parsing: description line and expected-output markers.

use std::path::PathBuf;

/// Opens the expected-output word sequence inside a test file.
pub const BEGIN_MARKER: &str = "BEGIN_MATCH_WORDS";
/// Closes the expected-output word sequence.
pub const END_MARKER: &str = "END_MATCH_WORDS";

/// One parsed test file.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub path: PathBuf,
    /// First line of the file, comment introducer removed and trimmed.
    pub description: String,
    /// Whitespace tokens strictly between the two markers; empty when
    /// either marker is absent.
    pub expected: Vec<String>,
}

impl TestCase {
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let description = content
            .lines()
            .next()
            .unwrap_or("")
            .replace("//", "")
            .trim()
            .to_string();

        let words: Vec<&str> = content.split_whitespace().collect();
        let begin = words.iter().position(|w| *w == BEGIN_MARKER);
        let end = words.iter().position(|w| *w == END_MARKER);
        let expected = match (begin, end) {
            (Some(b), Some(e)) if b + 1 <= e => {
                words[b + 1..e].iter().map(|w| w.to_string()).collect()
            }
            _ => Vec::new(),
        };

        Self {
            path: path.into(),
            description,
            expected,
        }
    }
}
