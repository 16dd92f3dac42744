use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Rank given to headers that match none of the foundational suffixes.
pub const OTHER_HEADER_RANK: usize = 999_999;

/// Foundational header suffixes, lowest rank first. Headers matching these
/// must be emitted before anything that depends on them.
const FOUNDATIONAL_SUFFIXES: &[&str] = &["util.h", "nameid.h", "lexer.h"];

/// Role of a discovered source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentRole {
    Header,
    TranslationUnit,
}

/// One header or translation-unit file, as discovered. Immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFragment {
    pub path: PathBuf,
    pub role: FragmentRole,
    pub text: String,
}

impl SourceFragment {
    pub fn new(path: impl Into<PathBuf>, role: FragmentRole, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            role,
            text: text.into(),
        }
    }
}

/// Ordering rank for a header path: foundational suffixes get fixed low
/// ranks, everything else shares [`OTHER_HEADER_RANK`].
pub fn header_rank(path: &Path) -> usize {
    let s = path.to_string_lossy();
    for (rank, suffix) in FOUNDATIONAL_SUFFIXES.iter().enumerate() {
        if s.ends_with(suffix) {
            return rank;
        }
    }
    OTHER_HEADER_RANK
}
