//! Suite runner: invoke the compiled binary per test and diff output tokens.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use sp_core::{Result, SpError};
use tracing::{info, warn};

use crate::expect::TestCase;

/// Per-test verdict. Checks mirror the reference runner: exit code first,
/// then token count, then the first mismatching position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    ExitFailure { code: i32, stderr: String },
    CountMismatch { got: usize, want: usize },
    TokenMismatch { position: usize, got: String, want: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "SUCCESS"),
            Verdict::ExitFailure { code, stderr } => {
                write!(f, "FAILED: exit code {code}\nErrors:\n{stderr}")
            }
            Verdict::CountMismatch { got, want } => {
                write!(f, "FAILED: produced {got} words, expected {want}")
            }
            Verdict::TokenMismatch { position, got, want } => write!(
                f,
                "FAILED: words mismatch at position {position}: produced {got}, expected {want}"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub path: PathBuf,
    pub description: String,
    pub verdict: Verdict,
}

/// Aggregate counts for one suite run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Runs every discovered test file against one compiled binary.
pub struct HarnessRunner {
    pub binary: PathBuf,
    pub test_ext: String,
}

impl HarnessRunner {
    pub fn new(binary: impl Into<PathBuf>, test_ext: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            test_ext: test_ext.into(),
        }
    }

    /// Recursively find test files under `dir`, sorted by path.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        collect_files(dir, &self.test_ext, &mut found)?;
        found.sort();
        Ok(found)
    }

    /// Run a single test file: parse expectations, execute the binary with
    /// the file path as its argument, compare tokenized stdout.
    pub fn run_case(&self, path: &Path) -> Result<TestOutcome> {
        let content = fs::read_to_string(path).map_err(|source| SpError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let case = TestCase::parse(path, &content);

        let output = Command::new(&self.binary).arg(path).output()?;
        let verdict = judge(&case, &output);
        Ok(TestOutcome {
            path: path.to_path_buf(),
            description: case.description,
            verdict,
        })
    }

    /// Run the whole suite. A failing test is recorded and the run
    /// continues; only infrastructure errors (unreadable file, missing
    /// binary) abort.
    pub fn run_suite(&self, dir: &Path) -> Result<(Vec<TestOutcome>, TestSummary)> {
        let mut outcomes = Vec::new();
        let mut summary = TestSummary::default();
        for path in self.discover(dir)? {
            let outcome = self.run_case(&path)?;
            if outcome.verdict.is_pass() {
                summary.passed += 1;
                info!(test = %outcome.description, "pass");
            } else {
                summary.failed += 1;
                warn!(test = %outcome.description, verdict = %outcome.verdict, "fail");
            }
            outcomes.push(outcome);
        }
        Ok((outcomes, summary))
    }
}

fn judge(case: &TestCase, output: &std::process::Output) -> Verdict {
    if !output.status.success() {
        return Verdict::ExitFailure {
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let produced: Vec<&str> = stdout.split_whitespace().collect();
    if produced.len() != case.expected.len() {
        return Verdict::CountMismatch {
            got: produced.len(),
            want: case.expected.len(),
        };
    }
    for (i, (got, want)) in produced.iter().zip(case.expected.iter()).enumerate() {
        if *got != want.as_str() {
            return Verdict::TokenMismatch {
                position: i,
                got: got.to_string(),
                want: want.clone(),
            };
        }
    }
    Verdict::Pass
}

fn collect_files(dir: &Path, ext: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, ext, found)?;
        } else if path.to_string_lossy().ends_with(ext) {
            found.push(path);
        }
    }
    Ok(())
}
