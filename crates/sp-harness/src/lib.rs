//! Black-box test harness for compiled artifacts.
//!
//! Runs a compiled binary against test files that embed an expected-output
//! word sequence, and diffs whitespace-separated tokens of actual vs.
//! expected output. One failing test never aborts the suite.

pub mod expect;
pub mod runner;

pub use expect::{TestCase, BEGIN_MARKER, END_MARKER};
pub use runner::{HarnessRunner, TestOutcome, TestSummary, Verdict};
