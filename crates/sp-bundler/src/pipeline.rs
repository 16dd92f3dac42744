//! Bundle pipeline — orchestrates all stages.

use std::path::Path;

use sp_core::{BundleConfig, Result};
use tracing::{debug, info};

use crate::rename::RenameTable;
use crate::{assemble, collect, comments, concat, guard, rename, spaces};

/// Bundle result with statistics.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// The final artifact text.
    pub output: String,
    /// Length of the merged text before any transform.
    pub original_len: usize,
    /// Length of the final artifact.
    pub bundled_len: usize,
    /// Percent reduction (negative when framing outweighs shrinking).
    pub reduction_pct: f64,
    pub stages_applied: Vec<String>,
    pub rename_table: RenameTable,
}

impl BundleReport {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.bundled_len as f64 / self.original_len as f64
    }
}

/// The amalgamation pipeline: a strict linear sequence of text-to-text
/// transforms over one merged buffer. Single-threaded and batch; all file
/// reads happen in the collect stage, the single write in the assembler.
pub struct BundlePipeline {
    pub config: BundleConfig,
}

impl BundlePipeline {
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Run every stage over the project under `root`, shrinking the symbols
    /// named in the curated `keywords` list.
    pub fn bundle(&self, root: &Path, keywords: &str) -> Result<BundleReport> {
        let mut stages = Vec::new();

        let project = collect::collect(root, &self.config)?;
        stages.push("collect".to_string());

        let mut text = concat::merge(&project.headers, &project.sources);
        let original_len = text.len();
        stages.push("concat".into());

        text = comments::strip(&text);
        debug!(len = text.len(), "comments stripped");
        stages.push("comments".into());

        text = spaces::compact(&text);
        debug!(len = text.len(), "spaces compacted");
        stages.push("spaces".into());

        text = guard::escape(&text);
        let tokens = rename::parse_keywords(keywords);
        let (shrunk, table) = rename::shrink(&text, &tokens);
        text = guard::restore(&shrunk);
        debug!(len = text.len(), applied = table.len(), "identifiers shrunk");
        stages.push("guard".into());
        stages.push("rename".into());

        let output = assemble::assemble(&text, &table);
        stages.push("assemble".into());

        let bundled_len = output.len();
        let reduction_pct = if original_len > 0 {
            (1.0 - bundled_len as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };
        info!(original_len, bundled_len, reduction_pct, "bundle complete");

        Ok(BundleReport {
            output,
            original_len,
            bundled_len,
            reduction_pct,
            stages_applied: stages,
            rename_table: table,
        })
    }

    /// Bundle and write the artifact to the configured output path.
    pub fn bundle_to_file(&self, root: &Path, keywords: &str) -> Result<BundleReport> {
        let report = self.bundle(root, keywords)?;
        assemble::write_artifact(Path::new(&self.config.output), &report.output)?;
        Ok(report)
    }
}

impl Default for BundlePipeline {
    fn default() -> Self {
        Self::new(BundleConfig::default())
    }
}
