//! Stage 1: Collect — file discovery and ordering.

use std::fs;
use std::path::{Path, PathBuf};

use sp_core::{header_rank, BundleConfig, FragmentRole, Result, SourceFragment, SpError};
use tracing::debug;

/// Discovered project: ordered headers followed by ordered sources.
#[derive(Debug, Clone)]
pub struct CollectedProject {
    pub headers: Vec<SourceFragment>,
    pub sources: Vec<SourceFragment>,
}

/// Recursively enumerate the project root, partition by extension and read
/// every file up front. Any unreadable file aborts the run.
///
/// Headers sort by `(header_rank, path)` so foundational headers always come
/// first; the path tie-break makes ordering deterministic across
/// filesystems. Sources sort by path alone.
pub fn collect(root: &Path, config: &BundleConfig) -> Result<CollectedProject> {
    if !root.is_dir() {
        return Err(SpError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut header_paths: Vec<PathBuf> = Vec::new();
    let mut source_paths: Vec<PathBuf> = Vec::new();
    walk(root, &mut |path| {
        let name = path.to_string_lossy();
        if config.header_exts.iter().any(|e| name.ends_with(e.as_str())) {
            header_paths.push(path.to_path_buf());
        } else if config.source_exts.iter().any(|e| name.ends_with(e.as_str())) {
            source_paths.push(path.to_path_buf());
        }
    })?;

    header_paths.sort_by(|a, b| (header_rank(a), a).cmp(&(header_rank(b), b)));
    source_paths.sort();

    debug!(
        headers = header_paths.len(),
        sources = source_paths.len(),
        "collected project files"
    );

    let headers = read_all(&header_paths, FragmentRole::Header)?;
    let sources = read_all(&source_paths, FragmentRole::TranslationUnit)?;
    Ok(CollectedProject { headers, sources })
}

fn read_all(paths: &[PathBuf], role: FragmentRole) -> Result<Vec<SourceFragment>> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|source| SpError::ReadFailed {
                path: path.clone(),
                source,
            })?;
            Ok(SourceFragment::new(path.clone(), role, text))
        })
        .collect()
}

fn walk(dir: &Path, visit: &mut impl FnMut(&Path)) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, visit)?;
        } else {
            visit(&path);
        }
    }
    Ok(())
}
