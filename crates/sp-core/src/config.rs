use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SrcpackConfig {
    #[serde(default)]
    pub bundle: BundleConfig,
    #[serde(default)]
    pub harness: HarnessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Extensions treated as headers.
    pub header_exts: Vec<String>,
    /// Extensions treated as translation units.
    pub source_exts: Vec<String>,
    /// Output artifact path.
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Extension of discoverable test files.
    pub test_ext: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            header_exts: vec![".h".into()],
            source_exts: vec![".cpp".into()],
            output: "glued.cpp".into(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_ext: ".ctn".into(),
        }
    }
}

impl SrcpackConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SrcpackConfig::default();
        assert_eq!(cfg.bundle.header_exts, vec![".h"]);
        assert_eq!(cfg.bundle.source_exts, vec![".cpp"]);
        assert_eq!(cfg.bundle.output, "glued.cpp");
        assert_eq!(cfg.harness.test_ext, ".ctn");
    }

    #[test]
    fn test_load_partial() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"bundle":{"header_exts":[".hpp"],"source_exts":[".cc"],"output":"one.cc"}}"#,
        )
        .unwrap();
        let cfg = SrcpackConfig::load(&path).unwrap();
        assert_eq!(cfg.bundle.header_exts, vec![".hpp"]);
        assert_eq!(cfg.bundle.output, "one.cc");
        // harness section falls back to defaults
        assert_eq!(cfg.harness.test_ext, ".ctn");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SrcpackConfig::load("/nonexistent/config.json").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let cfg = SrcpackConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SrcpackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bundle.output, cfg.bundle.output);
    }
}
