mod cli;

use clap::Parser;
use cli::{Cli, Command};
use sp_bundler::BundlePipeline;
use sp_core::SrcpackConfig;
use sp_harness::HarnessRunner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Bundle {
            root,
            keywords,
            output,
            config,
        } => {
            let mut cfg = match config {
                Some(path) => SrcpackConfig::load(path)?,
                None => SrcpackConfig::default(),
            };
            if let Some(out) = output {
                cfg.bundle.output = out.to_string_lossy().into_owned();
            }
            let keyword_list = std::fs::read_to_string(&keywords)?;
            let report = BundlePipeline::new(cfg.bundle.clone()).bundle_to_file(&root, &keyword_list)?;
            println!(
                "bundled {} -> {} chars ({:.1}% reduction), {} symbols renamed, wrote {}",
                report.original_len,
                report.bundled_len,
                report.reduction_pct,
                report.rename_table.len(),
                cfg.bundle.output
            );
        }
        Command::Check {
            tests,
            binary,
            ext,
            config,
        } => {
            let cfg = match config {
                Some(path) => SrcpackConfig::load(path)?,
                None => SrcpackConfig::default(),
            };
            let runner = HarnessRunner::new(binary, resolve_test_ext(ext, &cfg));
            let (outcomes, summary) = runner.run_suite(&tests)?;
            for outcome in &outcomes {
                if outcome.verdict.is_pass() {
                    println!("{} - SUCCESS", outcome.description);
                } else {
                    println!("{} - {}", outcome.description, outcome.verdict);
                }
            }
            println!(
                "SUCCEEDED {}, FAILED {} (total {})",
                summary.passed,
                summary.failed,
                summary.total()
            );
        }
    }
    Ok(())
}

/// `--ext` wins over the configured harness extension.
fn resolve_test_ext(ext: Option<String>, cfg: &SrcpackConfig) -> String {
    ext.unwrap_or_else(|| cfg.harness.test_ext.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ext_flag_wins() {
        let cfg = SrcpackConfig::default();
        assert_eq!(resolve_test_ext(Some(".cot".into()), &cfg), ".cot");
    }

    #[test]
    fn test_resolve_ext_from_config() {
        let mut cfg = SrcpackConfig::default();
        cfg.harness.test_ext = ".case".into();
        assert_eq!(resolve_test_ext(None, &cfg), ".case");
    }

    #[test]
    fn test_resolve_ext_default() {
        assert_eq!(resolve_test_ext(None, &SrcpackConfig::default()), ".ctn");
    }
}
