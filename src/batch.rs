use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::SentimentAnalyzer;
use crate::error::{Error, Result};
use crate::storage;

#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Result files written, in processing order.
    pub saved: Vec<PathBuf>,
    pub failed: Vec<BatchFailure>,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub input: PathBuf,
    pub error: Error,
}

/// `*.json` files directly inside `dir`, sorted by name. A missing directory has none.
pub fn collect_json_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}_results.json", stem))
}

/// Analyzes every JSON file in `input_dir` one after another. A file that fails
/// is logged and recorded in the summary; the remaining files still run.
pub async fn run_batch(
    analyzer: &SentimentAnalyzer,
    input_dir: &Path,
    output_dir: &Path,
    text_field: &str,
) -> Result<BatchSummary> {
    let files = collect_json_files(input_dir);
    if files.is_empty() {
        return Err(Error::NoInputFiles(input_dir.to_path_buf()));
    }

    info!("Found {} files to process", files.len());

    let mut summary = BatchSummary::default();
    let total = files.len();

    for (i, input) in files.into_iter().enumerate() {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("[{}/{}] Processing {}", i + 1, total, name);

        match process_file(analyzer, &input, output_dir, text_field).await {
            Ok(output) => {
                info!("  ✓ Saved to {}", output.display());
                summary.saved.push(output);
            }
            Err(error) => {
                warn!("  ✗ Error processing {}: {}", name, error);
                summary.failed.push(BatchFailure { input, error });
            }
        }
    }

    Ok(summary)
}

async fn process_file(
    analyzer: &SentimentAnalyzer,
    input: &Path,
    output_dir: &Path,
    text_field: &str,
) -> Result<PathBuf> {
    let comments = storage::load(input)?;
    let results = analyzer.analyze(&comments, text_field).await?;
    let output = output_path_for(input, output_dir);
    storage::save_results(&results, &output)?;
    Ok(output)
}
