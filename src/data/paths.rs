// ============================================================
// Layer 4 — File Layout
// ============================================================
// Centralises every on-disk name the pipeline produces so the
// stages agree on where to find each other's output:
//
//   data/
//     fake_or_real_news.csv            ← raw input (default)
//     classified_titles_{model}.csv    ← classify output
//   out/
//     results_{model}/
//       classification_overview.csv    ← summarize output
//       emotion_distribution.png       ← visualize output (bar)
//       emotions_by_label.png          ← visualize output (pies)
//
// {model} is the model identifier with any owner prefix
// stripped, so "j-hartmann/emotion-english-distilroberta-base"
// and a local "lexicon" both produce tidy filenames.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the summary CSV inside the results directory
pub const OVERVIEW_FILE: &str = "classification_overview.csv";

/// Fixed base name of the bar chart image
pub const BAR_CHART_FILE: &str = "emotion_distribution.png";

/// Fixed base name of the pie chart image
pub const PIE_CHART_FILE: &str = "emotions_by_label.png";

/// Abbreviate a model identifier for use in file names by
/// dropping the owner part of "owner/name" ids.
pub fn model_short_name(model: &str) -> &str {
    model.split('/').nth(1).unwrap_or(model)
}

/// Path of the classified CSV for a given model:
/// {data_dir}/classified_titles_{model}.csv
pub fn classified_csv_path(data_dir: &Path, model: &str) -> PathBuf {
    data_dir.join(format!("classified_titles_{}.csv", model_short_name(model)))
}

/// Per-model results directory {out_dir}/results_{model},
/// created on demand like `mkdir -p`.
pub fn results_dir(out_dir: &Path, model: &str) -> Result<PathBuf> {
    let dir = out_dir.join(format!("results_{}", model_short_name(model)));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Cannot create results directory '{}'", dir.display()))?;
    Ok(dir)
}
