// ============================================================
// Layer 2 — SummarizeUseCase
// ============================================================
// Orchestrates the summary stage in order:
//
//   Step 1: Load classified CSV        (Layer 4 - data)
//   Step 2: Pivot into emotion counts  (Layer 3 - domain)
//   Step 3: Write overview CSV         (Layer 4 - data)
//
// The overview lands in the per-model results directory, next
// to where the charts go, so one directory holds everything a
// model run produced.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{loader::load_classified, paths, writer::write_overview};
use crate::domain::summary::pivot_summary;

// ─── Summary Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Model id the classified CSV was produced with
    pub model:    String,
    /// Directory holding the classified CSV
    pub data_dir: String,
    /// Root directory for per-model results
    pub out_dir:  String,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            model:    "lexicon".to_string(),
            data_dir: "data".to_string(),
            out_dir:  "out".to_string(),
        }
    }
}

// ─── SummarizeUseCase ─────────────────────────────────────────────────────────
pub struct SummarizeUseCase {
    config: SummarizeConfig,
}

impl SummarizeUseCase {
    /// Create a new SummarizeUseCase with the given configuration
    pub fn new(config: SummarizeConfig) -> Self {
        Self { config }
    }

    /// Execute the summary stage end to end.
    /// Returns the path of the overview CSV it wrote.
    pub fn execute(&self) -> Result<PathBuf> {
        let cfg = &self.config;

        // ── Step 1: Load the classified records ───────────────────────────────
        let in_path = paths::classified_csv_path(Path::new(&cfg.data_dir), &cfg.model);
        tracing::info!("Loading classified records from '{}'", in_path.display());
        let records = load_classified(&in_path)?;

        // ── Step 2: Pivot into per-emotion counts ─────────────────────────────
        let summary = pivot_summary(&records);
        tracing::info!(
            "Summarised {} records into {} emotions",
            records.len(),
            summary.len()
        );

        // ── Step 3: Write the overview CSV ────────────────────────────────────
        let results = paths::results_dir(Path::new(&cfg.out_dir), &cfg.model)?;
        let overview = results.join(paths::OVERVIEW_FILE);
        write_overview(&overview, &summary)?;

        Ok(overview)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> SummarizeConfig {
        SummarizeConfig {
            model:    "lexicon".to_string(),
            data_dir: dir.display().to_string(),
            out_dir:  dir.join("out").display().to_string(),
        }
    }

    #[test]
    fn test_execute_writes_the_overview() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("classified_titles_lexicon.csv"),
            "title,label,predicted_emotion,emotion_score\n\
             a,REAL,joy,0.91\n\
             b,FAKE,joy,0.66\n\
             c,REAL,fear,0.54\n",
        )
        .unwrap();

        SummarizeUseCase::new(config_for(dir.path())).execute().unwrap();

        let overview = dir
            .path()
            .join("out/results_lexicon/classification_overview.csv");
        let content = std::fs::read_to_string(overview).unwrap();
        assert!(content.starts_with("predicted_emotion,all_headlines,real_only,fake_only"));
        assert!(content.contains("fear,1,1,0"));
        assert!(content.contains("joy,2,1,1"));
    }

    #[test]
    fn test_empty_classified_file_yields_empty_overview() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("classified_titles_lexicon.csv"),
            "title,label,predicted_emotion,emotion_score\n",
        )
        .unwrap();

        SummarizeUseCase::new(config_for(dir.path())).execute().unwrap();

        let overview = dir
            .path()
            .join("out/results_lexicon/classification_overview.csv");
        let content = std::fs::read_to_string(overview).unwrap();
        assert_eq!(
            content.trim_end(),
            "predicted_emotion,all_headlines,real_only,fake_only"
        );
    }

    #[test]
    fn test_missing_classified_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = SummarizeUseCase::new(config_for(dir.path()))
            .execute()
            .unwrap_err();
        assert!(format!("{error:#}").contains("classify"));
    }
}
