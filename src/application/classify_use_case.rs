// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Orchestrates the classification stage in order:
//
//   Step 1: Load headline CSV         (Layer 4 - data)
//   Step 2: Build classifier backend  (Layer 5 - ml)
//   Step 3: Classify every headline   (Layer 5 - ml)
//   Step 4: Write classified CSV      (Layer 4 - data)
//
// The stage is all-or-nothing: a headline that cannot be
// classified aborts the run before anything is written, so a
// classified CSV on disk is always complete.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::data::{loader::CsvHeadlineSource, paths, writer::write_classified};
use crate::domain::headline::{ClassifiedHeadline, Headline};
use crate::domain::traits::{EmotionClassifier, HeadlineSource};
use crate::ml::build_classifier;

// ─── Classification Configuration ────────────────────────────────────────────
// Everything the classify stage needs to run. Serialisable so a
// run's settings can be logged or stored next to its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Model id: `lexicon` for the bundled backend, anything else
    /// is a hosted text-classification model
    pub model:    String,
    /// CSV of headlines to classify (title + label columns)
    pub input:    String,
    /// Directory the classified CSV is written into
    pub data_dir: String,
    /// Custom inference endpoint; overrides the hosted default
    pub endpoint: Option<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            model:    "lexicon".to_string(),
            input:    "data/fake_or_real_news.csv".to_string(),
            data_dir: "data".to_string(),
            endpoint: None,
        }
    }
}

// ─── ClassifyUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the classification stage end to end.
pub struct ClassifyUseCase {
    config: ClassifyConfig,
}

impl ClassifyUseCase {
    /// Create a new ClassifyUseCase with the given configuration
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Execute the classification stage end to end.
    /// Returns the path of the classified CSV it wrote.
    pub fn execute(&self) -> Result<PathBuf> {
        let cfg = &self.config;

        // ── Step 1: Load the headlines ────────────────────────────────────────
        // Extra CSV columns are ignored; a malformed row aborts here.
        tracing::info!("Loading headlines from '{}'", cfg.input);
        let source = CsvHeadlineSource::new(cfg.input.as_str());
        let headlines = source.load_all()?;
        tracing::info!("Loaded {} headlines", headlines.len());

        // ── Step 2: Build the classifier backend ──────────────────────────────
        let classifier = build_classifier(&cfg.model, cfg.endpoint.clone())?;
        tracing::info!("Using model '{}'", classifier.model_id());

        // ── Step 3: Classify every headline ───────────────────────────────────
        let records = classify_headlines(headlines, classifier.as_ref())?;

        // ── Step 4: Write the classified CSV ──────────────────────────────────
        // Only reached when every single row classified cleanly.
        let out_path = paths::classified_csv_path(Path::new(&cfg.data_dir), &cfg.model);
        write_classified(&out_path, &records)?;
        tracing::info!("Wrote {} classified records", records.len());

        Ok(out_path)
    }
}

/// Classify headlines one by one behind a progress bar.
///
/// Scores are rounded to two decimals here, so every record handed
/// to the writer already carries its final on-disk score. The first
/// failing row aborts the whole batch.
pub fn classify_headlines(
    headlines: Vec<Headline>,
    classifier: &dyn EmotionClassifier,
) -> Result<Vec<ClassifiedHeadline>> {
    let progress = ProgressBar::new(headlines.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    progress.set_message("Classifying Headlines");

    let mut records = Vec::with_capacity(headlines.len());
    for (row, headline) in headlines.into_iter().enumerate() {
        let prediction = classifier
            .classify(&headline.title)
            .with_context(|| {
                format!(
                    "Classification failed on row {} ('{}')",
                    row + 1,
                    headline.title
                )
            })?
            .rounded();
        records.push(ClassifiedHeadline::from_prediction(headline, prediction));
        progress.inc(1);
    }

    progress.finish();
    Ok(records)
}
