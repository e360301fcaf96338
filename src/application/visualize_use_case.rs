// ============================================================
// Layer 2 — VisualizeUseCase
// ============================================================
// Orchestrates the visualization stage in order:
//
//   Step 1: Load classified CSV        (Layer 4 - data)
//   Step 2: Pivot into emotion counts  (Layer 3 - domain)
//   Step 3: Write overview CSV         (Layer 4 - data)
//   Step 4: Load or fetch chart theme  (Layer 6 - infra)
//   Step 5: Render bar + pie charts    (Layer 7 - viz)
//
// The summary is recomputed from the classified CSV rather than
// read back from a previous overview, so the charts can never
// drift from the records they describe. The overview CSV is
// (re)written as part of this stage for the same reason.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{loader::load_classified, paths, writer::write_overview};
use crate::domain::summary::pivot_summary;
use crate::infra::theme::ThemeStore;
use crate::viz::bar::render_emotion_distribution;
use crate::viz::pie::render_emotions_by_label;

// ─── Visualization Configuration ─────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeConfig {
    /// Model id the classified CSV was produced with
    pub model:     String,
    /// Directory holding the classified CSV
    pub data_dir:  String,
    /// Root directory for per-model results
    pub out_dir:   String,
    /// Cache directory for the downloaded chart themes
    pub style_dir: String,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            model:     "lexicon".to_string(),
            data_dir:  "data".to_string(),
            out_dir:   "out".to_string(),
            style_dir: "out/stylelib".to_string(),
        }
    }
}

// ─── VisualizeUseCase ─────────────────────────────────────────────────────────
pub struct VisualizeUseCase {
    config: VisualizeConfig,
}

impl VisualizeUseCase {
    /// Create a new VisualizeUseCase with the given configuration
    pub fn new(config: VisualizeConfig) -> Self {
        Self { config }
    }

    /// Execute the visualization stage end to end.
    /// Returns the results directory holding the overview and charts.
    pub fn execute(&self) -> Result<PathBuf> {
        let cfg = &self.config;

        // ── Step 1: Load the classified records ───────────────────────────────
        let in_path = paths::classified_csv_path(Path::new(&cfg.data_dir), &cfg.model);
        tracing::info!("Loading classified records from '{}'", in_path.display());
        let records = load_classified(&in_path)?;

        // ── Step 2: Pivot into per-emotion counts ─────────────────────────────
        let summary = pivot_summary(&records);

        // ── Step 3: Write the overview CSV ────────────────────────────────────
        let results = paths::results_dir(Path::new(&cfg.out_dir), &cfg.model)?;
        write_overview(&results.join(paths::OVERVIEW_FILE), &summary)?;

        // ── Step 4: Theme palette (cached, fetched, or fallback) ──────────────
        let palette = ThemeStore::new(cfg.style_dir.as_str()).load_or_fetch();

        // ── Step 5: Render the charts ─────────────────────────────────────────
        render_emotion_distribution(&summary, &palette, &results.join(paths::BAR_CHART_FILE))?;
        render_emotions_by_label(&summary, &palette, &results.join(paths::PIE_CHART_FILE))?;

        Ok(results)
    }
}
