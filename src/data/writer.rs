// ============================================================
// Layer 4 — CSV Writers
// ============================================================
// Writes the two tabular outputs of the pipeline: the classified
// headlines file and the classification overview. Both go
// through csv::Writer with serde, so the header row and column
// order come straight from the struct definitions in Layer 3.
//
// Writers create the file in one go — the pipeline never
// appends, every run rewrites its stage output completely.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::domain::headline::ClassifiedHeadline;
use crate::domain::summary::EmotionSummary;

/// Write classified records to {data_dir}/classified_titles_{model}.csv.
/// An empty record list still produces a file with the header row.
pub fn write_classified(path: &Path, records: &[ClassifiedHeadline]) -> Result<()> {
    write_rows(path, records)
}

/// Write the overview rows to classification_overview.csv inside
/// the per-model results directory.
pub fn write_overview(path: &Path, rows: &[EmotionSummary]) -> Result<()> {
    write_rows(path, rows)
}

/// Shared serialize-all-rows helper.
///
/// csv::Writer only emits the header row on the first serialize
/// call, so an empty slice needs the header written explicitly —
/// a header-only file is valid pipeline output, not an error.
fn write_rows<T: Serialize + HeaderRow>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    if rows.is_empty() {
        // serde never runs for an empty slice, so the header
        // must be written by hand to keep the file well-formed
        writer.write_record(T::header())?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;

    tracing::debug!("Wrote {} rows to '{}'", rows.len(), path.display());
    Ok(())
}

/// Column names for the header-only (empty data) case.
trait HeaderRow {
    fn header() -> &'static [&'static str];
}

impl HeaderRow for ClassifiedHeadline {
    fn header() -> &'static [&'static str] {
        &["title", "label", "predicted_emotion", "emotion_score"]
    }
}

impl HeaderRow for EmotionSummary {
    fn header() -> &'static [&'static str] {
        &["predicted_emotion", "all_headlines", "real_only", "fake_only"]
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_classified;
    use crate::domain::headline::TruthLabel;

    #[test]
    fn test_classified_roundtrip_preserves_columns() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("classified_titles_lexicon.csv");

        let records = vec![ClassifiedHeadline {
            title:             "Storm slams the coast".to_string(),
            label:             TruthLabel::Real,
            predicted_emotion: "fear".to_string(),
            emotion_score:     0.74,
        }];
        write_classified(&path, &records).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("title,label,predicted_emotion,emotion_score\n"));
        assert!(text.contains("Storm slams the coast,REAL,fear,0.74"));

        let back = load_classified(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].emotion_score, 0.74);
    }

    #[test]
    fn test_empty_classified_file_keeps_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("classified_titles_lexicon.csv");

        write_classified(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "title,label,predicted_emotion,emotion_score");
        assert!(load_classified(&path).unwrap().is_empty());
    }

    #[test]
    fn test_overview_column_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("classification_overview.csv");

        let rows = vec![EmotionSummary {
            predicted_emotion: "joy".to_string(),
            all_headlines:     3,
            real_only:         2,
            fake_only:         1,
        }];
        write_overview(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("predicted_emotion,all_headlines,real_only,fake_only\n"));
        assert!(text.contains("joy,3,2,1"));
    }

    #[test]
    fn test_empty_overview_keeps_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("classification_overview.csv");

        write_overview(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.trim_end(),
            "predicted_emotion,all_headlines,real_only,fake_only"
        );
    }
}
