// ============================================================
// Layer 4 — CSV Loaders
// ============================================================
// Reads the two tabular inputs of the pipeline using the csv
// crate with serde deserialization.
//
// The raw dataset is the larger contract surface:
//   - UTF-8, comma-delimited, header row required
//   - must contain "title" and "label" columns
//   - label is exactly "FAKE" or "REAL"
//   - any other columns (article text, ids, ...) are ignored,
//     because serde only picks the named fields
//
// Malformed rows are NOT skipped: a bad label or missing column
// aborts the load with row context. The pipeline is a batch job
// with no partial-success mode.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::headline::{ClassifiedHeadline, Headline};
use crate::domain::traits::HeadlineSource;

/// Loads raw headline records from the dataset CSV.
/// Implements the HeadlineSource trait from Layer 3.
pub struct CsvHeadlineSource {
    /// Path to the dataset CSV file
    path: PathBuf,
}

impl CsvHeadlineSource {
    /// Create a new loader pointed at a dataset file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HeadlineSource for CsvHeadlineSource {
    fn load_all(&self) -> Result<Vec<Headline>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let mut reader = csv::Reader::from_reader(file);
        let mut headlines = Vec::new();

        // reader.deserialize() yields one Result per data row;
        // the header row has already been consumed at this point
        for (row, result) in reader.deserialize().enumerate() {
            let headline: Headline = result.with_context(|| {
                format!("Malformed row {} in '{}'", row + 1, self.path.display())
            })?;
            headlines.push(headline);
        }

        tracing::info!(
            "Loaded {} headlines from '{}'",
            headlines.len(),
            self.path.display()
        );
        Ok(headlines)
    }
}

/// Load classified records back in for the summarize/visualize
/// stages. Same CSV conventions as the raw dataset, plus the two
/// emotion columns the classify stage appended.
pub fn load_classified(path: &Path) -> Result<Vec<ClassifiedHeadline>> {
    let file = File::open(path).with_context(|| {
        format!(
            "Cannot open classified file '{}'. Have you run 'classify' first?",
            path.display()
        )
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for (row, result) in reader.deserialize().enumerate() {
        let record: ClassifiedHeadline = result
            .with_context(|| format!("Malformed row {} in '{}'", row + 1, path.display()))?;
        records.push(record);
    }

    tracing::info!(
        "Loaded {} classified records from '{}'",
        records.len(),
        path.display()
    );
    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::headline::TruthLabel;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_loads_title_and_label() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_file(
            tmp.path(),
            "news.csv",
            "title,label\nMarkets rally,REAL\nAliens land in Ohio,FAKE\n",
        );

        let headlines = CsvHeadlineSource::new(path).load_all().unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "Markets rally");
        assert_eq!(headlines[0].label, TruthLabel::Real);
        assert_eq!(headlines[1].label, TruthLabel::Fake);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        // The real dataset carries an id column and the full
        // article text; only title and label matter
        let tmp = tempfile::tempdir().unwrap();
        let path = write_file(
            tmp.path(),
            "news.csv",
            "id,title,text,label\n8476,You Can Smell The Fear,long article body,FAKE\n",
        );

        let headlines = CsvHeadlineSource::new(path).load_all().unwrap();
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "You Can Smell The Fear");
        assert_eq!(headlines[0].label, TruthLabel::Fake);
    }

    #[test]
    fn test_header_only_file_is_empty_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_file(tmp.path(), "empty.csv", "title,label\n");

        let headlines = CsvHeadlineSource::new(path).load_all().unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_bad_label_aborts_with_row_context() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_file(
            tmp.path(),
            "bad.csv",
            "title,label\nFine headline,REAL\nBroken headline,MAYBE\n",
        );

        let err = CsvHeadlineSource::new(path).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.csv");
        assert!(CsvHeadlineSource::new(missing).load_all().is_err());
        assert!(load_classified(&tmp.path().join("also-nope.csv")).is_err());
    }

    #[test]
    fn test_loads_classified_records() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_file(
            tmp.path(),
            "classified.csv",
            "title,label,predicted_emotion,emotion_score\n\
             Markets rally,REAL,joy,0.92\n\
             Aliens land in Ohio,FAKE,surprise,0.61\n",
        );

        let records = load_classified(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].predicted_emotion, "joy");
        assert_eq!(records[0].emotion_score, 0.92);
        assert_eq!(records[1].label, TruthLabel::Fake);
    }
}
