// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer owns all tabular I/O — everything between the flat
// files on disk and the in-memory records of Layer 3.
//
// The files flow in this order:
//
//   fake_or_real_news.csv
//       │
//       ▼
//   CsvHeadlineSource   → reads title + label, ignores extras
//       │
//       ▼
//   (Layer 5 classifies each title)
//       │
//       ▼
//   classified_titles_{model}.csv
//       │
//       ▼
//   load_classified     → reads the augmented records back
//       │
//       ▼
//   (Layer 3 pivots them)
//       │
//       ▼
//   classification_overview.csv
//
// Each module is responsible for exactly one concern:
// loading, writing, or naming the files.
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

/// Reads the raw dataset and the classified CSV
pub mod loader;

/// Model-name abbreviation and the fixed file/directory layout
pub mod paths;

/// Writes the classified CSV and the overview CSV
pub mod writer;
