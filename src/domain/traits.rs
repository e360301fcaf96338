// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the pipeline, expressed as traits so that
// implementations can be swapped without touching the stages
// that use them:
//   - CsvHeadlineSource implements HeadlineSource
//   - LexiconClassifier and RemoteClassifier implement
//     EmotionClassifier; any model-serving backend that can
//     map a title to (label, score) slots in the same way
//
// The classifier seam is the important one: the pre-trained
// model is an external collaborator, and the pipeline only ever
// sees this single-method interface.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::headline::{EmotionPrediction, Headline};

// ─── HeadlineSource ───────────────────────────────────────────────────────────
/// Any component that can load headline records from a source.
///
/// Implementations:
///   - CsvHeadlineSource → loads from the dataset CSV
pub trait HeadlineSource {
    /// Load all available headlines, in file order.
    fn load_all(&self) -> Result<Vec<Headline>>;
}

// ─── EmotionClassifier ────────────────────────────────────────────────────────
/// A black-box classification function from headline text to
/// the single highest-confidence emotion label and its score.
///
/// Implementations:
///   - LexiconClassifier  → bundled offline word-association scorer
///   - RemoteClassifier   → HTTP model-serving backend
///
/// Contract: the returned score is in [0, 1] and is NOT yet
/// rounded — the classify stage rounds before writing. A backend
/// with no candidate label for a title must return an error, and
/// tied top scores resolve to the lexicographically smallest
/// label.
pub trait EmotionClassifier {
    /// Classify one headline title.
    fn classify(&self, title: &str) -> Result<EmotionPrediction>;

    /// Identifier of the underlying model, used in log lines.
    fn model_id(&self) -> &str;
}
