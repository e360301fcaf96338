// ============================================================
// Layer 3 — Headline Domain Types
// ============================================================
// Represents the unit of classification: a news headline with
// its ground-truth tag, and the classified record the pipeline
// derives from it.
//
// The lifecycle is strictly one-way:
//   Headline            → loaded from the raw dataset CSV
//   EmotionPrediction   → produced by a classification backend
//   ClassifiedHeadline  → Headline + prediction, written back out
//
// All three are plain data structs. ClassifiedHeadline field
// order matters — serde writes CSV columns in declaration order,
// and the output contract is title,label,predicted_emotion,
// emotion_score.
//
// Reference: Rust Book §5 (Structs)
//            serde derive documentation

use serde::{Deserialize, Serialize};

/// Ground-truth tag carried by every headline in the dataset.
/// Serialised exactly as the dataset spells it: "FAKE" / "REAL".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TruthLabel {
    Fake,
    Real,
}

impl TruthLabel {
    /// The dataset spelling of this label
    pub fn as_str(&self) -> &'static str {
        match self {
            TruthLabel::Fake => "FAKE",
            TruthLabel::Real => "REAL",
        }
    }
}

/// A single news headline — the input unit, one per CSV row.
/// Immutable once loaded; the classifier never rewrites titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    /// The headline text to classify
    pub title: String,

    /// Ground-truth truth label from the dataset
    pub label: TruthLabel,
}

impl Headline {
    /// Create a new Headline.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(title: impl Into<String>, label: TruthLabel) -> Self {
        Self { title: title.into(), label }
    }
}

/// The raw answer a classification backend gives for one title:
/// the single highest-confidence emotion label and its score.
///
/// Scores arrive un-rounded from the backend; the classifier
/// stage calls rounded() before anything is written out.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionPrediction {
    /// Predicted emotion label (e.g. "joy", "anger", "fear")
    pub label: String,

    /// Confidence in [0, 1]
    pub score: f64,
}

impl EmotionPrediction {
    /// Create a new prediction
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self { label: label.into(), score }
    }

    /// Round the score to exactly 2 decimal places.
    /// This is the classifier stage's output contract — every
    /// emotion_score that reaches disk has passed through here.
    pub fn rounded(self) -> Self {
        Self {
            label: self.label,
            score: (self.score * 100.0).round() / 100.0,
        }
    }
}

/// A headline extended with its classification result.
/// One-to-one with the input rows, in input order.
///
/// Field order is the CSV column order of the classified file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedHeadline {
    /// The original headline text
    pub title: String,

    /// The original ground-truth label
    pub label: TruthLabel,

    /// Top-scoring emotion label from the backend
    pub predicted_emotion: String,

    /// Confidence for that label, in [0, 1], 2 decimal places
    pub emotion_score: f64,
}

impl ClassifiedHeadline {
    /// Combine a headline with its (already rounded) prediction
    pub fn from_prediction(headline: Headline, prediction: EmotionPrediction) -> Self {
        Self {
            title:             headline.title,
            label:             headline.label,
            predicted_emotion: prediction.label,
            emotion_score:     prediction.score,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_two_decimals() {
        let p = EmotionPrediction::new("joy", 0.85623).rounded();
        assert_eq!(p.score, 0.86);

        let p = EmotionPrediction::new("joy", 0.854).rounded();
        assert_eq!(p.score, 0.85);
    }

    #[test]
    fn test_rounding_keeps_bounds() {
        // Rounding must never push a valid score outside [0, 1]
        let low  = EmotionPrediction::new("fear", 0.0).rounded();
        let high = EmotionPrediction::new("fear", 1.0).rounded();
        assert_eq!(low.score,  0.0);
        assert_eq!(high.score, 1.0);

        let near_one = EmotionPrediction::new("fear", 0.9999).rounded();
        assert!(near_one.score <= 1.0);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let once  = EmotionPrediction::new("anger", 0.4567).rounded();
        let twice = once.clone().rounded();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truth_label_spelling() {
        assert_eq!(TruthLabel::Fake.as_str(), "FAKE");
        assert_eq!(TruthLabel::Real.as_str(), "REAL");
    }

    #[test]
    fn test_classified_from_prediction() {
        let h = Headline::new("Markets rally on good news", TruthLabel::Real);
        let p = EmotionPrediction::new("joy", 0.92);
        let c = ClassifiedHeadline::from_prediction(h, p);
        assert_eq!(c.title, "Markets rally on good news");
        assert_eq!(c.label, TruthLabel::Real);
        assert_eq!(c.predicted_emotion, "joy");
        assert_eq!(c.emotion_score, 0.92);
    }
}
