// ============================================================
// Layer 5 — Lexicon Classifier
// ============================================================
// The bundled offline backend: scores a headline against the
// word-association table and emits the same (label, score)
// shape as the remote model, so the layers above never know
// which one they are talking to.
//
// Scoring model:
//   1. every emotion starts at zero mass; "neutral" starts at a
//      fixed baseline so that a headline with no emotional words
//      still yields a confident neutral prediction,
//   2. each associated word adds its weight (times any pending
//      intensifier) to its emotion's mass,
//   3. masses are normalised to sum to 1.0 — the winning mass is
//      the confidence score.
//
// Reference: The Rust Book §10.2 (implementing traits)

use std::collections::BTreeMap;

use anyhow::Result;

use crate::domain::headline::EmotionPrediction;
use crate::domain::traits::EmotionClassifier;
use crate::ml::lexicon::{EmotionLexicon, EMOTION_LABELS};
use crate::ml::top_prediction;

/// Model identifier the CLI uses to select this backend.
pub const LEXICON_MODEL_ID: &str = "lexicon";

/// Baseline mass granted to "neutral" before any words are scored.
const NEUTRAL_BIAS: f64 = 1.0;

/// Offline emotion classifier backed by [`EmotionLexicon`].
pub struct LexiconClassifier {
    lexicon: EmotionLexicon,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    /// Create a classifier with the built-in vocabulary
    pub fn new() -> Self {
        Self {
            lexicon: EmotionLexicon::new(),
        }
    }

    /// Create a classifier over a custom lexicon
    pub fn with_lexicon(lexicon: EmotionLexicon) -> Self {
        Self { lexicon }
    }

    /// Accumulate per-emotion mass for one headline.
    ///
    /// An intensifier multiplies the weight of the next associated
    /// word only ("extremely happy"); it is discarded if the next
    /// word carries no association.
    fn emotion_mass(&self, title: &str) -> BTreeMap<String, f64> {
        let mut mass: BTreeMap<String, f64> = EMOTION_LABELS
            .iter()
            .map(|label| (label.to_string(), 0.0))
            .collect();
        *mass.get_mut("neutral").unwrap() += NEUTRAL_BIAS;

        let mut intensity = 1.0;
        for raw in title.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }

            if let Some(multiplier) = self.lexicon.intensifier(word) {
                intensity = multiplier;
                continue;
            }

            if let Some((emotion, weight)) = self.lexicon.association(word) {
                *mass.entry(emotion.to_string()).or_insert(0.0) += weight * intensity;
            }
            intensity = 1.0;
        }

        mass
    }
}

impl EmotionClassifier for LexiconClassifier {
    fn classify(&self, title: &str) -> Result<EmotionPrediction> {
        // ── Step 1: score every emotion ──
        let mass = self.emotion_mass(title);

        // ── Step 2: normalise masses into [0, 1] scores ──
        // The total is never zero: "neutral" always holds its baseline.
        let total: f64 = mass.values().sum();
        let candidates = mass
            .into_iter()
            .map(|(label, m)| EmotionPrediction::new(label, m / total));

        // ── Step 3: keep the dominant emotion ──
        top_prediction(candidates)
    }

    fn model_id(&self) -> &str {
        LEXICON_MODEL_ID
    }
}
