// ============================================================
// Layer 5 — ML / Classifier Backends
// ============================================================
// This layer contains ALL model-backend specific code.
// No other layer knows which backend produced a prediction —
// everything above talks to the `EmotionClassifier` trait.
//
// Why isolate backend code here?
//   - The remote wire format can change without touching the
//     pipeline above it
//   - The summariser and visualiser are testable offline
//   - Swapping models is a constructor choice, not a rewrite
//
// What's in this layer:
//
//   lexicon.rs    — Word → emotion association table with
//                   intensity modifiers (the offline vocabulary)
//
//   classifier.rs — LexiconClassifier: scores headlines against
//                   the lexicon and normalises to a confidence
//
//   remote.rs     — RemoteClassifier: POSTs headlines to a hosted
//                   text-classification model and parses the
//                   scored labels it returns
//
// Both backends emit raw scores; rounding to two decimals happens
// in the classify use case, right before records are written out.

pub mod classifier;
pub mod lexicon;
pub mod remote;

use anyhow::{bail, Result};

use crate::domain::headline::EmotionPrediction;
use crate::domain::traits::EmotionClassifier;
use crate::ml::classifier::{LexiconClassifier, LEXICON_MODEL_ID};
use crate::ml::remote::RemoteClassifier;

/// Select the backend for a model id.
///
/// An explicit `endpoint` always means the remote backend, whatever
/// the model id. Otherwise the reserved id `lexicon` selects the
/// bundled offline backend, and anything else is treated as a hosted
/// model id.
pub fn build_classifier(
    model: &str,
    endpoint: Option<String>,
) -> Result<Box<dyn EmotionClassifier>> {
    if endpoint.is_some() {
        return Ok(Box::new(RemoteClassifier::new(model, endpoint)?));
    }
    if model == LEXICON_MODEL_ID {
        return Ok(Box::new(LexiconClassifier::new()));
    }
    Ok(Box::new(RemoteClassifier::new(model, None)?))
}

/// Reduce candidate predictions to the dominant one.
///
/// Highest score wins; an exact tie goes to the lexically smallest
/// label so that repeated runs always agree. No candidates at all is
/// an error — a classifier that returns nothing cannot label a row.
pub(crate) fn top_prediction(
    candidates: impl IntoIterator<Item = EmotionPrediction>,
) -> Result<EmotionPrediction> {
    let mut best: Option<EmotionPrediction> = None;
    for candidate in candidates {
        best = Some(match best {
            None => candidate,
            Some(current) => {
                let wins = candidate.score > current.score
                    || (candidate.score == current.score && candidate.label < current.label);
                if wins {
                    candidate
                } else {
                    current
                }
            }
        });
    }
    match best {
        Some(prediction) => Ok(prediction),
        None => bail!("Classifier returned no candidate labels"),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_prediction_picks_highest_score() {
        let top = top_prediction(vec![
            EmotionPrediction::new("fear", 0.12),
            EmotionPrediction::new("joy", 0.81),
            EmotionPrediction::new("neutral", 0.07),
        ])
        .unwrap();
        assert_eq!(top.label, "joy");
        assert_eq!(top.score, 0.81);
    }

    #[test]
    fn test_top_prediction_breaks_ties_lexically() {
        let top = top_prediction(vec![
            EmotionPrediction::new("surprise", 0.5),
            EmotionPrediction::new("anger", 0.5),
            EmotionPrediction::new("joy", 0.5),
        ])
        .unwrap();
        assert_eq!(top.label, "anger");
    }

    #[test]
    fn test_top_prediction_rejects_empty_input() {
        assert!(top_prediction(Vec::new()).is_err());
    }

    #[test]
    fn test_build_classifier_selects_lexicon_backend() {
        let classifier = build_classifier("lexicon", None).unwrap();
        assert_eq!(classifier.model_id(), "lexicon");
    }

    #[test]
    fn test_build_classifier_selects_remote_backend() {
        let classifier =
            build_classifier("j-hartmann/emotion-english-distilroberta-base", None).unwrap();
        assert_eq!(
            classifier.model_id(),
            "j-hartmann/emotion-english-distilroberta-base"
        );
    }
}
