// ============================================================
// Layer 3 — Classification Summary (Pivot)
// ============================================================
// The aggregate at the heart of the second pipeline stage:
// for every distinct predicted emotion, how many headlines
// carried it, split by truth label.
//
// The pivot is a pure function over classified records:
//   - one output row per distinct predicted_emotion
//   - real_only / fake_only counts, missing combinations are 0
//   - all_headlines is always their sum
//   - identical input multiset → identical output, regardless
//     of row order in the source
//
// Rows come out sorted by emotion label. Callers must not rely
// on any particular order, but sorting keeps reruns
// byte-identical.
//
// Reference: Rust Book §8 (Collections)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::headline::{ClassifiedHeadline, TruthLabel};

/// One row of the classification overview: per-emotion counts
/// split by truth label.
///
/// Field order is the CSV column order of
/// classification_overview.csv.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSummary {
    /// The emotion label this row aggregates (unique key)
    pub predicted_emotion: String,

    /// Total headlines with this emotion — always real + fake
    pub all_headlines: u64,

    /// Headlines with this emotion among REAL-labelled rows
    pub real_only: u64,

    /// Headlines with this emotion among FAKE-labelled rows
    pub fake_only: u64,
}

/// Pivot classified records into per-emotion counts split by
/// truth label.
///
/// Deterministic and order-independent: the counts depend only
/// on the multiset of (predicted_emotion, label) pairs. An empty
/// input produces an empty summary.
pub fn pivot_summary(records: &[ClassifiedHeadline]) -> Vec<EmotionSummary> {
    // (real, fake) counts keyed by emotion.
    // BTreeMap gives a stable, sorted row order for free.
    let mut counts: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for record in records {
        let entry = counts.entry(record.predicted_emotion.as_str()).or_insert((0, 0));
        match record.label {
            TruthLabel::Real => entry.0 += 1,
            TruthLabel::Fake => entry.1 += 1,
        }
    }

    counts
        .into_iter()
        .map(|(emotion, (real, fake))| EmotionSummary {
            predicted_emotion: emotion.to_string(),
            all_headlines:     real + fake,
            real_only:         real,
            fake_only:         fake,
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Build a classified record with a throwaway title and score
    fn rec(emotion: &str, label: TruthLabel) -> ClassifiedHeadline {
        ClassifiedHeadline {
            title:             format!("headline about {emotion}"),
            label,
            predicted_emotion: emotion.to_string(),
            emotion_score:     0.5,
        }
    }

    #[test]
    fn test_worked_example() {
        // (joy,REAL), (joy,FAKE), (anger,FAKE) →
        //   joy:   all=2, real=1, fake=1
        //   anger: all=1, real=0, fake=1
        let records = vec![
            rec("joy",   TruthLabel::Real),
            rec("joy",   TruthLabel::Fake),
            rec("anger", TruthLabel::Fake),
        ];
        let summary = pivot_summary(&records);

        assert_eq!(summary.len(), 2);

        let anger = summary.iter().find(|r| r.predicted_emotion == "anger").unwrap();
        assert_eq!(anger.all_headlines, 1);
        assert_eq!(anger.real_only,     0);
        assert_eq!(anger.fake_only,     1);

        let joy = summary.iter().find(|r| r.predicted_emotion == "joy").unwrap();
        assert_eq!(joy.all_headlines, 2);
        assert_eq!(joy.real_only,     1);
        assert_eq!(joy.fake_only,     1);
    }

    #[test]
    fn test_counts_always_add_up() {
        let records = vec![
            rec("fear",     TruthLabel::Real),
            rec("fear",     TruthLabel::Real),
            rec("fear",     TruthLabel::Fake),
            rec("surprise", TruthLabel::Fake),
            rec("neutral",  TruthLabel::Real),
        ];
        for row in pivot_summary(&records) {
            assert_eq!(row.all_headlines, row.real_only + row.fake_only);
        }
    }

    #[test]
    fn test_totals_preserve_record_count() {
        let records: Vec<ClassifiedHeadline> = (0..17)
            .map(|i| {
                let emotion = ["joy", "anger", "fear"][i % 3];
                let label   = if i % 2 == 0 { TruthLabel::Real } else { TruthLabel::Fake };
                rec(emotion, label)
            })
            .collect();

        let summary = pivot_summary(&records);
        let total: u64 = summary.iter().map(|r| r.all_headlines).sum();
        assert_eq!(total, 17);
    }

    #[test]
    fn test_each_emotion_appears_exactly_once() {
        let records = vec![
            rec("joy",  TruthLabel::Real),
            rec("joy",  TruthLabel::Fake),
            rec("joy",  TruthLabel::Real),
            rec("fear", TruthLabel::Fake),
        ];
        let summary = pivot_summary(&records);

        let mut emotions: Vec<&str> =
            summary.iter().map(|r| r.predicted_emotion.as_str()).collect();
        emotions.sort_unstable();
        emotions.dedup();
        assert_eq!(emotions.len(), summary.len());
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_missing_combination_is_zero() {
        // An emotion observed only among fake headlines still
        // appears, with real_only = 0
        let records = vec![
            rec("disgust", TruthLabel::Fake),
            rec("disgust", TruthLabel::Fake),
        ];
        let summary = pivot_summary(&records);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].real_only, 0);
        assert_eq!(summary[0].fake_only, 2);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let forward = vec![
            rec("joy",      TruthLabel::Real),
            rec("anger",    TruthLabel::Fake),
            rec("sadness",  TruthLabel::Real),
            rec("joy",      TruthLabel::Fake),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(pivot_summary(&forward), pivot_summary(&backward));
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            rec("joy",   TruthLabel::Real),
            rec("anger", TruthLabel::Fake),
        ];
        assert_eq!(pivot_summary(&records), pivot_summary(&records));
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = pivot_summary(&[]);
        assert!(summary.is_empty());
    }
}
