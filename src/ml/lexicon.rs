// ============================================================
// Layer 5 — Emotion Lexicon
// ============================================================
// Word-association table behind the bundled offline backend.
// Maps individual words to one of the seven emotion labels the
// pre-trained emotion models emit, with an association weight.
//
// The vocabulary leans toward news-headline register (slams,
// bombshell, mourns, ...) rather than conversational English —
// headlines are the only text this pipeline ever sees.
//
// "neutral" deliberately has no words: it is the resting state
// the scorer falls back to when nothing else accumulates mass.

use std::collections::HashMap;

/// The seven emotion labels of the pre-trained emotion models,
/// in lexical order.
pub const EMOTION_LABELS: [&str; 7] = [
    "anger", "disgust", "fear", "joy", "neutral", "sadness", "surprise",
];

/// Word → (emotion, weight) association table with a small set
/// of intensity modifiers.
pub struct EmotionLexicon {
    /// Word to (emotion label, association weight) mapping
    words: HashMap<String, (String, f64)>,
    /// Intensifier word to multiplier mapping
    intensifiers: HashMap<String, f64>,
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionLexicon {
    /// Create a lexicon with the built-in vocabulary
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let anger = vec![
            ("outrage", 0.8),
            ("outraged", 0.8),
            ("furious", 0.9),
            ("fury", 0.9),
            ("rage", 0.9),
            ("angry", 0.8),
            ("slams", 0.7),
            ("blasts", 0.7),
            ("lashes", 0.7),
            ("backlash", 0.6),
            ("condemns", 0.6),
            ("accuses", 0.5),
            ("attacks", 0.6),
            ("clash", 0.5),
            ("feud", 0.6),
            ("riot", 0.7),
            ("boycott", 0.5),
            ("protest", 0.5),
            ("hate", 0.7),
        ];

        let disgust = vec![
            ("disgusting", 0.9),
            ("repulsive", 0.9),
            ("vile", 0.8),
            ("sleaze", 0.8),
            ("sickening", 0.8),
            ("depraved", 0.8),
            ("scandal", 0.7),
            ("scandalous", 0.7),
            ("corruption", 0.7),
            ("corrupt", 0.7),
            ("disgrace", 0.7),
            ("shameful", 0.7),
            ("grotesque", 0.7),
            ("obscene", 0.7),
            ("rotten", 0.6),
            ("tainted", 0.6),
            ("toxic", 0.5),
        ];

        let fear = vec![
            ("terrifying", 0.9),
            ("terror", 0.9),
            ("panic", 0.8),
            ("dread", 0.8),
            ("frightening", 0.8),
            ("fear", 0.7),
            ("fears", 0.7),
            ("threat", 0.7),
            ("threatens", 0.7),
            ("scare", 0.7),
            ("afraid", 0.7),
            ("danger", 0.7),
            ("chilling", 0.7),
            ("menace", 0.7),
            ("nightmare", 0.7),
            ("warning", 0.6),
            ("warns", 0.6),
            ("alarm", 0.6),
            ("crisis", 0.6),
            ("dangerous", 0.6),
            ("risks", 0.5),
        ];

        let joy = vec![
            ("joy", 0.9),
            ("jubilant", 0.9),
            ("celebrates", 0.8),
            ("celebration", 0.8),
            ("triumph", 0.8),
            ("delight", 0.8),
            ("happy", 0.8),
            ("thrilled", 0.8),
            ("wins", 0.7),
            ("victory", 0.7),
            ("cheers", 0.7),
            ("festive", 0.7),
            ("smiles", 0.7),
            ("laughter", 0.7),
            ("love", 0.6),
            ("success", 0.6),
            ("hope", 0.5),
            ("welcomes", 0.5),
            ("praise", 0.5),
        ];

        let sadness = vec![
            ("mourns", 0.9),
            ("mourning", 0.9),
            ("grief", 0.9),
            ("grieving", 0.9),
            ("sorrow", 0.9),
            ("heartbreak", 0.9),
            ("tragic", 0.8),
            ("tragedy", 0.8),
            ("dies", 0.8),
            ("devastated", 0.8),
            ("death", 0.7),
            ("dead", 0.7),
            ("killed", 0.7),
            ("tears", 0.7),
            ("funeral", 0.7),
            ("victims", 0.6),
            ("farewell", 0.6),
            ("loss", 0.6),
            ("toll", 0.5),
        ];

        let surprise = vec![
            ("surprise", 0.9),
            ("astonishing", 0.9),
            ("shocking", 0.8),
            ("shock", 0.8),
            ("stuns", 0.8),
            ("stunning", 0.8),
            ("unexpected", 0.8),
            ("surprising", 0.8),
            ("bombshell", 0.8),
            ("baffling", 0.7),
            ("bizarre", 0.7),
            ("unbelievable", 0.7),
            ("incredible", 0.6),
            ("twist", 0.6),
            ("revelation", 0.6),
            ("suddenly", 0.5),
            ("remarkable", 0.5),
            ("mystery", 0.5),
        ];

        let groups: [(&str, Vec<(&str, f64)>); 6] = [
            ("anger", anger),
            ("disgust", disgust),
            ("fear", fear),
            ("joy", joy),
            ("sadness", sadness),
            ("surprise", surprise),
        ];

        for (emotion, group) in groups {
            for (word, weight) in group {
                words.insert(word.to_string(), (emotion.to_string(), weight));
            }
        }

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.5);
        intensifiers.insert("extremely".to_string(), 2.0);
        intensifiers.insert("absolutely".to_string(), 1.8);
        intensifiers.insert("totally".to_string(), 1.6);
        intensifiers.insert("most".to_string(), 1.3);
        intensifiers.insert("so".to_string(), 1.2);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("slightly".to_string(), 0.5);

        Self { words, intensifiers }
    }

    /// Look up the emotion association for a word (lowercased)
    pub fn association(&self, word: &str) -> Option<(&str, f64)> {
        self.words
            .get(&word.to_lowercase())
            .map(|(emotion, weight)| (emotion.as_str(), *weight))
    }

    /// Look up the intensity multiplier for a modifier word
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add or override a word association
    pub fn add_word(&mut self, word: &str, emotion: &str, weight: f64) {
        self.words
            .insert(word.to_lowercase(), (emotion.to_string(), weight));
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words_map_to_their_emotion() {
        let lexicon = EmotionLexicon::new();
        assert_eq!(lexicon.association("outrage").unwrap().0, "anger");
        assert_eq!(lexicon.association("mourns").unwrap().0, "sadness");
        assert_eq!(lexicon.association("bombshell").unwrap().0, "surprise");
        assert_eq!(lexicon.association("celebrates").unwrap().0, "joy");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = EmotionLexicon::new();
        assert_eq!(lexicon.association("OUTRAGE").unwrap().0, "anger");
        assert_eq!(lexicon.association("Panic").unwrap().0, "fear");
    }

    #[test]
    fn test_unknown_word_has_no_association() {
        let lexicon = EmotionLexicon::new();
        assert!(lexicon.association("committee").is_none());
    }

    #[test]
    fn test_intensifiers() {
        let lexicon = EmotionLexicon::new();
        assert!(lexicon.intensifier("extremely").unwrap() > 1.0);
        assert!(lexicon.intensifier("slightly").unwrap() < 1.0);
        assert!(lexicon.intensifier("committee").is_none());
    }

    #[test]
    fn test_add_word_overrides() {
        let mut lexicon = EmotionLexicon::new();
        lexicon.add_word("committee", "fear", 0.4);
        assert_eq!(lexicon.association("committee").unwrap(), ("fear", 0.4));
    }

    #[test]
    fn test_labels_are_in_lexical_order() {
        let mut sorted = EMOTION_LABELS;
        sorted.sort_unstable();
        assert_eq!(sorted, EMOTION_LABELS);
    }
}
