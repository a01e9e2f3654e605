//! Word vocabulary built from normalized captions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Start-of-sequence token, always index 0.
pub const SOS_TOKEN: &str = "SOS";
/// End-of-sequence token, always index 1.
pub const EOS_TOKEN: &str = "EOS";

/// Reserved index of [`SOS_TOKEN`].
pub const SOS_INDEX: usize = 0;
/// Reserved index of [`EOS_TOKEN`].
pub const EOS_INDEX: usize = 1;

/// Bidirectional word↔index mapping with occurrence counts.
///
/// Indices are assigned in strict first-occurrence order, left to right,
/// cumulative across [`build_vocab`](Vocab::build_vocab) calls. Words are
/// never removed or reindexed, and the two reserved tokens keep their fixed
/// indices forever. Intended to be built once during data preparation and
/// then treated as immutable by the training stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocab {
    word2index: HashMap<String, usize>,
    index2word: HashMap<usize, String>,
    word2count: HashMap<String, usize>,
    nwords: usize,
}

impl Vocab {
    /// Create a vocabulary holding only the reserved SOS/EOS entries.
    pub fn new() -> Self {
        let mut word2index = HashMap::new();
        word2index.insert(SOS_TOKEN.to_string(), SOS_INDEX);
        word2index.insert(EOS_TOKEN.to_string(), EOS_INDEX);

        let mut index2word = HashMap::new();
        index2word.insert(SOS_INDEX, SOS_TOKEN.to_string());
        index2word.insert(EOS_INDEX, EOS_TOKEN.to_string());

        Self { word2index, index2word, word2count: HashMap::new(), nwords: 2 }
    }

    /// Add every word of `sentence` to the vocabulary.
    ///
    /// Splits on literal single spaces. Unseen words get the next index and a
    /// count of 1; known words only have their count incremented.
    ///
    /// The split is not whitespace-aware: consecutive spaces (or an empty
    /// sentence) produce empty-string tokens, and those enter the vocabulary
    /// like any other word. Callers are expected to run captions through
    /// [`normalize_caption`](crate::text::normalize_caption) first, which
    /// rules that out.
    pub fn build_vocab(&mut self, sentence: &str) {
        for word in sentence.split(' ') {
            if let Some(count) = self.word2count.get_mut(word) {
                *count += 1;
            } else if self.word2index.contains_key(word) {
                // Reserved tokens appearing in text start counting from 1.
                self.word2count.insert(word.to_string(), 1);
            } else {
                self.word2index.insert(word.to_string(), self.nwords);
                self.index2word.insert(self.nwords, word.to_string());
                self.word2count.insert(word.to_string(), 1);
                self.nwords += 1;
            }
        }
    }

    /// Index of `word`, if present.
    pub fn index(&self, word: &str) -> Option<usize> {
        self.word2index.get(word).copied()
    }

    /// Word stored at `index`, if any.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.index2word.get(&index).map(String::as_str)
    }

    /// Occurrence count of `word` across all built sentences.
    ///
    /// Reserved tokens have no count until they appear in a sentence.
    pub fn count(&self, word: &str) -> Option<usize> {
        self.word2count.get(word).copied()
    }

    /// Total number of entries, reserved tokens included.
    pub fn nwords(&self) -> usize {
        self.nwords
    }
}

impl Default for Vocab {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// nwords always equals reserved entries plus distinct words seen.
        #[test]
        fn nwords_tracks_distinct_words(words in proptest::collection::vec("[가-힣]{1,4}", 1..20)) {
            let mut vocab = Vocab::new();
            vocab.build_vocab(&words.join(" "));

            let distinct: std::collections::HashSet<_> = words.iter().collect();
            prop_assert_eq!(vocab.nwords(), 2 + distinct.len());
        }

        /// Indices are contiguous: every index below nwords maps to a word.
        #[test]
        fn indices_are_contiguous(words in proptest::collection::vec("[가-힣]{1,4}", 1..20)) {
            let mut vocab = Vocab::new();
            vocab.build_vocab(&words.join(" "));

            for idx in 0..vocab.nwords() {
                prop_assert!(vocab.word(idx).is_some());
            }
        }
    }
}
