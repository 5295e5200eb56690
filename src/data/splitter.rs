// ============================================================
// Layer 4 — Sentence Splitter and Pairing
// ============================================================
// The evidence blob is split into sentences on '.', and the
// tagging service's reply is split on the same character. The
// two lists are then zipped into SentencePair records so the
// rest of the pipeline never indexes two parallel lists.
//
//   plain:  "He was born in Mumbai. He played cricket."
//   tagged: "He/O was/O born/O in/O Mumbai/LOCATION ./O He/O ..."
//       │
//       ▼
//   [ SentencePair { index: 0, plain: "He was born in Mumbai",
//                    tagged: "He/O was/O born/O in/O Mumbai/LOCATION " },
//     SentencePair { index: 1, ... } ]
//
// If the tagger normalised the text differently and the counts
// disagree, pairing keeps the common prefix and reports the
// mismatch instead of failing.

use crate::domain::error::PipelineError;
use crate::domain::evidence::{SentencePair, SENTENCE_TERMINATOR};

/// Split text on the sentence terminator. Empty pieces are kept
/// so plain and tagged splits stay position-for-position.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATOR).collect()
}

/// Pairing result plus the mismatch, if the counts differed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub pairs:    Vec<SentencePair>,
    pub mismatch: Option<PipelineError>,
}

/// Zip plain and tagged sentences into pairs.
///
/// Positions past the end of either list are skipped, and pairs
/// whose plain text is blank are dropped; surviving pairs keep
/// their split position as `index`.
pub fn pair_sentences(plain_text: &str, tagged_text: &str) -> Pairing {
    let plain  = split_sentences(plain_text);
    let tagged = split_sentences(tagged_text);

    let mismatch = if plain.len() != tagged.len() {
        tracing::warn!(
            "Tagged sentence count ({}) differs from plain count ({}); \
             pairing the first {}",
            tagged.len(),
            plain.len(),
            plain.len().min(tagged.len()),
        );
        Some(PipelineError::AlignmentMismatch {
            plain:  plain.len(),
            tagged: tagged.len(),
        })
    } else {
        None
    };

    let pairs = plain
        .iter()
        .zip(tagged.iter())
        .enumerate()
        .filter(|(_, (p, _))| !p.trim().is_empty())
        .map(|(i, (p, t))| SentencePair::new(i, p.trim(), t.trim()))
        .collect();

    Pairing { pairs, mismatch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_positions() {
        assert_eq!(split_sentences("a. b.c"), vec!["a", " b", "c"]);
        assert_eq!(split_sentences("a."), vec!["a", ""]);
    }

    #[test]
    fn test_pairs_aligned_sentences() {
        let p = pair_sentences(
            "He was born in Mumbai. He plays cricket.",
            "He/O was/O born/O in/O Mumbai/LOCATION . He/O plays/O cricket/O .",
        );
        assert!(p.mismatch.is_none());
        assert_eq!(p.pairs.len(), 2);
        assert_eq!(p.pairs[0].index, 0);
        assert_eq!(p.pairs[0].plain, "He was born in Mumbai");
        assert_eq!(p.pairs[0].tagged, "He/O was/O born/O in/O Mumbai/LOCATION");
        assert_eq!(p.pairs[1].index, 1);
    }

    #[test]
    fn test_mismatch_truncates_to_shorter_list() {
        let p = pair_sentences("One. Two. Three.", "One/O . Two/O");
        assert_eq!(
            p.mismatch,
            Some(PipelineError::AlignmentMismatch { plain: 4, tagged: 2 })
        );
        assert_eq!(p.pairs.len(), 2);
        assert_eq!(p.pairs[1].plain, "Two");
    }

    #[test]
    fn test_blank_sentences_are_dropped_but_indices_kept() {
        let p = pair_sentences("A.. B", "A/O .. B/O");
        assert_eq!(p.pairs.len(), 2);
        assert_eq!(p.pairs[0].index, 0);
        assert_eq!(p.pairs[1].index, 2);
    }
}
