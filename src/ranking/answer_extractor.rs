// ============================================================
// Layer 5 — Answer Extractor
// ============================================================
// Walks the tokens of a tagged sentence and returns the first
// contiguous run carrying the target tag.
//
//   SEEKING    + token tagged target  → keep word, COLLECTING
//   SEEKING    + anything else        → SEEKING
//   COLLECTING + token tagged target  → keep word
//   COLLECTING + untagged token       → keep token verbatim
//   COLLECTING + token, other tag     → DONE
//   end of tokens in COLLECTING       → DONE
//
// Example (target LOCATION):
//   "New/LOCATION York/LOCATION is/O big/O"  →  "New York"
//
// The batch form tries the ranked sentences in order and
// returns the first non-empty span.

use crate::domain::evidence::SentencePair;
use crate::ranking::tagged::tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    Collecting,
    Done,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerExtractor;

impl AnswerExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the target-tag span from one tagged sentence.
    pub fn extract(&self, tagged_sentence: &str, target_tag: &str) -> Option<String> {
        let mut state  = State::Seeking;
        let mut buffer: Vec<&str> = Vec::new();

        for token in tokens(tagged_sentence) {
            state = match (state, token.tag) {
                (State::Seeking, Some(tag)) if tag == target_tag => {
                    buffer.push(token.word);
                    State::Collecting
                }
                (State::Seeking, _) => State::Seeking,
                (State::Collecting, Some(tag)) if tag == target_tag => {
                    buffer.push(token.word);
                    State::Collecting
                }
                (State::Collecting, None) => {
                    buffer.push(token.word);
                    State::Collecting
                }
                (State::Collecting, Some(_)) | (State::Done, _) => State::Done,
            };
            if state == State::Done {
                break;
            }
        }

        let answer = buffer
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if answer.is_empty() {
            None
        } else {
            Some(answer)
        }
    }

    /// Try the selected sentences in ranked order; first span wins.
    ///
    /// Indices with no matching pair are skipped, which covers a
    /// tagged list shorter than the plain one.
    pub fn extract_from_selection(
        &self,
        pairs:      &[SentencePair],
        selected:   &[usize],
        target_tag: &str,
    ) -> Option<String> {
        for idx in selected {
            let Some(pair) = pairs.iter().find(|p| p.index == *idx) else {
                tracing::warn!("Selected sentence {} has no tagged counterpart", idx);
                continue;
            };
            if let Some(answer) = self.extract(&pair.tagged, target_tag) {
                tracing::info!("Found answer in sentence {}: {}", idx, answer);
                return Some(answer);
            }
        }
        tracing::info!("No {} span in {} selected sentences", target_tag, selected.len());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_span() {
        let e = AnswerExtractor::new();
        assert_eq!(
            e.extract("He/O was/O born/O in/O Mumbai/LOCATION ./O", "LOCATION"),
            Some("Mumbai".to_string())
        );
    }

    #[test]
    fn test_contiguous_run_is_merged() {
        let e = AnswerExtractor::new();
        assert_eq!(
            e.extract("New/LOCATION York/LOCATION is/O big/O", "LOCATION"),
            Some("New York".to_string())
        );
    }

    #[test]
    fn test_untagged_connector_is_kept() {
        let e = AnswerExtractor::new();
        assert_eq!(
            e.extract("on/O 24/DATE April/DATE of 1973/DATE in/O Mumbai/LOCATION", "DATE"),
            Some("24 April of 1973".to_string())
        );
    }

    #[test]
    fn test_stops_at_different_tag() {
        let e = AnswerExtractor::new();
        assert_eq!(
            e.extract("Sachin/PERSON Tendulkar/PERSON met/O Rahul/PERSON", "PERSON"),
            Some("Sachin Tendulkar".to_string())
        );
    }

    #[test]
    fn test_no_target_tag() {
        let e = AnswerExtractor::new();
        assert_eq!(e.extract("He/O was/O born/O", "LOCATION"), None);
        assert_eq!(e.extract("", "LOCATION"), None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let e = AnswerExtractor::new();
        let s = "In/O 1998/DATE ,/O Delhi/LOCATION";
        assert_eq!(e.extract(s, "DATE"), e.extract(s, "DATE"));
    }

    #[test]
    fn test_batch_returns_first_non_empty_in_ranked_order() {
        let e = AnswerExtractor::new();
        let pairs = vec![
            SentencePair::new(0, "Born in Mumbai", "Born/O in/O Mumbai/LOCATION"),
            SentencePair::new(3, "No place here", "No/O place/O here/O"),
            SentencePair::new(5, "Lives in Delhi", "Lives/O in/O Delhi/LOCATION"),
        ];
        assert_eq!(
            e.extract_from_selection(&pairs, &[3, 5, 0], "LOCATION"),
            Some("Delhi".to_string())
        );
    }

    #[test]
    fn test_batch_skips_missing_indices() {
        let e = AnswerExtractor::new();
        let pairs = vec![SentencePair::new(0, "x", "Paris/LOCATION")];
        assert_eq!(
            e.extract_from_selection(&pairs, &[9, 0], "LOCATION"),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn test_batch_with_nothing_selected() {
        let e = AnswerExtractor::new();
        assert_eq!(e.extract_from_selection(&[], &[], "LOCATION"), None);
    }
}
