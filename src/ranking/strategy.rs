// ============================================================
// Layer 5 — Answer Strategy
// ============================================================
// The closed set of ways a question can be answered. The answer
// type alone picks the strategy; adding a new answer path means
// adding a variant here, not touching the rankers.

use crate::domain::answer::AnswerType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStrategy {
    /// Dictionary lookup, no retrieval or ranking.
    Abbreviation,
    /// Retrieve, rank paragraphs and sentences, extract a span.
    RankedExtraction,
}

impl AnswerStrategy {
    pub fn for_answer_type(answer_type: &AnswerType) -> Self {
        match answer_type {
            AnswerType::Abbreviation => AnswerStrategy::Abbreviation,
            _ => AnswerStrategy::RankedExtraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_selects_lookup() {
        assert_eq!(
            AnswerStrategy::for_answer_type(&AnswerType::Abbreviation),
            AnswerStrategy::Abbreviation
        );
    }

    #[test]
    fn test_everything_else_is_ranked() {
        for t in [
            AnswerType::Person,
            AnswerType::Date,
            AnswerType::Description,
            AnswerType::Other("ORGANIZATION".into()),
        ] {
            assert_eq!(AnswerStrategy::for_answer_type(&t), AnswerStrategy::RankedExtraction);
        }
    }
}
