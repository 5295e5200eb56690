// ============================================================
// Layer 5 — Question Classifier
// ============================================================
// Decides which entity category the answer must belong to,
// using the wording of the question:
//
//   "full form" / "stands for" / "acronym" ...  → ABBR
//   who    → PERSON       where → LOCATION      when → DATE
//   how many/much/long/far/old                  → NUM
//   what / which                                → ENTY
//     (… "definition" or "mean" in it)          → DESC
//   why, yes/no openers, anything else          → DESC

use crate::domain::answer::AnswerType;

const ABBREVIATION_CUES: [&str; 5] =
    ["full form", "stands for", "stand for", "acronym", "abbreviation"];
const QUANTITY_WORDS: [&str; 5] = ["many", "much", "long", "far", "old"];

#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionClassifier;

impl QuestionClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, question: &str) -> AnswerType {
        let q = question.trim().to_lowercase();

        if ABBREVIATION_CUES.iter().any(|cue| q.contains(cue)) {
            return AnswerType::Abbreviation;
        }

        let words: Vec<&str> = q
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
            .collect();

        let answer_type = match words.as_slice() {
            [] => {
                tracing::warn!("Empty question provided");
                AnswerType::Description
            }
            ["who", ..]   => AnswerType::Person,
            ["where", ..] => AnswerType::Location,
            ["when", ..]  => AnswerType::Date,
            ["how", second, ..] if QUANTITY_WORDS.contains(second) => AnswerType::Number,
            ["what" | "which", ..] => {
                if q.contains("definition") || q.contains("mean") {
                    AnswerType::Description
                } else {
                    AnswerType::Entity
                }
            }
            _ => AnswerType::Description,
        };

        tracing::info!("Classified question as {}", answer_type);
        answer_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(q: &str) -> AnswerType {
        QuestionClassifier::new().classify(q)
    }

    #[test]
    fn test_wh_words() {
        assert_eq!(classify("Who is the president of India?"), AnswerType::Person);
        assert_eq!(classify("Where was Sachin Tendulkar born?"), AnswerType::Location);
        assert_eq!(classify("When did India win the world cup?"), AnswerType::Date);
    }

    #[test]
    fn test_how_questions() {
        assert_eq!(classify("How many states are in India?"), AnswerType::Number);
        assert_eq!(classify("How old is the Taj Mahal"), AnswerType::Number);
        assert_eq!(classify("How does a rocket fly?"), AnswerType::Description);
        assert_eq!(classify("how"), AnswerType::Description);
    }

    #[test]
    fn test_what_questions() {
        assert_eq!(classify("What is the capital of France?"), AnswerType::Entity);
        assert_eq!(classify("What does serendipity mean?"), AnswerType::Description);
        assert_eq!(classify("Which is the definition of gravity?"), AnswerType::Description);
    }

    #[test]
    fn test_abbreviation_cues_take_priority() {
        assert_eq!(classify("What is the full form of NASA?"), AnswerType::Abbreviation);
        assert_eq!(classify("what does HTML stand for"), AnswerType::Abbreviation);
    }

    #[test]
    fn test_defaults_to_description() {
        assert_eq!(classify(""), AnswerType::Description);
        assert_eq!(classify("Is the earth round?"), AnswerType::Description);
        assert_eq!(classify("Why is the sky blue?"), AnswerType::Description);
    }
}
