// ============================================================
// Layer 3 — Answer Domain Types
// ============================================================
// AnswerType  — the entity category a question expects. Its
//               label is matched verbatim against the tags the
//               entity tagging service attaches to tokens.
// Diagnostics — what the sentence ranker saw, so the caller can
//               decide whether an exact answer is worth trying.
// Outcome     — what the user finally gets back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected answer category for a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerType {
    Person,
    Location,
    Date,
    Number,
    Entity,
    Description,
    Abbreviation,
    /// Any other tag label, passed through unchanged.
    Other(String),
}

impl AnswerType {
    /// The tag label as it appears in tagged text (`word/LABEL`).
    pub fn label(&self) -> &str {
        match self {
            AnswerType::Person       => "PERSON",
            AnswerType::Location     => "LOCATION",
            AnswerType::Date         => "DATE",
            AnswerType::Number       => "NUM",
            AnswerType::Entity       => "ENTY",
            AnswerType::Description  => "DESC",
            AnswerType::Abbreviation => "ABBR",
            AnswerType::Other(label) => label,
        }
    }

    /// Parse a label; unknown labels become `Other` untouched.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "PERSON"   => AnswerType::Person,
            "LOCATION" => AnswerType::Location,
            "DATE"     => AnswerType::Date,
            "NUM"      => AnswerType::Number,
            "ENTY"     => AnswerType::Entity,
            "DESC"     => AnswerType::Description,
            "ABBR"     => AnswerType::Abbreviation,
            other      => AnswerType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The sentence ranker's view of the evidence.
///
/// `single_match` is true iff exactly one sentence carried the
/// target tag; the caller reads that as too little evidence to
/// pick an exact answer from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub selected:     Vec<usize>,
    pub max_score:    usize,
    pub single_match: bool,
}

impl Diagnostics {
    /// Whether an exact-span extraction should be attempted.
    pub fn permits_extraction(&self) -> bool {
        self.max_score != 0 && !self.single_match
    }
}

/// Final result for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// An extracted or looked-up answer string.
    Answer(String),
    /// No exact answer; the most relevant evidence text instead.
    RelevantInformation(String),
    NoAnswer,
}

impl Outcome {
    /// Short label used in the answer log.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Answer(_)              => "answer",
            Outcome::RelevantInformation(_) => "relevant_information",
            Outcome::NoAnswer               => "no_answer",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Answer(a)              => write!(f, "Answer: {a}"),
            Outcome::RelevantInformation(t) => write!(f, "Relevant information:\n{t}"),
            Outcome::NoAnswer               => f.write_str("Sorry, I couldn't find an answer."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trips_known_types() {
        for t in [AnswerType::Person, AnswerType::Location, AnswerType::Abbreviation] {
            assert_eq!(AnswerType::from_label(t.label()), t);
        }
    }

    #[test]
    fn test_unknown_label_is_kept_verbatim() {
        let t = AnswerType::from_label("ORGANIZATION");
        assert_eq!(t, AnswerType::Other("ORGANIZATION".to_string()));
        assert_eq!(t.label(), "ORGANIZATION");
    }

    #[test]
    fn test_extraction_gate() {
        let mut d = Diagnostics { selected: vec![0], max_score: 2, single_match: false };
        assert!(d.permits_extraction());
        d.single_match = true;
        assert!(!d.permits_extraction());
        d.single_match = false;
        d.max_score = 0;
        assert!(!d.permits_extraction());
    }

    #[test]
    fn test_outcome_rendering() {
        assert_eq!(Outcome::Answer("Mumbai".into()).to_string(), "Answer: Mumbai");
        assert!(Outcome::RelevantInformation("x".into())
            .to_string()
            .starts_with("Relevant information:"));
    }
}
