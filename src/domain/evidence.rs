// ============================================================
// Layer 3 — Evidence Domain Types
// ============================================================
// The units of text the ranking stages pass between each other:
//
//   Query         → ordered keywords taken from the question
//   Paragraph     → one retrieved snippet with a stable index
//   SentencePair  → a plain sentence and its tagged counterpart,
//                   produced together so their indices can never
//                   drift apart
//
// None of these types change after construction.

use serde::{Deserialize, Serialize};

/// Character that ends a sentence in both plain and tagged text.
pub const SENTENCE_TERMINATOR: char = '.';

/// Separator placed between paragraphs when they are joined
/// into a single evidence blob.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Ordered, lowercase query keywords.
///
/// Duplicates are kept on purpose: a term asked about twice
/// counts twice when paragraphs are scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Build a query from terms, lowercasing each one.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.into().to_lowercase()).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// A retrieved block of text.
///
/// `index` is the position at which the snippet first appeared
/// in the retrieved set and is never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: usize,
    pub text:  String,
}

impl Paragraph {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self { index, text: text.into() }
    }

    /// Turn raw snippets into paragraphs, skipping blank ones.
    /// Indices follow the snippet positions, so a skipped blank
    /// leaves a gap rather than shifting later paragraphs.
    pub fn from_snippets<S: AsRef<str>>(snippets: &[S]) -> Vec<Paragraph> {
        snippets
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.as_ref().trim().is_empty())
            .map(|(i, s)| Paragraph::new(i, s.as_ref()))
            .collect()
    }
}

/// A sentence carried together with its entity-tagged form.
///
/// `index` is the sentence's position in the split of the
/// evidence blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub index:  usize,
    pub plain:  String,
    pub tagged: String,
}

impl SentencePair {
    pub fn new(index: usize, plain: impl Into<String>, tagged: impl Into<String>) -> Self {
        Self {
            index,
            plain:  plain.into(),
            tagged: tagged.into(),
        }
    }

    /// Plain text with the terminator put back.
    pub fn with_terminator(&self) -> String {
        format!("{}{}", self.plain.trim(), SENTENCE_TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_lowercases_and_keeps_duplicates() {
        let q = Query::new(["Sachin", "sachin", "Century"]);
        assert_eq!(q.terms(), &["sachin", "sachin", "century"]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_paragraph_indices_survive_blank_snippets() {
        let paras = Paragraph::from_snippets(&["first", "  ", "third"]);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].index, 0);
        assert_eq!(paras[1].index, 2);
    }

    #[test]
    fn test_with_terminator() {
        let p = SentencePair::new(0, " He was born in Mumbai ", "");
        assert_eq!(p.with_terminator(), "He was born in Mumbai.");
    }
}
