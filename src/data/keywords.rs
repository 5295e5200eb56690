// ============================================================
// Layer 4 — Keyword Extractor
// ============================================================
// Turns a raw question into the ordered list of content words
// used to score paragraphs and sentences.
//
//   "Where did Sachin Tendulkar score his first century?"
//       │ lowercase
//       │ strip ASCII punctuation
//       │ split on whitespace
//       │ drop English stopwords
//       ▼
//   ["sachin", "tendulkar", "score", "first", "century"]
//
// Order follows the question and duplicates are kept, because
// the paragraph ranker counts frequency per query term.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::domain::evidence::Query;

/// Standard English stopword list (the NLTK corpus list).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Extracts query keywords from questions. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase and strip ASCII punctuation.
    pub fn clean(&self, question: &str) -> String {
        question
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect()
    }

    /// Build the query for a question.
    pub fn extract(&self, question: &str) -> Query {
        let cleaned = self.clean(question);
        let terms: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|token| !STOPWORDS.contains(token))
            .collect();

        tracing::debug!("Query keywords: {:?}", terms);
        Query::new(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_punctuation() {
        let k = KeywordExtractor::new();
        assert_eq!(k.clean("Who is the president?"), "who is the president");
    }

    #[test]
    fn test_removes_stopwords_in_order() {
        let q = KeywordExtractor::new().extract("Where did Sachin Tendulkar score his first century?");
        assert_eq!(q.terms(), &["sachin", "tendulkar", "score", "first", "century"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let q = KeywordExtractor::new().extract("Paris, paris or PARIS?");
        assert_eq!(q.terms(), &["paris", "paris", "paris"]);
    }

    #[test]
    fn test_empty_question() {
        assert!(KeywordExtractor::new().extract("").is_empty());
    }

    #[test]
    fn test_question_with_only_stopwords() {
        assert!(KeywordExtractor::new().extract("is the a an").is_empty());
    }

    #[test]
    fn test_apostrophes_are_stripped_before_stopword_check() {
        // "didn't" becomes "didnt", which is not a listed stopword.
        let q = KeywordExtractor::new().extract("Why didn't it rain?");
        assert_eq!(q.terms(), &["didnt", "rain"]);
    }
}
