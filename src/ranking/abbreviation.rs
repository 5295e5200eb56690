// ============================================================
// Layer 5 — Abbreviation Resolver
// ============================================================
// Abbreviation questions skip retrieval and ranking entirely:
// pull the abbreviation out of the question and look it up.
//
//   "what is the full form of NASA?"  → "NASA" → dictionary
//   "what does HTML stand for?"       → "HTML" → dictionary
//   "expand CPU please"               → "CPU"  → dictionary
//
// Patterns are tried on the question with spaces removed,
// matching "of<ABBR>" first and "does<ABBR>stand" second; the
// last resort is the first word written in capitals.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::traits::AbbreviationLookup;

static OF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)of([A-Z]+)\??").unwrap());
static DOES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)does([A-Z]+)stand").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct AbbreviationResolver;

impl AbbreviationResolver {
    pub fn new() -> Self {
        Self
    }

    /// Find the abbreviation a question asks about.
    pub fn extract_abbreviation(&self, question: &str) -> Option<String> {
        let compact: String = question.chars().filter(|c| *c != ' ').collect();

        if compact.contains("of") {
            if let Some(c) = OF_RE.captures(&compact) {
                return Some(c[1].to_string());
            }
        }
        if compact.contains("does") {
            if let Some(c) = DOES_RE.captures(&compact) {
                return Some(c[1].to_string());
            }
        }

        let caps = question
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .find(|w| w.len() >= 2 && w.chars().all(|c| c.is_ascii_uppercase()))
            .map(str::to_string);

        if caps.is_none() {
            tracing::warn!("Could not extract abbreviation from: {}", question);
        }
        caps
    }

    /// Expand the abbreviation in `question`, if both the
    /// abbreviation and its entry can be found.
    pub fn resolve(&self, question: &str, dictionary: &dyn AbbreviationLookup) -> Option<String> {
        let abbr = self.extract_abbreviation(question)?;
        tracing::info!("Extracted abbreviation: {}", abbr);

        let full = dictionary.full_form(&abbr);
        match &full {
            Some(f) => tracing::info!("Found abbreviation: {} -> {}", abbr.to_uppercase(), f),
            None => tracing::warn!("Abbreviation not found: {}", abbr.to_uppercase()),
        }
        full
    }
}
