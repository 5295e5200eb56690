// ============================================================
// Layer 3 — Collaborator Traits
// ============================================================
// The pipeline never talks to the web, the tagging service, or
// the abbreviation file directly. It talks to these traits, and
// Layer 6 (infra) supplies the real implementations:
//
//   EvidenceSource      → SnippetFileLoader, WebSearchSource
//   EntityTagger        → HttpEntityTagger
//   AbbreviationLookup  → AbbreviationDictionary
//
// Tests plug in small in-memory implementations instead.

use anyhow::Result;

// ─── EvidenceSource ───────────────────────────────────────────────────────────
/// Anything that can supply raw text snippets for a question.
pub trait EvidenceSource {
    /// Return snippets in retrieval order. An empty Vec means
    /// nothing was found; an Err means the source itself failed.
    fn fetch(&self, question: &str) -> Result<Vec<String>>;
}

// ─── EntityTagger ─────────────────────────────────────────────────────────────
/// Anything that can annotate text as `word/TAG` tokens.
///
/// The returned text must keep the sentence terminators of the
/// input so it can be split the same way.
pub trait EntityTagger {
    fn tag(&self, text: &str) -> Result<String>;
}

// ─── AbbreviationLookup ───────────────────────────────────────────────────────
/// Anything that can expand an abbreviation to its full form.
pub trait AbbreviationLookup {
    /// Case-insensitive lookup. `None` when unknown.
    fn full_form(&self, abbreviation: &str) -> Option<String>;
}
