// ============================================================
// Layer 4 — Text Data Pipeline
// ============================================================
// Everything that turns raw text into the units the ranking
// stages score:
//
//   snippets (web or file)
//       │
//       ▼
//   SnippetFileLoader → reads paragraphs from a local file
//       │
//       ▼
//   Preprocessor      → strips markup and entity debris
//       │
//       ▼
//   KeywordExtractor  → question → ordered query keywords
//       │
//       ▼
//   splitter          → evidence blob → paired sentences
//
// Each module is responsible for exactly one step.

/// Loads blank-line separated snippets from a file
pub mod loader;

/// Cleans scraped snippet text
pub mod preprocessor;

/// Extracts query keywords from a question
pub mod keywords;

/// Splits evidence into sentences and pairs them with tagged text
pub mod splitter;
