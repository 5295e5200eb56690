// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// question-answering pipeline works with.
//
// Rules for this layer:
//   - NO network calls or file I/O
//   - NO ranking logic (that's Layer 5)
//   - Only data types, the error taxonomy, and the traits
//     external collaborators implement
//
// Think of this layer as the vocabulary of the system:
// it defines what a query, a paragraph, or a tagged sentence IS.

// Query keywords, paragraphs, and paired sentences
pub mod evidence;

// Answer types, outcomes, and pipeline diagnostics
pub mod answer;

// Recoverable pipeline failures
pub mod error;

// Collaborator abstractions (evidence source, tagger, dictionary)
pub mod traits;
