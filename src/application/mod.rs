// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to answer a question.
//
// Rules for this layer:
//   - No ranking math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct network or file access (that's Layer 6)
//   - Only workflow coordination and fallback decisions

// Tunables and their defaults
pub mod config;

// The question-answering workflow
pub mod ask_use_case;
