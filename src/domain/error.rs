// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Every failure the ranking pipeline can meet. None of them is
// fatal to the process: the use case turns each one into an
// `Outcome` (raw evidence or "no answer").

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The evidence source returned nothing usable.
    #[error("no evidence retrieved for the question")]
    NoEvidence,

    /// The entity tagging call failed, timed out, or returned
    /// something that is not tagged text.
    #[error("entity tagging unavailable: {0}")]
    TaggingUnavailable(String),

    /// Plain and tagged sentence counts differ.
    #[error("sentence alignment mismatch: {plain} plain vs {tagged} tagged")]
    AlignmentMismatch { plain: usize, tagged: usize },

    /// The entity filter removed every sentence.
    #[error("no sentence carries the target tag")]
    NoQualifyingSentence,

    /// Ranking worked but no selected sentence held a span.
    #[error("no extractable answer span in the selected sentences")]
    NoExtractableSpan,
}
