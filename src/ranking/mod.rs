// ============================================================
// Layer 5 — Ranking and Extraction
// ============================================================
// The algorithmic core. Given the retrieved paragraphs, the
// query keywords, and the expected answer type, it narrows the
// evidence down stage by stage:
//
//   QuestionClassifier → which entity tag the answer must carry
//   ParagraphRanker    → top-K paragraphs by keyword frequency
//   SentenceRanker     → entity-filtered sentences by distinct
//                        keyword coverage, max-score group kept
//   AnswerExtractor    → first target-tag span in the first
//                        selected sentence that has one
//
// Abbreviation questions take the AbbreviationResolver path
// instead; AnswerStrategy makes that choice.

/// Rule-based answer-type classification
pub mod classifier;

/// `word/TAG` token parsing shared by the filter and extractor
pub mod tagged;

/// Paragraph scoring, ranking, and top-K selection
pub mod paragraph_ranker;

/// Entity filter and distinct-keyword sentence scoring
pub mod sentence_ranker;

/// Tagged-token state machine that pulls out the answer span
pub mod answer_extractor;

/// Dictionary lookup path for abbreviation questions
pub mod abbreviation;

/// Chooses between the ranking path and the abbreviation path
pub mod strategy;

/// Composes the rankers and the extractor into one call
pub mod pipeline;
