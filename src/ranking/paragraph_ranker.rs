// ============================================================
// Layer 5 — Paragraph Ranker
// ============================================================
// Scores every retrieved paragraph by how often the query
// keywords occur in it, then keeps the K best.
//
//   score(p) = Σ over query terms t of
//              count of whitespace tokens in lowercase(p) == t
//
// Scores are raw counts, not normalised by length. Paragraphs
// with score 0 are still ranked. Ties keep the original
// paragraph order (stable sort on index order).
//
// The selected paragraphs are joined, separator preserved, into
// the evidence blob the sentence stage tags and splits.

use std::collections::BTreeMap;

use crate::domain::error::PipelineError;
use crate::domain::evidence::{Paragraph, Query, PARAGRAPH_SEPARATOR};

/// Default number of paragraphs kept.
pub const DEFAULT_TOP_PARAGRAPHS: usize = 4;

pub struct ParagraphRanker {
    top_k: usize,
}

/// Output of the paragraph stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphSelection {
    /// Every scored paragraph as (index, score), best first.
    pub ranked:   Vec<(usize, usize)>,
    /// The top-K paragraphs in ranked order.
    pub selected: Vec<Paragraph>,
}

impl ParagraphSelection {
    /// Selected paragraph texts joined into one evidence blob.
    pub fn evidence(&self) -> String {
        self.selected
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR)
    }
}

impl ParagraphRanker {
    /// `top_k` of 0 is treated as 1 so a non-empty paragraph
    /// set always yields some evidence.
    pub fn new(top_k: usize) -> Self {
        Self { top_k: top_k.max(1) }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Keyword frequency score of one paragraph.
    pub fn score_paragraph(text: &str, query: &Query) -> usize {
        let lower = text.to_lowercase();
        lower
            .split_whitespace()
            .map(|token| query.terms().iter().filter(|term| *term == token).count())
            .sum()
    }

    /// Score every paragraph, keyed by paragraph index.
    pub fn score(&self, paragraphs: &[Paragraph], query: &Query) -> BTreeMap<usize, usize> {
        paragraphs
            .iter()
            .map(|p| {
                let s = Self::score_paragraph(&p.text, query);
                tracing::debug!("Paragraph {}: score = {}", p.index, s);
                (p.index, s)
            })
            .collect()
    }

    /// Sort by score descending; equal scores stay in index order.
    pub fn rank(&self, scores: &BTreeMap<usize, usize>) -> Vec<(usize, usize)> {
        let mut ranked: Vec<(usize, usize)> = scores.iter().map(|(&i, &s)| (i, s)).collect();
        // sort_by is stable and BTreeMap iterates by ascending index.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Keep the first K entries (all of them if there are fewer).
    pub fn select_top_k<'a>(&self, ranked: &'a [(usize, usize)]) -> &'a [(usize, usize)] {
        &ranked[..ranked.len().min(self.top_k)]
    }

    /// Score, rank, and select. An empty paragraph set is
    /// `NoEvidence`, which ends the question.
    pub fn process(
        &self,
        paragraphs: &[Paragraph],
        query:      &Query,
    ) -> Result<ParagraphSelection, PipelineError> {
        if paragraphs.is_empty() {
            tracing::error!("No paragraphs to score");
            return Err(PipelineError::NoEvidence);
        }

        tracing::info!("Scoring {} paragraphs", paragraphs.len());
        let scores = self.score(paragraphs, query);
        let ranked = self.rank(&scores);
        tracing::info!("Top paragraph scores: {:?}", &ranked[..ranked.len().min(5)]);

        let selected = self
            .select_top_k(&ranked)
            .iter()
            .filter_map(|(idx, _)| paragraphs.iter().find(|p| p.index == *idx).cloned())
            .collect::<Vec<_>>();

        tracing::info!("Selected top {} paragraphs", selected.len());
        Ok(ParagraphSelection { ranked, selected })
    }
}

impl Default for ParagraphRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_PARAGRAPHS)
    }
}
