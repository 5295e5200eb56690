// ============================================================
// Layer 5 — Ranking Pipeline
// ============================================================
// One call that runs the ranking core end to end:
//
//   paragraphs ──ParagraphRanker──▶ evidence blob
//        evidence ──EntityTagger──▶ tagged blob   (one call)
//   (evidence, tagged) ──pair_sentences──▶ SentencePair list
//        pairs ──SentenceRanker──▶ Diagnostics
//        pairs + selected ──AnswerExtractor──▶ Option<answer>
//
// Hard stops come back as Err (NoEvidence, TaggingUnavailable).
// Softer problems (alignment mismatch, no qualifying sentence,
// no extractable span) are listed in `warnings` next to the
// result so the caller can pick its fallback.

use crate::data::splitter::pair_sentences;
use crate::domain::answer::Diagnostics;
use crate::domain::error::PipelineError;
use crate::domain::evidence::{Paragraph, Query, SentencePair};
use crate::domain::traits::EntityTagger;
use crate::ranking::answer_extractor::AnswerExtractor;
use crate::ranking::paragraph_ranker::ParagraphRanker;
use crate::ranking::sentence_ranker::SentenceRanker;

/// Everything the ranking core learned about one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingReport {
    /// Top-K paragraphs joined; the fallback text.
    pub evidence:       String,
    /// Selected sentences, terminators re-appended.
    pub selected_text:  String,
    pub pairs:          Vec<SentencePair>,
    pub diagnostics:    Diagnostics,
    pub answer:         Option<String>,
    pub warnings:       Vec<PipelineError>,
}

#[derive(Default)]
pub struct RankingPipeline {
    paragraphs: ParagraphRanker,
    sentences:  SentenceRanker,
    extractor:  AnswerExtractor,
}

impl RankingPipeline {
    pub fn new(top_paragraphs: usize) -> Self {
        Self {
            paragraphs: ParagraphRanker::new(top_paragraphs),
            sentences:  SentenceRanker::default(),
            extractor:  AnswerExtractor::new(),
        }
    }

    /// Top-K paragraphs joined, without tagging. Used as the
    /// fallback text when the tagger is unavailable.
    pub fn top_evidence(&self, paragraphs: &[Paragraph], query: &Query) -> String {
        self.paragraphs
            .process(paragraphs, query)
            .map(|selection| selection.evidence())
            .unwrap_or_default()
    }

    pub fn rank_and_extract(
        &self,
        paragraphs: &[Paragraph],
        query:      &Query,
        target_tag: &str,
        tagger:     &dyn EntityTagger,
    ) -> Result<RankingReport, PipelineError> {
        tracing::info!("[1/3] Scoring paragraphs (keeping top {})...", self.paragraphs.top_k());
        let selection = self.paragraphs.process(paragraphs, query)?;
        tracing::debug!("Paragraph ranking: {:?}", selection.ranked);
        let evidence  = selection.evidence();

        tracing::info!("[2/3] Tagging and scoring sentences...");
        let tagged = tagger
            .tag(&evidence)
            .map_err(|e| PipelineError::TaggingUnavailable(format!("{e:#}")))?;
        if tagged.trim().is_empty() && !evidence.trim().is_empty() {
            return Err(PipelineError::TaggingUnavailable(
                "tagger returned empty text".to_string(),
            ));
        }

        let mut warnings = Vec::new();
        let pairing = pair_sentences(&evidence, &tagged);
        warnings.extend(pairing.mismatch);
        let pairs = pairing.pairs;

        let ranking = self.sentences.process(&pairs, query, target_tag);
        tracing::debug!("Sentence scores: {:?}", ranking.scores);
        if ranking.qualifying() == 0 {
            warnings.push(PipelineError::NoQualifyingSentence);
        }

        tracing::info!("[3/3] Extracting answer...");
        let answer = self.extractor.extract_from_selection(
            &pairs,
            &ranking.diagnostics.selected,
            target_tag,
        );
        if answer.is_none() {
            warnings.push(PipelineError::NoExtractableSpan);
        }

        Ok(RankingReport {
            selected_text: ranking.selected_text(&pairs),
            evidence,
            pairs,
            diagnostics: ranking.diagnostics,
            answer,
            warnings,
        })
    }
}
