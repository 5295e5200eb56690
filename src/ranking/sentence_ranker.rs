// ============================================================
// Layer 5 — Sentence Ranker
// ============================================================
// Works on the sentences of the selected evidence, each paired
// with its tagged form:
//
//   Step A — Entity filter: a sentence passes iff its tagged
//            form has a token carrying the target tag.
//   Step B — Score: number of DISTINCT query terms present in
//            the plain sentence. Repeating one keyword five
//            times still scores 1.
//   Step C — single_match: exactly one sentence passed.
//   Step D — Rank by score (stable on index) and keep every
//            sentence tied at the top score.
//
// Sentences that fail the filter are recorded with score 0 but
// never enter the candidate set, so "nothing carries the tag"
// (empty selection) stays distinct from "tagged sentences
// matched no keyword" (selection at score 0).

use std::collections::{BTreeMap, HashSet};

use crate::data::keywords::KeywordExtractor;
use crate::domain::answer::Diagnostics;
use crate::domain::evidence::{Query, SentencePair};
use crate::ranking::tagged::carries_tag;

/// How the winning sentences are chosen from the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Every leading sentence sharing the highest score.
    #[default]
    MaxScoreGroup,
}

impl SelectionPolicy {
    /// Apply the policy to a ranking (best first). Returns the
    /// selected indices and the top score.
    pub fn select(&self, ranked: &[(usize, usize)]) -> (Vec<usize>, usize) {
        match self {
            SelectionPolicy::MaxScoreGroup => {
                let Some(&(_, max_score)) = ranked.first() else {
                    return (Vec::new(), 0);
                };
                let group = ranked
                    .iter()
                    .take_while(|(_, s)| *s == max_score)
                    .map(|(i, _)| *i)
                    .collect();
                (group, max_score)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct SentenceRanker {
    policy: SelectionPolicy,
}

/// Output of the sentence stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRanking {
    /// One flag per pair, in pair order.
    pub entity_filter: Vec<bool>,
    /// Score per sentence index; filtered-out sentences hold 0.
    pub scores:        BTreeMap<usize, usize>,
    /// Selected indices, top score, and the single-match flag.
    pub diagnostics:   Diagnostics,
}

impl SentenceRanking {
    /// Number of sentences that passed the entity filter.
    pub fn qualifying(&self) -> usize {
        self.entity_filter.iter().filter(|b| **b).count()
    }

    /// Selected plain sentences, terminator re-appended, in
    /// ranked order.
    pub fn selected_text(&self, pairs: &[SentencePair]) -> String {
        self.diagnostics
            .selected
            .iter()
            .filter_map(|idx| pairs.iter().find(|p| p.index == *idx))
            .map(SentencePair::with_terminator)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SentenceRanker {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Step A: one flag per pair.
    pub fn entity_filter(pairs: &[SentencePair], target_tag: &str) -> Vec<bool> {
        pairs.iter().map(|p| carries_tag(&p.tagged, target_tag)).collect()
    }

    /// Step B: distinct query terms present in the sentence.
    /// Words get the same cleaning as query terms (lowercase,
    /// ASCII punctuation removed), so "Mumbai," matches "mumbai"
    /// and "O'Neil" matches "oneil".
    pub fn score_sentence(plain: &str, query: &Query) -> usize {
        let cleaned = KeywordExtractor::new().clean(plain);
        let words: HashSet<&str> = cleaned
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();

        query
            .terms()
            .iter()
            .filter(|t| words.contains(t.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn process(
        &self,
        pairs:      &[SentencePair],
        query:      &Query,
        target_tag: &str,
    ) -> SentenceRanking {
        let entity_filter = Self::entity_filter(pairs, target_tag);
        tracing::debug!("Entity filter: {:?}", entity_filter);

        let mut scores     = BTreeMap::new();
        let mut candidates = BTreeMap::new();
        for (pair, passes) in pairs.iter().zip(&entity_filter) {
            if *passes {
                let s = Self::score_sentence(&pair.plain, query);
                tracing::debug!("Sentence {}: score = {}", pair.index, s);
                scores.insert(pair.index, s);
                candidates.insert(pair.index, s);
            } else {
                scores.insert(pair.index, 0);
            }
        }

        let qualifying = candidates.len();
        tracing::info!("Scored {} sentences containing {}", qualifying, target_tag);

        let mut ranked: Vec<(usize, usize)> = candidates.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        tracing::info!("Top sentence scores: {:?}", &ranked[..ranked.len().min(5)]);

        let (selected, max_score) = self.policy.select(&ranked);
        tracing::info!(
            "Found {} sentences with max score {}",
            selected.len(),
            max_score
        );

        SentenceRanking {
            entity_filter,
            scores,
            diagnostics: Diagnostics {
                selected,
                max_score,
                single_match: qualifying == 1,
            },
        }
    }
}
