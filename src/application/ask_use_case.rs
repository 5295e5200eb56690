// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Answers one question at a time:
//   1. Classify the question (or take the caller's answer type)
//   2. Pick the answer strategy
//   3a. Abbreviation → dictionary lookup
//   3b. Ranked extraction → retrieve, extract keywords, rank,
//       tag, extract; fall back to the evidence text when an
//       exact answer is not justified
//
// All per-question state lives inside `answer`; nothing carries
// over to the next question.

use anyhow::Result;

use crate::application::config::QaConfig;
use crate::data::keywords::KeywordExtractor;
use crate::domain::answer::{AnswerType, Diagnostics, Outcome};
use crate::domain::error::PipelineError;
use crate::domain::evidence::Paragraph;
use crate::domain::traits::{AbbreviationLookup, EntityTagger, EvidenceSource};
use crate::infra::{
    abbreviations::AbbreviationDictionary,
    answer_log::AnswerLog,
    tagger::HttpEntityTagger,
    web_search::WebSearchSource,
};
use crate::data::loader::SnippetFileLoader;
use crate::ranking::{
    abbreviation::AbbreviationResolver,
    classifier::QuestionClassifier,
    pipeline::RankingPipeline,
    strategy::AnswerStrategy,
};

/// Answer plus what the ranker saw, for logging and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskResult {
    pub answer_type: AnswerType,
    pub outcome:     Outcome,
    pub diagnostics: Diagnostics,
}

pub struct AskUseCase {
    evidence:      Box<dyn EvidenceSource>,
    tagger:        Box<dyn EntityTagger>,
    abbreviations: Box<dyn AbbreviationLookup>,
    classifier:    QuestionClassifier,
    keywords:      KeywordExtractor,
    resolver:      AbbreviationResolver,
    pipeline:      RankingPipeline,
    answer_log:    Option<AnswerLog>,
}

impl AskUseCase {
    /// Wire up the real collaborators from config. With
    /// `snippets`, evidence is read from that file instead of
    /// the web.
    pub fn from_config(cfg: &QaConfig, snippets: Option<&str>) -> Result<Self> {
        let evidence: Box<dyn EvidenceSource> = match snippets {
            Some(path) => Box::new(SnippetFileLoader::new(path)),
            None => Box::new(WebSearchSource::new(
                cfg.search_url.clone(),
                &cfg.user_agent,
                cfg.request_timeout(),
                cfg.max_search_results,
            )?),
        };
        let tagger = HttpEntityTagger::new(
            cfg.ner_url.clone(),
            cfg.request_timeout(),
            cfg.tagger_retries,
        )?;
        let abbreviations = AbbreviationDictionary::load(&cfg.abbr_file)?;

        let mut use_case = Self::new(
            cfg,
            evidence,
            Box::new(tagger),
            Box::new(abbreviations),
        );
        if let Some(path) = &cfg.answer_log {
            let log = AnswerLog::new(path)?;
            tracing::info!("Logging answers to '{}'", log.csv_path().display());
            use_case.answer_log = Some(log);
        }
        Ok(use_case)
    }

    /// Build with explicit collaborators.
    pub fn new(
        cfg:           &QaConfig,
        evidence:      Box<dyn EvidenceSource>,
        tagger:        Box<dyn EntityTagger>,
        abbreviations: Box<dyn AbbreviationLookup>,
    ) -> Self {
        Self {
            evidence,
            tagger,
            abbreviations,
            classifier: QuestionClassifier::new(),
            keywords:   KeywordExtractor::new(),
            resolver:   AbbreviationResolver::new(),
            pipeline:   RankingPipeline::new(cfg.top_paragraphs),
            answer_log: None,
        }
    }

    /// Answer a question. Never fails on bad or missing
    /// evidence; those become `Outcome`s.
    pub fn answer(&self, question: &str, answer_type: Option<AnswerType>) -> AskResult {
        let question = question.trim();
        tracing::info!("Processing question: {}", question);

        let answer_type = answer_type.unwrap_or_else(|| self.classifier.classify(question));
        tracing::info!("Answer type: {}", answer_type);

        let (outcome, diagnostics) = match AnswerStrategy::for_answer_type(&answer_type) {
            AnswerStrategy::Abbreviation => (self.resolve_abbreviation(question), Diagnostics::default()),
            AnswerStrategy::RankedExtraction => self.rank_and_extract(question, &answer_type),
        };

        if let Some(log) = &self.answer_log {
            if let Err(e) = log.log(question, &answer_type, &diagnostics, &outcome) {
                tracing::warn!("Cannot write answer log: {e:#}");
            }
        }

        AskResult { answer_type, outcome, diagnostics }
    }

    fn resolve_abbreviation(&self, question: &str) -> Outcome {
        tracing::info!("Processing abbreviation...");
        match self.resolver.resolve(question, self.abbreviations.as_ref()) {
            Some(full) => Outcome::Answer(full),
            None => Outcome::NoAnswer,
        }
    }

    fn rank_and_extract(&self, question: &str, answer_type: &AnswerType) -> (Outcome, Diagnostics) {
        tracing::info!("Retrieving evidence...");
        let snippets = match self.evidence.fetch(question) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to retrieve evidence: {e:#}");
                Vec::new()
            }
        };
        let paragraphs = Paragraph::from_snippets(&snippets);

        let query = self.keywords.extract(question);
        if query.is_empty() {
            tracing::warn!("Question has no keywords; every paragraph scores 0");
        } else {
            tracing::info!("Query keywords ({}): {:?}", query.len(), query.terms());
        }

        let report = match self.pipeline.rank_and_extract(
            &paragraphs,
            &query,
            answer_type.label(),
            self.tagger.as_ref(),
        ) {
            Ok(report) => report,
            Err(PipelineError::NoEvidence) => {
                tracing::error!("{}", PipelineError::NoEvidence);
                return (Outcome::NoAnswer, Diagnostics::default());
            }
            Err(e) => {
                // Tagging failed: the ranked paragraphs are still useful.
                tracing::warn!("{e}; returning relevant information");
                let evidence = self.pipeline.top_evidence(&paragraphs, &query);
                return (relevant_information(evidence), Diagnostics::default());
            }
        };

        for w in &report.warnings {
            tracing::warn!("{w}");
        }
        tracing::debug!(
            "Selected {} of {} sentences: {}",
            report.diagnostics.selected.len(),
            report.pairs.len(),
            report.selected_text
        );

        let diagnostics = report.diagnostics.clone();
        if !diagnostics.permits_extraction() {
            tracing::info!("Returning relevant information (single sentence or no score)");
            return (relevant_information(report.evidence), diagnostics);
        }

        match report.answer {
            Some(answer) => {
                tracing::info!("Answer found: {}", answer);
                (Outcome::Answer(answer), diagnostics)
            }
            None => {
                tracing::warn!("Exact answer not found. Returning relevant information.");
                (relevant_information(report.evidence), diagnostics)
            }
        }
    }
}

fn relevant_information(evidence: String) -> Outcome {
    if evidence.trim().is_empty() {
        Outcome::NoAnswer
    } else {
        Outcome::RelevantInformation(evidence)
    }
}
