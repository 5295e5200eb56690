// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands (`ask`, `batch`, `interactive`,
// `config init`) and the service flags they share.
//
// Service flags override the config file, which overrides the
// built-in defaults:
//
//   QaConfig::default() → --config file.json → flags / QA_* env
//
// clap's `env` feature lets every service flag also come from
// an environment variable.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::config::QaConfig;
use crate::domain::answer::AnswerType;
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer one question
    Ask(AskArgs),

    /// Answer every question in a file, one per line
    Batch(BatchArgs),

    /// Read questions from stdin until quit/exit/q
    Interactive,

    /// Manage the JSON config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Text file with one question per line
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the default config as pretty JSON
    Init {
        #[arg(long, default_value = "qa.json")]
        path: PathBuf,
    },
}

/// Flags shared by every command that answers questions.
#[derive(Args, Debug, Default)]
pub struct ServiceArgs {
    /// JSON config file layered under these flags
    #[arg(long, global = true, env = "QA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read evidence from this file (paragraphs separated by
    /// blank lines) instead of the web
    #[arg(long, global = true)]
    pub snippets: Option<String>,

    /// Entity tagging service endpoint
    #[arg(long, global = true, env = "QA_NER_URL")]
    pub ner_url: Option<String>,

    /// Search results page endpoint
    #[arg(long, global = true, env = "QA_SEARCH_URL")]
    pub search_url: Option<String>,

    /// Paragraphs kept after ranking
    #[arg(long, global = true, env = "QA_TOP_PARAGRAPHS")]
    pub top_paragraphs: Option<usize>,

    /// Timeout for each network call, in seconds
    #[arg(long, global = true, env = "QA_REQUEST_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Abbreviation dictionary file
    #[arg(long, global = true, env = "QA_ABBR_FILE")]
    pub abbr_file: Option<PathBuf>,

    #[arg(long, global = true, env = "QA_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Append one CSV row per answered question to this file
    #[arg(long, global = true)]
    pub answer_log: Option<PathBuf>,

    /// Skip classification and use this answer type
    /// (PERSON, LOCATION, DATE, NUM, ENTY, DESC, ABBR, or any tag)
    #[arg(long, global = true)]
    pub answer_type: Option<String>,
}

impl ServiceArgs {
    /// Build the effective config: defaults, then the config
    /// file, then any flag that was given.
    pub fn resolve(&self) -> Result<QaConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::new(path).load()?,
            None => QaConfig::default(),
        };

        if let Some(v) = &self.ner_url        { cfg.ner_url = v.clone(); }
        if let Some(v) = &self.search_url     { cfg.search_url = v.clone(); }
        if let Some(v) = self.top_paragraphs  { cfg.top_paragraphs = v; }
        if let Some(v) = self.timeout         { cfg.request_timeout_secs = v; }
        if let Some(v) = &self.abbr_file      { cfg.abbr_file = v.clone(); }
        if let Some(v) = &self.user_agent     { cfg.user_agent = v.clone(); }
        if let Some(v) = &self.answer_log     { cfg.answer_log = Some(v.clone()); }

        Ok(cfg)
    }

    pub fn answer_type(&self) -> Option<AnswerType> {
        self.answer_type
            .as_deref()
            .map(|label| AnswerType::from_label(&label.trim().to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cfg = ServiceArgs::default().resolve().unwrap();
        assert_eq!(cfg, QaConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        std::fs::write(&path, r#"{ "top_paragraphs": 7, "ner_url": "http://file/ner" }"#).unwrap();

        let args = ServiceArgs {
            config: Some(path),
            ner_url: Some("http://flag/ner".into()),
            timeout: Some(5),
            ..Default::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.top_paragraphs, 7);
        assert_eq!(cfg.ner_url, "http://flag/ner");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.search_url, QaConfig::default().search_url);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = ServiceArgs {
            config: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_answer_type_override() {
        let args = ServiceArgs { answer_type: Some("location".into()), ..Default::default() };
        assert_eq!(args.answer_type(), Some(AnswerType::Location));
        assert_eq!(ServiceArgs::default().answer_type(), None);
    }
}
