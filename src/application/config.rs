// ============================================================
// Layer 2 — Engine Configuration
// ============================================================
// Every tunable the engine reads. Serialisable so it can be
// kept in a JSON file and layered under CLI flags:
//
//   defaults → --config file.json → flags / QA_* env vars
//
// The #[serde(default)] attribute lets a config file name only
// the fields it wants to change.

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

use crate::ranking::paragraph_ranker::DEFAULT_TOP_PARAGRAPHS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    /// Paragraphs kept after ranking
    pub top_paragraphs:       usize,
    /// Snippets taken from one search results page
    pub max_search_results:   usize,
    /// Timeout for each network call, in seconds
    pub request_timeout_secs: u64,
    /// Extra attempts after a failed tagging call
    pub tagger_retries:       u32,
    /// Entity tagging service endpoint
    pub ner_url:              String,
    /// Search results page endpoint
    pub search_url:           String,
    pub user_agent:           String,
    /// Abbreviation dictionary file
    pub abbr_file:            PathBuf,
    /// CSV file receiving one row per answered question
    pub answer_log:           Option<PathBuf>,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            top_paragraphs:       DEFAULT_TOP_PARAGRAPHS,
            max_search_results:   10,
            request_timeout_secs: 30,
            tagger_retries:       1,
            ner_url:              "http://nlp.stanford.edu:8080/ner/".to_string(),
            search_url:           "https://www.google.com/search".to_string(),
            user_agent:
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            abbr_file:            PathBuf::from("data/abbreviations.txt"),
            answer_log:           None,
        }
    }
}

impl QaConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = QaConfig::default();
        assert_eq!(c.top_paragraphs, 4);
        assert_eq!(c.request_timeout(), Duration::from_secs(30));
        assert!(c.answer_log.is_none());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let c: QaConfig = serde_json::from_str(r#"{ "top_paragraphs": 2 }"#).unwrap();
        assert_eq!(c.top_paragraphs, 2);
        assert_eq!(c.max_search_results, 10);
    }
}
