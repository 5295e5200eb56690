// ============================================================
// Layer 6 — Web Search Evidence Source
// ============================================================
// Fetches a search results page for the question and scrapes
// the result snippets out of it.
//
//   GET <search_url>?q=<question>   (User-Agent from config)
//       │
//       ▼
//   <span class="VwiC3b">Sachin Tendulkar was born in …</span>
//       │  scraper selectors over known snippet classes,
//       │  falling back to a scan for <span class="st">
//       ▼
//   Preprocessor::clean_snippet → Vec<String>
//
// Snippet markup changes over time, so several class names are
// tried and the first page layout that yields text wins.

use anyhow::{Context, Result};
use std::time::Duration;

use scraper::{Html, Selector};

use crate::data::preprocessor::Preprocessor;
use crate::domain::traits::EvidenceSource;

const SNIPPET_CLASSES: [&str; 5] = ["st", "VwiC3b", "yXK7lf", "MUxGbd", "yDYNvb"];
const MIN_SNIPPET_CHARS: usize = 20;
const LEGACY_SNIPPET_OPEN: &str = "<span class=\"st\">";

pub struct WebSearchSource {
    client:      reqwest::blocking::Client,
    search_url:  String,
    max_results: usize,
}

impl WebSearchSource {
    pub fn new(
        search_url:  impl Into<String>,
        user_agent:  &str,
        timeout:     Duration,
        max_results: usize,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Cannot build HTTP client for web search")?;
        Ok(Self {
            client,
            search_url: search_url.into(),
            max_results,
        })
    }

    fn fetch_page(&self, question: &str) -> Result<String> {
        tracing::info!("Fetching search results for: {}", question);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", question)])
            .send()
            .with_context(|| format!("Search request to '{}' failed", self.search_url))?
            .error_for_status()
            .context("Search engine returned an error status")?;

        tracing::info!("Fetched search results (status: {})", response.status());
        response.text().context("Cannot read search results page")
    }
}

impl EvidenceSource for WebSearchSource {
    fn fetch(&self, question: &str) -> Result<Vec<String>> {
        let html = self.fetch_page(question)?;

        let prep = Preprocessor::new();
        let snippets: Vec<String> = extract_snippets(&html, self.max_results)
            .iter()
            .map(|s| prep.clean_snippet(s))
            .filter(|s| !s.is_empty())
            .collect();

        tracing::info!("Extracted {} snippets", snippets.len());
        Ok(snippets)
    }
}

/// Pull raw snippet texts out of a results page, at most
/// `max_results` of them.
pub fn extract_snippets(html: &str, max_results: usize) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut snippets = Vec::new();

    for class in SNIPPET_CLASSES {
        let Ok(sel) = Selector::parse(&format!("span.{class}")) else {
            continue;
        };
        for el in doc.select(&sel) {
            let text = el.text().collect::<String>();
            if text.trim().len() > MIN_SNIPPET_CHARS {
                snippets.push(text);
            }
        }
    }

    if snippets.is_empty() {
        snippets = scan_legacy_snippets(html, max_results);
        tracing::debug!("Legacy scan found {} snippets", snippets.len());
    }

    snippets.truncate(max_results);
    snippets
}

/// Scan raw HTML for `<span class="st">…</span>` blocks. Inner
/// markup is left in place for the preprocessor to strip.
fn scan_legacy_snippets(html: &str, max_results: usize) -> Vec<String> {
    let mut out  = Vec::new();
    let mut rest = html;

    while out.len() < max_results {
        let Some(start) = rest.find(LEGACY_SNIPPET_OPEN) else { break };
        let body = &rest[start + LEGACY_SNIPPET_OPEN.len()..];
        let Some(end) = body.find("</span>") else { break };
        if end > 0 {
            out.push(body[..end].to_string());
        }
        rest = &body[end..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_snippet_classes() {
        let html = r#"<html><body>
            <div><span class="VwiC3b">Sachin Tendulkar was born in Mumbai in 1973.</span></div>
            <div><span class="VwiC3b">short</span></div>
            <div><span class="yDYNvb">He scored his first Test century at Old Trafford.</span></div>
            <span class="other">Not a snippet even though it is long enough.</span>
        </body></html>"#;
        let s = extract_snippets(html, 10);
        assert_eq!(
            s,
            vec![
                "Sachin Tendulkar was born in Mumbai in 1973.",
                "He scored his first Test century at Old Trafford.",
            ]
        );
    }

    #[test]
    fn test_respects_max_results() {
        let html = r#"<span class="st">first snippet with enough text</span>
                      <span class="st">second snippet with enough text</span>"#;
        assert_eq!(extract_snippets(html, 1).len(), 1);
    }

    #[test]
    fn test_legacy_scan() {
        let html = r#"x<span class="st">one <b>bold</b></span>y<span class="st">two</span>"#;
        assert_eq!(scan_legacy_snippets(html, 10), vec!["one <b>bold</b>", "two"]);
        assert_eq!(scan_legacy_snippets(html, 1).len(), 1);
    }

    #[test]
    fn test_page_without_snippets() {
        assert!(extract_snippets("<html><body>nothing</body></html>", 10).is_empty());
    }
}
