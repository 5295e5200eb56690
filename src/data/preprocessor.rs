// ============================================================
// Layer 4 — Snippet Preprocessor
// ============================================================
// Cleans snippet text scraped from search result pages before
// it is scored or sent to the tagging service.
//
// Scraped snippets often contain:
//   - Leftover HTML tags and stray angle brackets
//   - Wikipedia-style reference markers like [1] or [...]
//   - Unterminated HTML entities (&nbsp, &quot, &amp, #39)
//   - Runs of periods from "..." ellipses, which would create
//     empty sentences when the text is split on '.'
//   - Non-ASCII debris and odd whitespace
//
// Cleaning steps (applied in order):
//   1. Remove tags, reference markers, and angle brackets
//   2. Collapse period runs to a single period
//   3. Decode or drop the common entities
//   4. Keep only the allowed printable character set
//   5. Collapse whitespace

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]*>").unwrap());
static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[0-9]+\]").unwrap());
static PERIOD_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());
static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^a-zA-Z0-9/\\\-%#@()!$:^`~&|*"',\[\]=+._ ;?]"#).unwrap()
});

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean one scraped snippet. May return an empty string,
    /// which callers drop.
    pub fn clean_snippet(&self, text: &str) -> String {
        // ── Step 1: Markup and reference debris ──────────────────────────────
        let s = TAG_RE.replace_all(text, "");
        let s = REFERENCE_RE.replace_all(&s, "");
        let s = s
            .replace("[...]", "")
            .replace("more>", "")
            .replace(['<', '>'], "");

        // ── Step 2: Ellipses ─────────────────────────────────────────────────
        let s = PERIOD_RUN_RE.replace_all(&s, ".");

        // ── Step 3: Entities ─────────────────────────────────────────────────
        // Snippets frequently carry entities without the closing ';'.
        // &amp goes last so "&amp;quot" does not decode twice.
        let s = s
            .replace("&#39;", "'")
            .replace("#39", "")
            .replace("&middot;", "")
            .replace("&middot", "")
            .replace("&nbsp;", " ")
            .replace("&nbsp", " ")
            .replace("&quot;", "\"")
            .replace("&quot", "\"")
            .replace("&amp;", "&")
            .replace("&amp", "&");

        // ── Step 4: Allowed character set ────────────────────────────────────
        // Whitespace is mapped to a space first so words separated
        // by a newline or tab stay separated.
        let s: String = s
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        let s = DISALLOWED_RE.replace_all(&s, "");

        // ── Step 5: Whitespace ───────────────────────────────────────────────
        self.normalise_whitespace(&s)
    }

    /// Map invisible and control characters to spaces, then
    /// collapse every whitespace run to one space and trim.
    pub fn normalise_whitespace(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_references() {
        let p = Preprocessor::new();
        assert_eq!(
            p.clean_snippet("<b>Sachin</b> Tendulkar[1] scored <em>100</em> runs[23]"),
            "Sachin Tendulkar scored 100 runs"
        );
    }

    #[test]
    fn test_collapses_ellipses() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_snippet("born in 1973... in Mumbai"), "born in 1973. in Mumbai");
    }

    #[test]
    fn test_decodes_common_entities() {
        let p = Preprocessor::new();
        assert_eq!(
            p.clean_snippet("Tom&nbspand&nbsp;Jerry &quot;cats&quot; &amp dogs"),
            "Tom and Jerry \"cats\" & dogs"
        );
        assert_eq!(p.clean_snippet("it&#39;s"), "it's");
    }

    #[test]
    fn test_drops_disallowed_characters() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_snippet("caf\u{e9} \u{2022} menu"), "caf menu");
    }

    #[test]
    fn test_newlines_become_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_snippet("line one\n\nline\ttwo"), "line one line two");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_snippet(""), "");
        assert_eq!(p.clean_snippet("<br/>"), "");
    }

    #[test]
    fn test_normalise_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.normalise_whitespace("  hello\u{00A0}\u{00A0}world\x01 "), "hello world");
    }
}
