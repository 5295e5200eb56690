// ============================================================
// Layer 4 — Snippet File Loader
// ============================================================
// Reads evidence snippets from a local text file instead of the
// web. The file format is the one the web retriever would have
// produced: one paragraph per block, blocks separated by a
// blank line.
//
//   Sachin Tendulkar scored his first century at Old Trafford.
//
//   Tendulkar was born in Mumbai.
//
// Handy for offline runs and for replaying a fixed snippet set
// so the ranking result is reproducible.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::traits::EvidenceSource;

/// Loads snippets from a blank-line separated text file.
/// Implements the EvidenceSource trait from Layer 3.
pub struct SnippetFileLoader {
    path: PathBuf,
}

impl SnippetFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EvidenceSource for SnippetFileLoader {
    /// The question is ignored: the file already holds the
    /// snippets retrieved for it.
    fn fetch(&self, _question: &str) -> Result<Vec<String>> {
        // A missing file is "no evidence", not a crash.
        if !self.path.exists() {
            tracing::warn!(
                "Snippet file '{}' does not exist; returning no evidence",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read snippet file '{}'", self.path.display()))?;

        let prep = Preprocessor::new();
        let snippets = split_blocks(&content)
            .into_iter()
            .map(|block| prep.normalise_whitespace(&block))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        tracing::info!(
            "Loaded {} snippets from '{}'",
            snippets.len(),
            self.path.display()
        );
        Ok(snippets)
    }
}

/// Split text into blocks separated by one or more blank lines.
fn split_blocks(content: &str) -> Vec<String> {
    let mut blocks  = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_blank_line_separated_blocks() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "first   para\nstill first\n\n\n second para \r\n\nthird").unwrap();

        let snippets = SnippetFileLoader::new(f.path()).fetch("ignored").unwrap();
        assert_eq!(
            snippets,
            vec!["first para still first", "second para", "third"]
        );
    }

    #[test]
    fn test_missing_file_is_empty_evidence() {
        let dir = tempfile::tempdir().unwrap();
        let loader = SnippetFileLoader::new(dir.path().join("nope.txt"));
        assert!(loader.fetch("q").unwrap().is_empty());
    }

    #[test]
    fn test_split_blocks_ignores_leading_blank_lines() {
        assert_eq!(split_blocks("\n\na\nb\n\nc\n"), vec!["a\nb", "c"]);
    }
}
