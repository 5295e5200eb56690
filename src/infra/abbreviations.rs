// ============================================================
// Layer 6 — Abbreviation Dictionary
// ============================================================
// Loads the abbreviation → full form table once per process.
//
// File format, one entry per line:
//
//   NASA<sep>National Aeronautics and Space Administration
//
// where <sep> is the cp1252 em dash (byte 0x97, which decodes
// to U+0097 here) or a real em dash U+2014. Files that are not
// valid UTF-8 are decoded one byte per char so the 0x97 byte
// survives. Lines without a separator are ignored.

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::traits::AbbreviationLookup;

const SEPARATORS: [char; 2] = ['\u{0097}', '\u{2014}'];

#[derive(Debug, Clone, Default)]
pub struct AbbreviationDictionary {
    entries: HashMap<String, String>,
}

impl AbbreviationDictionary {
    /// Load the dictionary. A missing file gives an empty
    /// dictionary so the rest of the engine still works.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Abbreviation file not found: {}", path.display());
            return Ok(Self::default());
        }

        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read abbreviation file '{}'", path.display()))?;
        let text = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
        };

        let dict = Self::parse(&text);
        if dict.is_empty() {
            tracing::warn!("No abbreviations found in {}", path.display());
        } else {
            tracing::info!("Loaded {} abbreviations", dict.len());
        }
        Ok(dict)
    }

    /// Parse dictionary text already in memory.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let (abbr, full) = line.split_once(SEPARATORS)?;
                let abbr = abbr.trim().to_uppercase();
                let full = full.trim();
                if abbr.is_empty() || full.is_empty() {
                    None
                } else {
                    Some((abbr, full.to_string()))
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AbbreviationLookup for AbbreviationDictionary {
    fn full_form(&self, abbreviation: &str) -> Option<String> {
        self.entries.get(&abbreviation.trim().to_uppercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> AbbreviationDictionary {
        AbbreviationDictionary::parse(
            "NASA\u{0097}National Aeronautics and Space Administration\n\
             HTML\u{0097}HyperText Markup Language\n\
             cpu \u{2014} Central Processing Unit\n\
             no separator here\n",
        )
    }

    #[test]
    fn test_get_full_form() {
        let d = sample();
        assert_eq!(d.len(), 3);
        assert_eq!(
            d.full_form("NASA").as_deref(),
            Some("National Aeronautics and Space Administration")
        );
        assert_eq!(d.full_form("HTML").as_deref(), Some("HyperText Markup Language"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let d = sample();
        assert_eq!(d.full_form(" html ").as_deref(), Some("HyperText Markup Language"));
        assert_eq!(d.full_form("CPU").as_deref(), Some("Central Processing Unit"));
    }

    #[test]
    fn test_unknown_abbreviation() {
        assert_eq!(sample().full_form("XYZ"), None);
    }

    #[test]
    fn test_loads_cp1252_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"AI\x97Artificial Intelligence\nCPU\x97Central Processing Unit\n")
            .unwrap();
        let d = AbbreviationDictionary::load(f.path()).unwrap();
        assert_eq!(d.full_form("ai").as_deref(), Some("Artificial Intelligence"));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let d = AbbreviationDictionary::load(dir.path().join("missing.txt")).unwrap();
        assert!(d.is_empty());
    }
}
