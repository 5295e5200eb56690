// ============================================================
// Layer 5 — Tagged Token Parsing
// ============================================================
// The tagging service writes every token as `word/TAG`, e.g.
//
//   He/O was/O born/O in/O Mumbai/LOCATION
//
// A token counts as tagged only when the text after its last
// '/' looks like a tag label (an uppercase letter followed by
// uppercase letters, digits, '_' or '-'). Anything else, such
// as "and/or" or "1/2", is an untagged word.

/// One whitespace-separated unit of tagged text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub word: &'a str,
    pub tag:  Option<&'a str>,
}

impl<'a> TaggedToken<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token.rsplit_once('/') {
            Some((word, tag)) if is_tag_label(tag) => Self { word, tag: Some(tag) },
            _ => Self { word: token, tag: None },
        }
    }

    pub fn has_tag(&self, label: &str) -> bool {
        self.tag == Some(label)
    }
}

fn is_tag_label(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Iterate the tokens of a tagged sentence.
pub fn tokens(tagged: &str) -> impl Iterator<Item = TaggedToken<'_>> {
    tagged.split_whitespace().map(TaggedToken::parse)
}

/// Whether at least one token in `tagged` carries `label`.
pub fn carries_tag(tagged: &str, label: &str) -> bool {
    tokens(tagged).any(|t| t.has_tag(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_word_and_tag() {
        let t = TaggedToken::parse("Mumbai/LOCATION");
        assert_eq!(t.word, "Mumbai");
        assert_eq!(t.tag, Some("LOCATION"));
    }

    #[test]
    fn test_untagged_forms() {
        assert_eq!(TaggedToken::parse("of").tag, None);
        assert_eq!(TaggedToken::parse("and/or").tag, None);
        assert_eq!(TaggedToken::parse("1/2").tag, None);
        assert_eq!(TaggedToken::parse("word/").tag, None);
    }

    #[test]
    fn test_uses_last_slash() {
        let t = TaggedToken::parse("24/7/DATE");
        assert_eq!(t.word, "24/7");
        assert_eq!(t.tag, Some("DATE"));
    }

    #[test]
    fn test_bare_tag_token() {
        // What is left of "./O" after the text was split on '.'.
        let t = TaggedToken::parse("/O");
        assert_eq!(t.word, "");
        assert_eq!(t.tag, Some("O"));
    }

    #[test]
    fn test_carries_tag_is_exact_on_label() {
        assert!(carries_tag("in/O Mumbai/LOCATION", "LOCATION"));
        assert!(!carries_tag("in/O Mumbai/LOCATION", "LOC"));
        assert!(!carries_tag("", "LOCATION"));
    }
}
