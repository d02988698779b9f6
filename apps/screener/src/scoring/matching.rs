//! Term matching primitive shared by the skill, certification and career-keyword rules.
//!
//! Default: `SubstringMatcher` (loose; "java" matches "javascript").
//! Alternative: `TokenMatcher` (whole tokens only), bound at scorer construction.

/// Decides whether a term occurs in a text. Callers pass lower-cased input.
pub trait TermMatcher: Send + Sync {
    fn contains(&self, text: &str, term: &str) -> bool;

    /// Either string occurs in the other.
    fn overlaps(&self, a: &str, b: &str) -> bool {
        self.contains(a, b) || self.contains(b, a)
    }

    /// Label for logs and reports.
    fn name(&self) -> &'static str;
}

/// Plain substring containment. An empty term is contained in everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TermMatcher for SubstringMatcher {
    fn contains(&self, text: &str, term: &str) -> bool {
        text.contains(term)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Matches only when the term's tokens appear as a contiguous run of the text's tokens.
/// Tokens are alphanumeric runs; `+` and `#` stay attached so "c++" and "c#" survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl TermMatcher for TokenMatcher {
    fn contains(&self, text: &str, term: &str) -> bool {
        let needle = tokenize(term);
        if needle.is_empty() {
            return false;
        }
        let haystack = tokenize(text);
        haystack.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_is_loose() {
        let m = SubstringMatcher;
        assert!(m.contains("javascript", "java"));
        assert!(m.overlaps("react", "reactjs"));
        assert!(m.overlaps("reactjs", "react"));
        assert!(!m.overlaps("css", "html"));
    }

    #[test]
    fn test_substring_empty_term_matches() {
        assert!(SubstringMatcher.contains("anything", ""));
    }

    #[test]
    fn test_token_rejects_partial_words() {
        let m = TokenMatcher;
        assert!(!m.contains("javascript", "java"));
        assert!(m.contains("java, spring boot", "java"));
        assert!(m.contains("aws certified developer", "certified developer"));
        assert!(!m.contains("aws certified developer", "developer certified"));
    }

    #[test]
    fn test_token_keeps_symbols() {
        let m = TokenMatcher;
        assert!(m.contains("c++ and c#", "c++"));
        assert!(m.contains("c++ and c#", "c#"));
        assert!(!m.contains("c++", "c"));
    }

    #[test]
    fn test_token_empty_term_never_matches() {
        assert!(!TokenMatcher.contains("anything", "  "));
    }
}
