//! Normalized quote value with its validation rule.

use serde::{Deserialize, Serialize};

/// A quote with text and author, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Validates a raw provider payload pair into a `Quote`.
    ///
    /// Returns `None` when either field is empty after trimming. Every
    /// quote feed applies this same predicate, so a payload that fails it
    /// is handled exactly like a malformed response.
    pub fn normalized(text: &str, author: &str) -> Option<Self> {
        let text = text.trim();
        let author = author.trim();
        if text.is_empty() || author.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            author: author.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_surrounding_whitespace() {
        let quote = Quote::normalized("  stay curious \n", "\tAnonymous ").unwrap();
        assert_eq!(quote.text, "stay curious");
        assert_eq!(quote.author, "Anonymous");
    }

    #[test]
    fn normalized_rejects_empty_text() {
        assert!(Quote::normalized("", "Someone").is_none());
        assert!(Quote::normalized("   ", "Someone").is_none());
    }

    #[test]
    fn normalized_rejects_empty_author() {
        assert!(Quote::normalized("words of wisdom", "").is_none());
        assert!(Quote::normalized("words of wisdom", " \n").is_none());
    }
}
