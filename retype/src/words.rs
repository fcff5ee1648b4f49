//! The flat list of words the user has to type, addressed by [WordId].

use derive_more::Deref;

use crate::WordId;

/// Every real word of a snippet in document order
///
/// Indentation and line breaks are not part of the list, so the index of a word is exactly the
/// number of Space/Enter keystrokes needed to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct WordList(Vec<String>);

impl WordList {
    /// Splits a snippet on whitespace into its words
    ///
    /// # Examples
    ///
    /// ```rust
    /// use retype::WordList;
    ///
    /// let words = WordList::new("if (true) {\n  if (bar) {\n    return 'foo'\n  }\n}");
    /// assert_eq!(words.len(), 10);
    /// assert_eq!(words.word(7), Some("'foo'"));
    /// ```
    pub fn new(snippet: &str) -> Self {
        Self(snippet.split_whitespace().map(str::to_owned).collect())
    }

    /// Get a word by its id
    pub fn word(&self, word_id: WordId) -> Option<&str> {
        self.0.get(word_id).map(String::as_str)
    }

    /// Get the length of a word in characters, or 0 if it doesn't exist
    pub fn word_len(&self, word_id: WordId) -> usize {
        self.word(word_id).map_or(0, |word| word.chars().count())
    }

    /// Get the id of the final word
    pub fn last_id(&self) -> Option<WordId> {
        self.0.len().checked_sub(1)
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snippet() {
        assert!(WordList::new("").is_empty());
        assert!(WordList::new(" \n \n").is_empty());
        assert_eq!(WordList::new("").last_id(), None);
    }

    #[test]
    fn test_indentation_is_not_indexed() {
        let words = WordList::new("\nif (true) {\n  if (bar) {\n    return 'foo'\n  }\n}\n    ");
        let expected = [
            "if", "(true)", "{", "if", "(bar)", "{", "return", "'foo'", "}", "}",
        ];
        assert_eq!(words.iter().map(String::as_str).collect::<Vec<_>>(), expected);
        assert_eq!(words.last_id(), Some(9));
    }

    #[test]
    fn test_word_len_counts_characters() {
        let words = WordList::new("café 🚀🚀");
        assert_eq!(words.word_len(0), 4);
        assert_eq!(words.word_len(1), 2);
        assert_eq!(words.word_len(2), 0);
    }
}
