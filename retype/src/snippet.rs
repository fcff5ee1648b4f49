//! # Snippet Module - Cached Structure of a Practice Target
//!
//! A [Snippet] derives the tokenized lines and the flat word list from the raw string once, and
//! indexes where every word sits so the key handlers can answer boundary and indentation queries
//! in O(1).
//!
//! ```text
//! Source:    "foo bar\n\n  baz"
//! Lines:     [foo] [bar] | [""] | [⇥] [baz]
//! Words:     0=foo 1=bar 2=baz
//! Locations: 0 → line 0, token 0
//!            1 → line 0, token 1, line end
//!            2 → line 2, token 1, 1 indent, line end
//! ```

use std::ops::Range;

use crate::tokenizer::{Lines, Token, tokenize};
use crate::{WordId, WordList};

/// Where a word lives in the tokenized snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordLocation {
    /// Index of the line containing the word
    pub line: usize,
    /// Index of the word's token within the line
    pub token: usize,
    /// Indentation markers between the previous word on the line (or the line start) and this word
    pub indent_count: usize,
    /// True if this is the last word on its line
    pub is_line_end: bool,
}

/// An immutable practice target
#[derive(Debug, Clone, Default)]
pub struct Snippet {
    raw: String,
    lines: Lines,
    words: WordList,
    /// One location per word, indexed by [WordId]
    locations: Vec<WordLocation>,
    /// Id of the first word of each line, plus the total word count as a final sentinel
    line_starts: Vec<WordId>,
}

impl Snippet {
    /// Parses a snippet
    ///
    /// Never fails: empty or whitespace-only input gives a snippet with no words, for which every
    /// keystroke is ignored.
    pub fn new(snippet: &str) -> Self {
        let lines = tokenize(snippet);
        let words = WordList::new(snippet);

        let mut locations = Vec::with_capacity(words.len());
        let mut line_starts = Vec::with_capacity(lines.len() + 1);

        for (line_index, line) in lines.iter().enumerate() {
            line_starts.push(locations.len());
            let mut indent_count = 0;

            for (token_index, token) in line.iter().enumerate() {
                match token {
                    Token::Indent => indent_count += 1,
                    token if token.is_real_word() => {
                        locations.push(WordLocation {
                            line: line_index,
                            token: token_index,
                            indent_count: std::mem::take(&mut indent_count),
                            is_line_end: false,
                        });
                    }
                    // Empty words only exist for round-tripping whitespace
                    _ => (),
                }
            }

            if let Some(last) = locations.last_mut().filter(|last| last.line == line_index) {
                last.is_line_end = true;
            }
        }
        line_starts.push(locations.len());

        debug_assert_eq!(
            locations.len(),
            words.len(),
            "tokenized words must line up with the flat word list"
        );

        Self {
            raw: snippet.to_string(),
            lines,
            words,
            locations,
            line_starts,
        }
    }

    /// The snippet as it was supplied
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Get a word by its id
    pub fn word(&self, word_id: WordId) -> Option<&str> {
        self.words.word(word_id)
    }

    /// Get the length of a word in characters, or 0 if it doesn't exist
    pub fn word_len(&self, word_id: WordId) -> usize {
        self.words.word_len(word_id)
    }

    /// Get the number of words to type
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there is nothing to type
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn location(&self, word_id: WordId) -> Option<WordLocation> {
        self.locations.get(word_id).copied()
    }

    /// Returns true if the word is the last one on its line
    ///
    /// Unknown words are never at the end of a line.
    pub fn is_end_of_line(&self, word_id: WordId) -> bool {
        self.location(word_id)
            .is_some_and(|location| location.is_line_end)
    }

    /// Get the number of indentation markers directly in front of a word
    pub fn indent_count(&self, word_id: WordId) -> usize {
        self.location(word_id)
            .map_or(0, |location| location.indent_count)
    }

    /// Get the number of line breaks between the lines of two words
    ///
    /// Blank lines between the words are counted as well. Returns 0 if either word is unknown.
    pub fn lines_between(&self, from: WordId, to: WordId) -> usize {
        match (self.location(from), self.location(to)) {
            (Some(from), Some(to)) => to.line.abs_diff(from.line),
            _ => 0,
        }
    }

    /// Get the ids of the words on a line
    ///
    /// Blank and unknown lines give an empty range.
    pub fn words_on_line(&self, line: usize) -> Range<WordId> {
        match (self.line_starts.get(line), self.line_starts.get(line + 1)) {
            (Some(&start), Some(&end)) => start..end,
            _ => 0..0,
        }
    }
}

impl From<&str> for Snippet {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
