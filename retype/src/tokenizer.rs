//! # Tokenizer Module - Lines, Words and Indentation
//!
//! Splits a snippet into lines of [Token]s. A token is either a word or an indentation marker
//! standing for one tab stop (two source spaces), so leading indentation can be drawn and jumped
//! over without being typed.
//!
//! ## Data Structure
//!
#![doc = simple_mermaid::mermaid!("../diagrams/tokenizer_structure.mmd")]
//!
//! Layout example: `"if (a) {\n    b()\n}"`
//! ```text
//! Line 0: [if] [(a)] [{]
//! Line 1: [⇥] [⇥] [b()]
//! Line 2: [}]
//! ```
//!
//! Empty words are kept where the source needs them to round-trip: a blank line is a line with a
//! single empty word, and an odd space left over after an indentation run becomes an empty word
//! as well. Empty words are never indexed as typeable words.

use std::fmt::{self, Display, Write};

use derive_more::Deref;

/// A single token of a tokenized line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A run of non-whitespace characters. May be empty, see the module docs.
    Word(String),
    /// One unit of indentation
    Indent,
}

impl Token {
    /// Returns the word text, or `None` for indentation
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            Self::Indent => None,
        }
    }

    pub const fn is_indent(&self) -> bool {
        matches!(self, Self::Indent)
    }

    /// Returns true if the token is a word the user has to type
    pub fn is_real_word(&self) -> bool {
        self.as_word().is_some_and(|word| !word.is_empty())
    }
}

/// A line of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Line(Vec<Token>);

impl Line {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Iterates over the words the user has to type on this line
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter_map(Token::as_word)
            .filter(|word| !word.is_empty())
    }

    /// Returns true if the line holds nothing to type
    pub fn is_blank(&self) -> bool {
        !self.0.iter().any(Token::is_real_word)
    }
}

impl Display for Line {
    /// Writes the line back out as source text
    ///
    /// Indentation markers are written as two spaces. Two adjacent words are separated by a single
    /// space, while indentation absorbs the separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut after_word = false;
        for token in &self.0 {
            match token {
                Token::Word(word) => {
                    if after_word {
                        f.write_char(' ')?;
                    }
                    f.write_str(word)?;
                    after_word = true;
                }
                Token::Indent => {
                    f.write_str("  ")?;
                    after_word = false;
                }
            }
        }
        Ok(())
    }
}

/// A tokenized snippet
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Lines(Vec<Line>);

impl Lines {
    /// Returns the amount of words the user has to type across all lines
    pub fn word_count(&self) -> usize {
        self.0.iter().map(|line| line.words().count()).sum()
    }
}

impl Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Tokenizes a snippet into lines of words and indentation markers
///
/// The snippet is trimmed first. Empty and whitespace-only snippets produce no lines.
///
/// Every pair of consecutive spaces becomes one [Token::Indent], as does a tab. A carriage return
/// directly before a newline is dropped, and any other whitespace separates words like a single
/// space does.
///
/// # Examples
///
/// ```rust
/// use retype::tokenizer::{Token, tokenize};
///
/// let lines = tokenize("if foo:\n  return");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].tokens(), &[Token::Indent, Token::Word("return".to_string())]);
///
/// // Re-joining gives back the trimmed snippet
/// assert_eq!(lines.to_string(), "if foo:\n  return");
/// ```
pub fn tokenize(snippet: &str) -> Lines {
    let snippet = snippet.trim();
    if snippet.is_empty() {
        return Lines::default();
    }

    let mut lines = Vec::new();
    let mut line = Vec::new();
    let mut word = String::new();

    let mut chars = snippet.chars().peekable();
    while let Some(char) = chars.next() {
        match char {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line.push(Token::Word(std::mem::take(&mut word)));
                lines.push(Line(std::mem::take(&mut line)));
            }
            ' ' if chars.next_if_eq(&' ').is_some() => {
                flush_word(&mut line, &mut word);
                line.push(Token::Indent);
            }
            '\t' => {
                flush_word(&mut line, &mut word);
                line.push(Token::Indent);
            }
            // Any other whitespace splits like a single space
            char if char.is_whitespace() => line.push(Token::Word(std::mem::take(&mut word))),
            char => word.push(char),
        }
    }

    line.push(Token::Word(word));
    lines.push(Line(line));

    Lines(lines)
}

/// Pushes the pending word to the line, unless nothing has been collected
fn flush_word(line: &mut Vec<Token>, word: &mut String) {
    if !word.is_empty() {
        line.push(Token::Word(std::mem::take(word)));
    }
}
