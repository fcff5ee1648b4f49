//! # Typed Module - The Keystroke Log
//!
//! Everything the user has typed is kept in a [TypedLog]: an ordered list of [TypedEntry]s, each
//! tagged with the word it was typed against. Entries are only ever appended to or removed from
//! the tail, so the log stays sorted by word id and a word's entries form one contiguous run.
//!
//! ## Data Structure
//!
#![doc = simple_mermaid::mermaid!("../diagrams/typed_log.mmd")]
//!
//! Layout example after typing `"if (tru"` against `"if (true) {"`:
//! ```text
//! Entries: [i][f][␣][(][t][r][u]
//! Word:     0  0  1  1  1  1  1
//! Current word: 1
//! ```
//!
//! The log is a persistent vector: appending or retracting produces a new log sharing structure
//! with the old one, so callers can keep the previous snapshot around cheaply.

use std::cmp::Ordering;

use derive_more::Display;
use imbl::Vector;

use crate::WordId;

/// What a single keystroke recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Letter {
    /// A printable character
    #[display("{_0}")]
    Char(char),
    /// The boundary left by moving to the next word with Space
    #[display(" ")]
    Space,
    /// The boundary left by moving to the next line with Enter
    #[display("\n")]
    LineBreak,
}

impl Letter {
    /// Returns the typed character, or `None` for word boundaries
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(char) => Some(char),
            Self::Space | Self::LineBreak => None,
        }
    }

    /// Returns true for the markers left by Space and Enter
    pub const fn is_boundary(self) -> bool {
        matches!(self, Self::Space | Self::LineBreak)
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        match value {
            Letter::Char(char) => char,
            Letter::Space => ' ',
            Letter::LineBreak => '\n',
        }
    }
}

/// One recorded keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedEntry {
    pub word_id: WordId,
    pub letter: Letter,
}

impl TypedEntry {
    pub const fn new(word_id: WordId, letter: Letter) -> Self {
        Self { word_id, letter }
    }
}

/// The full history of accepted keystrokes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedLog {
    /// Always the word id of the last entry, or 0 if there are none
    current_word_id: WordId,
    entries: Vector<TypedEntry>,
}

impl TypedLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the id of the word currently being typed
    pub const fn current_word_id(&self) -> WordId {
        self.current_word_id
    }

    pub const fn entries(&self) -> &Vector<TypedEntry> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TypedEntry> {
        self.entries.last()
    }

    /// Appends an entry in place
    ///
    /// The entry must not belong to an earlier word than the current tail.
    pub fn push(&mut self, entry: TypedEntry) {
        debug_assert!(
            self.last().is_none_or(|last| last.word_id <= entry.word_id),
            "entries must be appended in word order"
        );
        self.current_word_id = entry.word_id;
        self.entries.push_back(entry);
    }

    /// Removes the tail entry in place and returns it
    pub fn pop(&mut self) -> Option<TypedEntry> {
        let removed = self.entries.pop_back()?;
        self.current_word_id = self.entries.last().map_or(0, |last| last.word_id);
        Some(removed)
    }

    /// Returns a new log with the entry appended
    pub fn append(&self, entry: TypedEntry) -> Self {
        let mut next = self.clone();
        next.push(entry);
        next
    }

    /// Returns a new log without the tail entry
    pub fn retract_last(&self) -> Self {
        let mut next = self.clone();
        next.pop();
        next
    }

    /// Get every entry typed against a word, boundary markers included
    ///
    /// Negative and unknown ids give an empty slice. See [Self::word] for the lookup itself.
    pub fn word_slice(&self, word_id: isize) -> Vec<TypedEntry> {
        WordId::try_from(word_id).map_or_else(|_| Vec::new(), |word_id| self.word(word_id))
    }

    /// Get every entry typed against a word, boundary markers included
    ///
    /// Binary searches for the first entry of the word, then collects the contiguous run that
    /// follows it. Words without entries give an empty slice.
    pub fn word(&self, word_id: WordId) -> Vec<TypedEntry> {
        let (Ok(start) | Err(start)) = self.entries.binary_search_by(|entry| {
            if entry.word_id < word_id {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });

        self.entries
            .skip(start)
            .iter()
            .take_while(|entry| entry.word_id == word_id)
            .copied()
            .collect()
    }

    /// Get the entries of the word currently being typed
    pub fn current_word(&self) -> Vec<TypedEntry> {
        self.word(self.current_word_id)
    }

    /// Get the number of characters typed into a word, boundary markers excluded
    pub fn typed_len(&self, word_id: WordId) -> usize {
        self.word(word_id)
            .iter()
            .filter(|entry| !entry.letter.is_boundary())
            .count()
    }

    /// Get the number of characters typed into the current word
    pub fn current_typed_len(&self) -> usize {
        self.typed_len(self.current_word_id)
    }

    /// Returns true once the user has moved past the word
    ///
    /// This says nothing about whether the word was typed correctly.
    pub const fn is_word_complete(&self, word_id: WordId) -> bool {
        word_id < self.current_word_id
    }

    /// Get the text typed into a word
    pub fn rendered(&self, word_id: WordId) -> String {
        Self::render(&self.word(word_id))
    }

    /// Joins the typed characters of some entries, leaving out word boundaries
    pub fn render(entries: &[TypedEntry]) -> String {
        entries
            .iter()
            .filter_map(|entry| entry.letter.as_char())
            .collect()
    }

    /// Get everything typed so far as text, with spaces and newlines at the word boundaries
    pub fn transcript(&self) -> String {
        self.entries
            .iter()
            .map(|entry| char::from(entry.letter))
            .collect()
    }
}
