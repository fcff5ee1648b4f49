//! # Session Module - Complete Practice Session Management
//!
//! This module provides the high-level interface for a practice session. A [PracticeSession]
//! owns the snippet being practiced and the current typing state, feeds keystrokes through the
//! [handler](crate::handler) and commits the resulting snapshots.
//!
//! ## Session Lifecycle
//!
#![doc = simple_mermaid::mermaid!("../diagrams/session_lifecycle.mmd")]
//!
//! ## Usage Examples
//!
//! ```rust
//! use retype::{Key, LetterState, PracticeSession};
//!
//! let mut session = PracticeSession::new("let x = 1;");
//!
//! session.input_str("let y");
//! assert_eq!(session.typed().current_word_id(), 1);
//!
//! // Correct the typo
//! assert!(session.input(Key::Backspace));
//! session.input_str("x = 1;");
//! assert!(session.is_complete());
//!
//! let states: Vec<LetterState> = session
//!     .render_iter()
//!     .flat_map(|word| word.letters)
//!     .map(|letter| letter.state)
//!     .collect();
//! assert!(states.iter().all(|state| *state == LetterState::Correct));
//! ```

use tracing::debug;

use crate::handler::{IgnoreReason, KeyContext, Outcome, handle};
use crate::render::{LineContext, RenderingIterator, WordContext};
use crate::{CaretPos, Configuration, Key, Snippet, TypedEntry, TypedLog, WordId};

/// Keystroke counters and word progress of a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Words the user has moved past
    pub words_completed: usize,
    /// Words in the snippet
    pub words_total: usize,
    /// Keystrokes that changed the state
    pub accepted: usize,
    /// Keystrokes that were dropped
    pub ignored: usize,
}

/// A practice session over a single snippet
///
/// Holds the committed `(TypedLog, CaretPos)` snapshot. Every keystroke is handled against the
/// snapshot and, if accepted, replaces it.
///
/// # Examples
///
/// ```rust
/// use retype::{Key, PracticeSession};
///
/// let mut session = PracticeSession::new("foo\n  bar");
/// session.input_str("foo");
/// assert!(session.input(Key::Enter));
///
/// // Auto-indented to the second line
/// let caret = session.caret();
/// assert!((caret.x - 0.582 * 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct PracticeSession {
    snippet: Snippet,
    typed: TypedLog,
    caret: CaretPos,
    config: Configuration,
    accepted: usize,
    ignored: usize,
}

impl PracticeSession {
    /// Create a new session over the given snippet
    ///
    /// Empty snippets are allowed. There is nothing to practice in them, so every keystroke is
    /// ignored.
    pub fn new(snippet: &str) -> Self {
        Self::from_snippet(Snippet::new(snippet))
    }

    /// Create a new session over an already parsed snippet
    pub fn from_snippet(snippet: Snippet) -> Self {
        let config = Configuration::default();
        debug!(words = snippet.word_count(), "Starting practice session");
        Self {
            snippet,
            typed: TypedLog::new(),
            caret: config.origin,
            config,
            accepted: 0,
            ignored: 0,
        }
    }

    /// Configure the session with custom settings (builder pattern)
    ///
    /// Resets the typing state, as the caret has to start at the configured origin.
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self.reset();
        self
    }

    /// Replaces the snippet and starts over
    pub fn load(&mut self, snippet: &str) {
        self.snippet = Snippet::new(snippet);
        debug!(words = self.snippet.word_count(), "Loaded new snippet");
        self.reset();
    }

    /// Discards everything typed so far
    pub fn reset(&mut self) {
        self.typed = TypedLog::new();
        self.caret = self.config.origin;
        self.accepted = 0;
        self.ignored = 0;
    }

    pub const fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    pub const fn typed(&self) -> &TypedLog {
        &self.typed
    }

    pub const fn caret(&self) -> CaretPos {
        self.caret
    }

    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Handles a keystroke without committing the result
    pub fn preview(&self, key: Key) -> Outcome {
        handle(key, &self.typed, self.caret, &self.snippet, &self.config)
    }

    /// Handles a keystroke and commits the result
    ///
    /// Returns true if the keystroke was accepted.
    pub fn input(&mut self, key: Key) -> bool {
        self.commit(self.preview(key))
    }

    /// Handles a keystroke given by name, see [Key::classify]
    pub fn input_named(&mut self, name: &str) -> bool {
        let outcome = crate::handle_named(name, &self.typed, self.caret, &self.snippet, &self.config);
        self.commit(outcome)
    }

    /// Types out a string, one keystroke per character
    ///
    /// Spaces and newlines are sent as [Key::Space] and [Key::Enter], with `"\r\n"` counting as a
    /// single Enter. Returns the number of accepted keystrokes.
    pub fn input_str(&mut self, text: &str) -> usize {
        let mut chars = text.chars().peekable();
        let mut accepted = 0;

        while let Some(char) = chars.next() {
            if char == '\r' && chars.peek() == Some(&'\n') {
                continue;
            }

            let was_accepted = match Key::from_char(char) {
                Some(key) => self.input(key),
                None => self.commit_ignored(IgnoreReason::UnknownKey),
            };
            accepted += usize::from(was_accepted);
        }

        accepted
    }

    fn commit(&mut self, outcome: Outcome) -> bool {
        if outcome.ignored {
            self.ignored += 1;
            return false;
        }

        self.typed = outcome.typed;
        self.caret = outcome.caret;
        self.accepted += 1;
        true
    }

    fn commit_ignored(&mut self, reason: IgnoreReason) -> bool {
        debug!(%reason, "Character is not a key");
        self.ignored += 1;
        false
    }

    /// Returns true once the final word has been typed to its full length
    ///
    /// The caller decides what happens next. The session keeps accepting corrections.
    pub fn is_complete(&self) -> bool {
        KeyContext::new(&self.snippet, &self.typed, self.caret, &self.config).is_complete()
    }

    /// Get every entry typed against a word
    pub fn word_slice(&self, word_id: WordId) -> Vec<TypedEntry> {
        self.typed.word(word_id)
    }

    /// Returns true once the user has moved past the word
    pub const fn is_word_complete(&self, word_id: WordId) -> bool {
        self.typed.is_word_complete(word_id)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            words_completed: self
                .typed
                .current_word_id()
                .min(self.snippet.word_count()),
            words_total: self.snippet.word_count(),
            accepted: self.accepted,
            ignored: self.ignored,
        }
    }

    /// Iterate over the rendering contexts of every word
    pub fn render_iter(&self) -> RenderingIterator<'_> {
        RenderingIterator::from(self)
    }

    /// Render every word using a generic renderer function
    pub fn render_words<Word, F: FnMut(WordContext) -> Word>(&self, renderer: F) -> Vec<Word> {
        self.render_iter().map(renderer).collect()
    }

    /// Render the snippet line by line
    ///
    /// Blank lines are passed to the renderer with no words, so the output keeps the snippet's
    /// vertical layout.
    pub fn render_lines<Line, F: FnMut(LineContext) -> Line>(&self, mut renderer: F) -> Vec<Line> {
        let lines = self.snippet.lines();
        let mut results = Vec::with_capacity(lines.len());

        for line in 0..lines.len() {
            let word_ids = self.snippet.words_on_line(line);
            let indent = word_ids
                .clone()
                .next()
                .map_or(0, |first| self.snippet.indent_count(first));

            let words = word_ids
                .filter_map(|word_id| {
                    let target = self.snippet.word(word_id)?;
                    Some(WordContext::new(word_id, target, &self.typed))
                })
                .collect();

            results.push(renderer(LineContext {
                line,
                indent,
                words,
            }));
        }

        results
    }
}
