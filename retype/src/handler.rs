//! # Handler Module - Keystroke Classification and State Transitions
//!
//! Every keystroke is classified into one of four [Key]s and handled independently:
//!
//! - [Key::Char] records a letter against the current word
//! - [Key::Space] jumps to the next word on the same line
//! - [Key::Enter] jumps to the first word of the next line, matching its indentation
//! - [Key::Backspace] walks back a letter, or back into an incorrectly typed previous word
//!
//! Each key first decides whether the keystroke is ignored ([Key::ignore_reason]) and otherwise
//! computes the next caret position and typed log ([Key::compute_next]). Neither step mutates
//! anything: a keystroke is either fully applied by the caller or not at all.
//!
//! ## Input Processing Flow
//!
#![doc = simple_mermaid::mermaid!("../diagrams/handler_flow.mmd")]
//!
//! ## Usage Example
//!
//! ```rust
//! use retype::{CaretPos, Configuration, Key, Snippet, TypedLog, handle};
//!
//! let snippet = Snippet::new("foo bar baz");
//! let config = Configuration::default();
//!
//! let outcome = handle(Key::Char('f'), &TypedLog::new(), config.origin, &snippet, &config);
//! assert!(!outcome.ignored);
//! assert_eq!(outcome.typed.rendered(0), "f");
//!
//! // Nothing to correct at the very start
//! let outcome = handle(Key::Backspace, &TypedLog::new(), config.origin, &snippet, &config);
//! assert!(outcome.ignored);
//! ```

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::trace;

use crate::{CaretPos, Configuration, Letter, Snippet, TypedEntry, TypedLog, WordId};

/// A classified keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character
    Char(char),
    Space,
    Enter,
    Backspace,
}

/// Keys that are referred to by name instead of the character they produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum NamedKey {
    Space,
    #[strum(to_string = "Enter", serialize = "CR", serialize = "Return")]
    Enter,
    #[strum(to_string = "Backspace", serialize = "BS")]
    Backspace,
}

impl From<NamedKey> for Key {
    fn from(value: NamedKey) -> Self {
        match value {
            NamedKey::Space => Self::Space,
            NamedKey::Enter => Self::Enter,
            NamedKey::Backspace => Self::Backspace,
        }
    }
}

impl Key {
    /// Classifies a key by the name a frontend reports for it
    ///
    /// Accepts the [NamedKey]s and any single printable character. Returns `None` for anything
    /// else, like modifier keys.
    ///
    /// ```rust
    /// use retype::Key;
    ///
    /// assert_eq!(Key::classify("Backspace"), Some(Key::Backspace));
    /// assert_eq!(Key::classify(" "), Some(Key::Space));
    /// assert_eq!(Key::classify("{"), Some(Key::Char('{')));
    /// assert_eq!(Key::classify("Shift"), None);
    /// ```
    pub fn classify(name: &str) -> Option<Self> {
        if let Ok(named) = name.parse::<NamedKey>() {
            return Some(named.into());
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(char), None) => Self::from_char(char),
            _ => None,
        }
    }

    /// Classifies a raw character
    ///
    /// Space, newline and backspace characters map to their keys. Other control characters are
    /// not keys.
    pub fn from_char(char: char) -> Option<Self> {
        match char {
            ' ' => Some(Self::Space),
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            char if char.is_control() => None,
            char => Some(Self::Char(char)),
        }
    }

    /// Returns why the keystroke would be ignored, or `None` if it would be accepted
    pub fn ignore_reason(self, ctx: &KeyContext) -> Option<IgnoreReason> {
        let current = ctx.current_word_id();
        match self {
            Self::Char(_) => {
                if ctx.snippet.word(current).is_none() {
                    Some(IgnoreReason::NoTargetWord)
                } else if ctx.current_word_len() + ctx.config.overflow_limit
                    <= ctx.current_typed_len()
                {
                    Some(IgnoreReason::OverflowLimit)
                } else {
                    None
                }
            }
            Self::Space => {
                if ctx.at_end_of_line(current) {
                    Some(IgnoreReason::EndOfLine)
                } else if ctx.current_typed_len() == 0 {
                    Some(IgnoreReason::NothingTyped)
                } else {
                    None
                }
            }
            Self::Enter => {
                if !ctx.at_end_of_line(current) {
                    Some(IgnoreReason::NotAtEndOfLine)
                } else if ctx.snippet.word(current + 1).is_none() {
                    Some(IgnoreReason::LastWord)
                } else {
                    None
                }
            }
            Self::Backspace => {
                if ctx.at_line_origin() {
                    Some(IgnoreReason::AtOrigin)
                } else if ctx.current_typed_len() == 0 && ctx.prev_typed_correctly() {
                    Some(IgnoreReason::NothingToCorrect)
                } else {
                    None
                }
            }
        }
    }

    /// Returns true if the keystroke should not change any state
    pub fn ignore_input(self, ctx: &KeyContext) -> bool {
        self.ignore_reason(ctx).is_some()
    }

    /// Computes the caret and log after the keystroke
    ///
    /// Only meaningful when [Self::ignore_input] is false.
    pub fn compute_next(self, ctx: &KeyContext) -> (CaretPos, TypedLog) {
        let config = ctx.config;
        let current = ctx.current_word_id();

        match self {
            Self::Char(char) => (
                ctx.caret.advance(1, config.step_x),
                ctx.typed
                    .append(TypedEntry::new(current, Letter::Char(char))),
            ),
            Self::Space => {
                // Skip whatever is left of the current word
                let skip = ctx.current_word_len().saturating_sub(ctx.current_typed_len()) + 1;
                (
                    ctx.caret.advance(skip, config.step_x),
                    ctx.typed.append(TypedEntry::new(current + 1, Letter::Space)),
                )
            }
            Self::Enter => {
                let next = current + 1;
                let lines = ctx.snippet.lines_between(current, next).max(1);
                let x = config.origin.x + config.indent_width() * ctx.indent_count(next) as f64;
                (
                    ctx.caret.line_down(lines, config.step_y).with_x(x),
                    ctx.typed
                        .append(TypedEntry::new(next, Letter::LineBreak)),
                )
            }
            Self::Backspace => backspace(ctx),
        }
    }
}

/// Retracts the last entry, stepping back over a word or line boundary if nothing is typed into
/// the current word
fn backspace(ctx: &KeyContext) -> (CaretPos, TypedLog) {
    let config = ctx.config;
    let typed = ctx.typed.retract_last();

    if ctx.current_typed_len() > 0 {
        return (ctx.caret.retreat(1, config.step_x, config.origin.x), typed);
    }

    // Only the boundary entry of the current word is left. Retracting it steps back into the word
    // before, which may itself hold nothing but a line break.
    let current = ctx.current_word_id();
    let prev = typed.current_word_id();

    let caret = match ctx.typed.last().map(|entry| entry.letter) {
        Some(Letter::LineBreak) => {
            let lines = ctx.snippet.lines_between(prev, current).max(1);
            let x = config.origin.x + config.step_x * ctx.line_width(prev) as f64;
            ctx.caret.line_up(lines, config.step_y).with_x(x)
        }
        _ => {
            let offset = ctx
                .snippet
                .word_len(prev)
                .saturating_sub(ctx.typed.typed_len(prev))
                + 1;
            ctx.caret.retreat(offset, config.step_x, config.origin.x)
        }
    };

    (caret, typed)
}

/// Why a keystroke was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// The key has no meaning to the state machine
    UnknownKey,
    /// There is no word at the current position, i.e. the snippet is empty
    NoTargetWord,
    /// The current word has been overtyped by the configured limit
    OverflowLimit,
    /// Space at the end of a line, where Enter is expected
    EndOfLine,
    /// Enter anywhere but the end of a line
    NotAtEndOfLine,
    /// Enter at the end of the snippet
    LastWord,
    /// Space before typing anything into the current word
    NothingTyped,
    /// Backspace with the caret at the horizontal origin
    AtOrigin,
    /// Backspace at the start of a word that follows a correctly typed word
    NothingToCorrect,
}

/// Read-only view of the state a keystroke is handled against
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    pub snippet: &'a Snippet,
    pub typed: &'a TypedLog,
    pub caret: CaretPos,
    pub config: &'a Configuration,
}

impl<'a> KeyContext<'a> {
    pub const fn new(
        snippet: &'a Snippet,
        typed: &'a TypedLog,
        caret: CaretPos,
        config: &'a Configuration,
    ) -> Self {
        Self {
            snippet,
            typed,
            caret,
            config,
        }
    }

    pub const fn current_word_id(&self) -> WordId {
        self.typed.current_word_id()
    }

    /// Get the number of characters typed into the current word
    pub fn current_typed_len(&self) -> usize {
        self.typed.current_typed_len()
    }

    /// Get the length of the word currently being typed
    pub fn current_word_len(&self) -> usize {
        self.snippet.word_len(self.current_word_id())
    }

    /// Get the nearest earlier word that holds more than a line break
    pub fn prev_word_id(&self) -> Option<WordId> {
        (0..self.current_word_id()).rev().find(|&word_id| {
            let entries = self.typed.word(word_id);
            !(entries.len() == 1 && entries[0].letter == Letter::LineBreak)
        })
    }

    /// Returns true if there is no earlier mistake to walk back into
    pub fn prev_typed_correctly(&self) -> bool {
        if self.typed.is_empty() {
            return true;
        }

        self.prev_word_id().is_none_or(|word_id| {
            self.snippet
                .word(word_id)
                .is_some_and(|word| self.typed.rendered(word_id) == word)
        })
    }

    /// Returns true if the word is the last one on its line
    pub fn at_end_of_line(&self, word_id: WordId) -> bool {
        self.snippet.is_end_of_line(word_id)
    }

    /// Get the number of indentation markers in front of a word
    pub fn indent_count(&self, word_id: WordId) -> usize {
        self.snippet.indent_count(word_id)
    }

    /// Returns true if the caret sits at the horizontal origin
    ///
    /// This includes the start of an unindented line, even with a line break behind the caret.
    pub fn at_line_origin(&self) -> bool {
        self.caret.x <= self.config.origin.x + crate::caret::EPSILON
    }

    /// Get the offset, in characters, at which the caret stood after typing a word
    ///
    /// Counts the line's indentation, every earlier word on the line as it was skipped over with
    /// Space, and the letters typed into the word itself. A word holding only a line break was
    /// entered with Enter and left with Enter, so it contributes just the indentation.
    pub fn line_width(&self, word_id: WordId) -> usize {
        let Some(location) = self.snippet.location(word_id) else {
            return 0;
        };

        let first = self.snippet.words_on_line(location.line).start;
        let indent = self.config.tab_width * self.snippet.indent_count(first);
        let skipped: usize = (first..word_id)
            .map(|id| self.snippet.word_len(id).max(self.typed.typed_len(id)) + 1)
            .sum();

        indent + skipped + self.typed.typed_len(word_id)
    }

    /// Returns true once the final word has been typed to its full length
    pub fn is_complete(&self) -> bool {
        self.snippet.words().last_id() == Some(self.current_word_id())
            && self.current_typed_len() == self.current_word_len()
    }
}

/// The result of handling a keystroke
///
/// When the keystroke is ignored, `typed` and `caret` are the unchanged inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub ignored: bool,
    pub reason: Option<IgnoreReason>,
    pub typed: TypedLog,
    pub caret: CaretPos,
}

impl Outcome {
    fn ignored(reason: IgnoreReason, typed: &TypedLog, caret: CaretPos) -> Self {
        Self {
            ignored: true,
            reason: Some(reason),
            typed: typed.clone(),
            caret,
        }
    }

    const fn accepted(typed: TypedLog, caret: CaretPos) -> Self {
        Self {
            ignored: false,
            reason: None,
            typed,
            caret,
        }
    }
}

/// Handles one keystroke against a snapshot of the typing state
pub fn handle(
    key: Key,
    typed: &TypedLog,
    caret: CaretPos,
    snippet: &Snippet,
    config: &Configuration,
) -> Outcome {
    let ctx = KeyContext::new(snippet, typed, caret, config);

    if let Some(reason) = key.ignore_reason(&ctx) {
        trace!(?key, %reason, word_id = typed.current_word_id(), "Keystroke ignored");
        return Outcome::ignored(reason, typed, caret);
    }

    let (caret, typed) = key.compute_next(&ctx);
    Outcome::accepted(typed, caret)
}

/// Handles one keystroke given by name, see [Key::classify]
///
/// Unknown key names are ignored.
pub fn handle_named(
    name: &str,
    typed: &TypedLog,
    caret: CaretPos,
    snippet: &Snippet,
    config: &Configuration,
) -> Outcome {
    match Key::classify(name) {
        Some(key) => handle(key, typed, caret, snippet, config),
        None => {
            trace!(key = name, "Unknown key ignored");
            Outcome::ignored(IgnoreReason::UnknownKey, typed, caret)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ORIGIN, STEP_X, STEP_Y};

    const CODE: &str = "if (true) {\n  if (bar) {\n    return 'foo'\n  }\n}";

    /// Builds a log by replaying keys without checking whether they'd be accepted
    fn typed(text: &str) -> TypedLog {
        let mut log = TypedLog::new();
        for char in text.chars() {
            let current = log.current_word_id();
            let entry = match char {
                ' ' => TypedEntry::new(current + 1, Letter::Space),
                '\n' => TypedEntry::new(current + 1, Letter::LineBreak),
                char => TypedEntry::new(current, Letter::Char(char)),
            };
            log.push(entry);
        }
        log
    }

    fn caret(steps: usize, lines: usize) -> CaretPos {
        ORIGIN.advance(steps, STEP_X).line_down(lines, STEP_Y)
    }

    fn run(key: Key, text: &str, caret: CaretPos) -> Outcome {
        let snippet = Snippet::new(CODE);
        handle(key, &typed(text), caret, &snippet, &Configuration::default())
    }

    fn assert_caret(actual: CaretPos, expected: CaretPos) {
        assert!(
            actual.approx_eq(&expected),
            "caret {actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(Key::classify("Enter"), Some(Key::Enter));
        assert_eq!(Key::classify("enter"), Some(Key::Enter));
        assert_eq!(Key::classify("BS"), Some(Key::Backspace));
        assert_eq!(Key::classify("Space"), Some(Key::Space));
        assert_eq!(Key::classify("a"), Some(Key::Char('a')));
        assert_eq!(Key::classify("é"), Some(Key::Char('é')));
        assert_eq!(Key::classify("\u{1b}"), None);
        assert_eq!(Key::classify(""), None);
        assert_eq!(Key::classify("Control"), None);
    }

    #[test]
    fn test_letter_at_start() {
        let outcome = run(Key::Char('a'), "", ORIGIN);
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("a"));
        assert_caret(outcome.caret, caret(1, 0));
    }

    #[test]
    fn test_letter_at_overflow_limit() {
        // "if" plus ten extra letters
        let outcome = run(Key::Char('a'), "ifzzzzzzzzzz", caret(12, 0));
        assert!(outcome.ignored);
        assert_eq!(outcome.reason, Some(IgnoreReason::OverflowLimit));

        let outcome = run(Key::Char('a'), "ifzzzzzzzzz", caret(11, 0));
        assert!(!outcome.ignored);
    }

    #[test]
    fn test_letter_overflow_excludes_line_break() {
        // "if" on the second line, overtyped by nine letters
        let text = "if (true) {\nifzzzzzzzzz";
        let outcome = run(Key::Char('z'), text, caret(13, 1));
        assert!(!outcome.ignored);

        let outcome = run(Key::Char('z'), &format!("{text}z"), caret(14, 1));
        assert_eq!(outcome.reason, Some(IgnoreReason::OverflowLimit));
    }

    #[test]
    fn test_space_at_very_start() {
        let outcome = run(Key::Space, "", ORIGIN);
        assert_eq!(outcome.reason, Some(IgnoreReason::NothingTyped));
    }

    #[test]
    fn test_space_at_start_of_word() {
        let outcome = run(Key::Space, "if ", caret(3, 0));
        assert_eq!(outcome.reason, Some(IgnoreReason::NothingTyped));
    }

    #[test]
    fn test_space_at_end_of_line() {
        let outcome = run(Key::Space, "if (true) {", caret(11, 0));
        assert_eq!(outcome.reason, Some(IgnoreReason::EndOfLine));
    }

    #[test]
    fn test_space_at_end_of_word() {
        let outcome = run(Key::Space, "if", caret(2, 0));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("if "));
        assert_eq!(outcome.typed.current_word_id(), 1);
        assert_caret(outcome.caret, caret(3, 0));
    }

    #[test]
    fn test_space_mid_word() {
        let outcome = run(Key::Space, "i", caret(1, 0));
        assert_eq!(outcome.typed, typed("i "));
        // Skips the untyped "f"
        assert_caret(outcome.caret, caret(3, 0));
    }

    #[test]
    fn test_space_after_overtyped_word() {
        let outcome = run(Key::Space, "ifi", caret(3, 0));
        assert_eq!(outcome.typed, typed("ifi "));
        assert_caret(outcome.caret, caret(4, 0));
    }

    #[test]
    fn test_enter_at_start() {
        let outcome = run(Key::Enter, "", ORIGIN);
        assert_eq!(outcome.reason, Some(IgnoreReason::NotAtEndOfLine));
    }

    #[test]
    fn test_enter_mid_line() {
        let outcome = run(Key::Enter, "if", caret(2, 0));
        assert_eq!(outcome.reason, Some(IgnoreReason::NotAtEndOfLine));
    }

    #[test]
    fn test_enter_before_typing_last_word() {
        // Nothing typed into "{" yet, Enter still moves on
        let outcome = run(Key::Enter, "if (true) ", caret(10, 0));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("if (true) \n"));
        assert_eq!(outcome.typed.current_word_id(), 3);
        assert_caret(outcome.caret, caret(2, 1));
    }

    #[test]
    fn test_enter_at_end_of_line() {
        let outcome = run(Key::Enter, "if (true) {", caret(11, 0));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("if (true) {\n"));
        assert_eq!(outcome.typed.current_word_id(), 3);
        assert_eq!(
            outcome.typed.last(),
            Some(&TypedEntry::new(3, Letter::LineBreak))
        );
        // One indentation marker of two characters
        assert_caret(outcome.caret, caret(2, 1));
    }

    #[test]
    fn test_enter_at_end_of_snippet() {
        let text = "if (true) {\nif (bar) {\nreturn 'foo'\n}\n}";
        let outcome = run(Key::Enter, text, caret(1, 4));
        assert_eq!(outcome.reason, Some(IgnoreReason::LastWord));
    }

    #[test]
    fn test_backspace_at_start() {
        let outcome = run(Key::Backspace, "", ORIGIN);
        assert_eq!(outcome.reason, Some(IgnoreReason::AtOrigin));
        assert_eq!(outcome.typed, TypedLog::new());
        assert_eq!(outcome.caret, ORIGIN);
    }

    #[test]
    fn test_backspace_after_correct_word() {
        let outcome = run(Key::Backspace, "if ", caret(3, 0));
        assert_eq!(outcome.reason, Some(IgnoreReason::NothingToCorrect));
    }

    #[test]
    fn test_backspace_after_incorrect_word() {
        let outcome = run(Key::Backspace, "ir ", caret(3, 0));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("ir"));
        assert_eq!(outcome.typed.current_word_id(), 0);
        assert_caret(outcome.caret, caret(2, 0));
    }

    #[test]
    fn test_backspace_after_skipped_word() {
        // Space after "i" skipped the "f"
        let outcome = run(Key::Backspace, "i ", caret(3, 0));
        assert_eq!(outcome.typed, typed("i"));
        assert_caret(outcome.caret, caret(1, 0));
    }

    #[test]
    fn test_backspace_at_new_line_after_correct_line() {
        let outcome = run(Key::Backspace, "if (true) {\n", caret(2, 1));
        assert_eq!(outcome.reason, Some(IgnoreReason::NothingToCorrect));
    }

    #[test]
    fn test_backspace_at_new_line_after_incorrect_line() {
        let outcome = run(Key::Backspace, "if (true) }\n", caret(2, 1));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("if (true) }"));
        assert_eq!(outcome.typed.current_word_id(), 2);
        // Back behind the "}" on the first line
        assert_caret(outcome.caret, caret(11, 0));
    }

    #[test]
    fn test_backspace_at_unindented_line_start() {
        // Line four "}" has no indentation, so the caret sits at the origin even though the
        // mistyped ")" is right behind the line break
        let text = "if (true) {\nif (bar) {\nreturn 'foo'\n)\n";
        let outcome = run(Key::Backspace, text, caret(0, 4));
        assert!(outcome.ignored);
        assert_eq!(outcome.reason, Some(IgnoreReason::AtOrigin));
        assert_eq!(outcome.typed, typed(text));
    }

    #[test]
    fn test_backspace_over_line_holding_only_line_break() {
        let snippet = Snippet::new("x\n  y\n  z");
        let config = Configuration::default();

        // "a" instead of "x", then Enter twice without typing "y"
        let log = typed("a\n\n");
        assert_eq!(log.word(1), vec![TypedEntry::new(1, Letter::LineBreak)]);
        let start = caret(2, 2);

        let outcome = handle(Key::Backspace, &log, start, &snippet, &config);
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("a\n"));
        // Back to the indentation of the empty second line
        assert_caret(outcome.caret, caret(2, 1));

        let outcome = handle(Key::Backspace, &outcome.typed, outcome.caret, &snippet, &config);
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("a"));
        assert_caret(outcome.caret, caret(1, 0));
    }

    #[test]
    fn test_backspace_skips_line_break_only_word_when_checking_mistakes() {
        let snippet = Snippet::new("x\n  y\n  z");
        let config = Configuration::default();

        // "x" was typed correctly, "y" was skipped with Enter
        let log = typed("x\n\n");
        let outcome = handle(Key::Backspace, &log, caret(2, 2), &snippet, &config);
        assert_eq!(outcome.reason, Some(IgnoreReason::NothingToCorrect));
    }

    #[test]
    fn test_backspace_across_line_with_overtyped_words() {
        // "return" overtyped by two, "'foo'" typed short
        let text = "if (true) {\nif (bar) {\nreturnxx 'fo\n";
        let outcome = run(Key::Backspace, text, caret(2, 3));
        assert!(!outcome.ignored);
        // 4 indentation + "returnxx" + space + "'fo"
        assert_caret(outcome.caret, caret(4 + 9 + 3, 2));
    }

    #[test]
    fn test_delete_letter() {
        let outcome = run(Key::Backspace, "if", caret(2, 0));
        assert!(!outcome.ignored);
        assert_eq!(outcome.typed, typed("i"));
        assert_caret(outcome.caret, caret(1, 0));
    }

    #[test]
    fn test_delete_last_letter_resets_word() {
        let outcome = run(Key::Backspace, "i", caret(1, 0));
        assert_eq!(outcome.typed, TypedLog::new());
        assert_eq!(outcome.caret, ORIGIN);
    }

    #[test]
    fn test_empty_snippet_ignores_everything() {
        let snippet = Snippet::new("  \n ");
        let config = Configuration::default();
        let log = TypedLog::new();

        for key in [Key::Char('a'), Key::Space, Key::Enter, Key::Backspace] {
            let outcome = handle(key, &log, ORIGIN, &snippet, &config);
            assert!(outcome.ignored, "{key:?}");
        }
    }

    #[test]
    fn test_unknown_named_key() {
        let snippet = Snippet::new(CODE);
        let outcome = handle_named(
            "Shift",
            &TypedLog::new(),
            ORIGIN,
            &snippet,
            &Configuration::default(),
        );
        assert_eq!(outcome.reason, Some(IgnoreReason::UnknownKey));
    }

    #[test]
    fn test_completion() {
        let snippet = Snippet::new("foo bar");
        let config = Configuration::default();

        let log = typed("foo ba");
        assert!(!KeyContext::new(&snippet, &log, ORIGIN, &config).is_complete());

        let log = typed("foo bar");
        assert!(KeyContext::new(&snippet, &log, ORIGIN, &config).is_complete());

        // Overtyping the last word is not complete
        let log = typed("foo barr");
        assert!(!KeyContext::new(&snippet, &log, ORIGIN, &config).is_complete());
    }
}
