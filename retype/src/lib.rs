//! # Retype - a state machine for source-code typing trainers
//!
//! `retype` tracks a user retyping a code snippet keystroke by keystroke. It tokenizes the
//! snippet into lines, words and indentation, records every accepted keystroke against the word
//! it belongs to, and moves a caret in fixed steps so a frontend can draw it.
//!
//! Rendering is left to the caller: [`PracticeSession::render_iter`] hands out per-word
//! correctness flags, and [`PracticeSession::caret`] gives the caret coordinate.
//!
//! ```rust
//! use retype::{Key, PracticeSession};
//!
//! let mut session = PracticeSession::new("fn main() {\n  todo!()\n}");
//!
//! session.input_str("fn main() {");
//! assert!(session.input(Key::Enter));
//!
//! // The caret jumps to the indentation of the next line
//! assert_eq!(session.typed().current_word_id(), 3);
//! ```

pub mod caret;
pub mod config;
pub mod handler;
pub mod render;
pub mod session;
pub mod snippet;
pub mod tokenizer;
pub mod typed;
pub mod words;

pub use caret::CaretPos;
pub use config::Configuration;
pub use handler::{IgnoreReason, Key, KeyContext, NamedKey, Outcome, handle, handle_named};
pub use render::{LetterContext, LetterState, LineContext, WordContext};
pub use session::{PracticeSession, Progress};
pub use snippet::{Snippet, WordLocation};
pub use tokenizer::{Line, Lines, Token, tokenize};
pub use typed::{Letter, TypedEntry, TypedLog};
pub use words::WordList;

/// Sequential index of a real word in a snippet
pub type WordId = usize;
