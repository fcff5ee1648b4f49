use strum::{Display, EnumIter};

use crate::{PracticeSession, TypedLog, WordId};

/// How a single letter should be drawn
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LetterState {
    /// Not typed yet
    #[default]
    Untyped,
    /// Typed and matching the target
    Correct,
    /// Typed but not matching, or typed beyond the end of the word
    Incorrect,
}

pub struct LetterContext {
    /// The character to draw. This is the target letter, or the typed letter when overtyping.
    pub char: char,
    pub state: LetterState,
}

pub struct WordContext<'a> {
    pub word_id: WordId,
    pub target: &'a str,
    pub letters: Vec<LetterContext>,
    /// The user has moved on from this word
    pub is_complete: bool,
    /// The user is typing this word
    pub is_current: bool,
}

impl<'a> WordContext<'a> {
    /// Compares what was typed into a word against its target
    pub fn new(word_id: WordId, target: &'a str, typed: &TypedLog) -> Self {
        let input = typed.rendered(word_id);
        let mut input_chars = input.chars();
        let mut letters = Vec::with_capacity(target.len().max(input.len()));

        for target_char in target.chars() {
            let state = match input_chars.next() {
                Some(input_char) if input_char == target_char => LetterState::Correct,
                Some(_) => LetterState::Incorrect,
                None => LetterState::Untyped,
            };
            letters.push(LetterContext {
                char: target_char,
                state,
            });
        }

        // Overtyped letters
        letters.extend(input_chars.map(|char| LetterContext {
            char,
            state: LetterState::Incorrect,
        }));

        Self {
            word_id,
            target,
            letters,
            is_complete: typed.is_word_complete(word_id),
            is_current: typed.current_word_id() == word_id,
        }
    }

    /// Returns true if every letter of the word was typed correctly and nothing more
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|letter| letter.state == LetterState::Correct)
    }
}

pub struct LineContext<'a> {
    pub line: usize,
    /// Indentation markers in front of the first word
    pub indent: usize,
    pub words: Vec<WordContext<'a>>,
}

/// Iterator for word rendering contexts
pub struct RenderingIterator<'a> {
    session: &'a PracticeSession,
    index: WordId,
}

impl<'a> From<&'a PracticeSession> for RenderingIterator<'a> {
    fn from(value: &'a PracticeSession) -> Self {
        Self {
            session: value,
            index: 0,
        }
    }
}

impl ExactSizeIterator for RenderingIterator<'_> {}

impl std::iter::FusedIterator for RenderingIterator<'_> {}

impl<'a> Iterator for RenderingIterator<'a> {
    type Item = WordContext<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.session.snippet().word(self.index)?;
        let context = WordContext::new(self.index, target, self.session.typed());

        self.index += 1;
        Some(context)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .session
            .snippet()
            .word_count()
            .saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
