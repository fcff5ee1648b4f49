use std::fmt::Write;

use retype::{CaretPos, PracticeSession, Snippet, Token, WordId};
use serde::Serialize;

/// The state of a session after replaying a key script
#[derive(Debug, Serialize)]
pub struct Report {
    pub accepted: usize,
    pub ignored: usize,
    pub complete: bool,
    pub current_word_id: WordId,
    pub words_completed: usize,
    pub words_total: usize,
    pub transcript: String,
    pub caret: CaretPos,
    pub words: Vec<WordReport>,
}

#[derive(Debug, Serialize)]
pub struct WordReport {
    pub id: WordId,
    pub target: String,
    pub typed: String,
    pub complete: bool,
    pub correct: bool,
}

impl From<&PracticeSession> for Report {
    fn from(session: &PracticeSession) -> Self {
        let progress = session.progress();
        let typed = session.typed();

        let words = session
            .render_iter()
            // Words nobody has reached yet add nothing
            .filter(|word| word.word_id <= typed.current_word_id())
            .map(|word| WordReport {
                id: word.word_id,
                target: word.target.to_string(),
                typed: typed.rendered(word.word_id),
                complete: word.is_complete,
                correct: word.is_correct(),
            })
            .collect();

        Self {
            accepted: progress.accepted,
            ignored: progress.ignored,
            complete: session.is_complete(),
            current_word_id: typed.current_word_id(),
            words_completed: progress.words_completed,
            words_total: progress.words_total,
            transcript: typed.transcript(),
            caret: session.caret(),
            words,
        }
    }
}

impl Report {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Lists the tokens of every line, followed by the flat word list
///
/// ```text
/// 0: "if" "(a)" "{"
/// 1: ⇥ ⇥ "b()"
/// ```
pub fn token_listing(snippet: &Snippet) -> String {
    let mut output = String::new();

    for (index, line) in snippet.lines().iter().enumerate() {
        let tokens: Vec<String> = line
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Indent => "⇥".to_string(),
                Token::Word(word) => format!("{word:?}"),
            })
            .collect();
        let _ = writeln!(output, "{index}: {}", tokens.join(" "));
    }

    let _ = writeln!(output);
    for (word_id, word) in snippet.words().iter().enumerate() {
        let _ = writeln!(output, "[{word_id}] {word}");
    }

    output
}
