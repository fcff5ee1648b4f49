//! Key scripts: keystrokes written out as text.
//!
//! Every character stands for itself, with a space meaning [Key::Space] and a newline meaning
//! [Key::Enter]. Named keys are written in angle brackets, like `<Backspace>` or `<BS>`, and a
//! literal `<` is written as `<<`.

use retype::Key;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyScriptError {
    #[error("Unknown key '{name}' at position {position}")]
    UnknownKey { name: String, position: usize },

    #[error("Unterminated key name starting at position {position}")]
    Unterminated { position: usize },
}

/// Parses a key script into keystrokes
///
/// Positions in errors are character offsets into the script.
pub fn parse(script: &str) -> Result<Vec<Key>, KeyScriptError> {
    let mut keys = Vec::with_capacity(script.len());
    let mut chars = script.chars().enumerate().peekable();

    while let Some((position, char)) = chars.next() {
        match char {
            '<' if chars.next_if(|(_, next)| *next == '<').is_some() => keys.push(Key::Char('<')),
            '<' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '>')) => break,
                        Some((_, char)) => name.push(char),
                        None => return Err(KeyScriptError::Unterminated { position }),
                    }
                }

                let key = Key::classify(&name)
                    .ok_or(KeyScriptError::UnknownKey { name, position })?;
                keys.push(key);
            }
            // Windows line endings count as a single Enter
            '\r' if chars.peek().is_some_and(|(_, next)| *next == '\n') => {}
            char => {
                let key = Key::from_char(char).ok_or_else(|| KeyScriptError::UnknownKey {
                    name: char.escape_default().to_string(),
                    position,
                })?;
                keys.push(key);
            }
        }
    }

    Ok(keys)
}
