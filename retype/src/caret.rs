//! Caret position, moved incrementally by the key handlers.

/// Tolerance used when comparing caret coordinates
pub const EPSILON: f64 = 1e-9;

/// A 2D caret coordinate
///
/// The caret is never recomputed from the text. Each accepted keystroke nudges it by whole
/// multiples of the configured step sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaretPos {
    pub x: f64,
    pub y: f64,
}

impl CaretPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the caret `steps` characters to the right
    pub fn advance(self, steps: usize, step_x: f64) -> Self {
        Self {
            x: self.x + step_x * steps as f64,
            ..self
        }
    }

    /// Moves the caret `steps` characters to the left, without passing `floor`
    ///
    /// Landing within [EPSILON] of the floor snaps onto it, so accumulated float error can't
    /// leave the caret a hair away from the line start.
    pub fn retreat(self, steps: usize, step_x: f64, floor: f64) -> Self {
        let x = self.x - step_x * steps as f64;
        Self {
            x: if x < floor + EPSILON { floor } else { x },
            ..self
        }
    }

    /// Moves the caret `lines` lines down
    pub fn line_down(self, lines: usize, step_y: f64) -> Self {
        Self {
            y: self.y + step_y * lines as f64,
            ..self
        }
    }

    /// Moves the caret `lines` lines up
    pub fn line_up(self, lines: usize, step_y: f64) -> Self {
        Self {
            y: self.y - step_y * lines as f64,
            ..self
        }
    }

    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Returns true if the caret sits on the given column
    pub fn is_at_x(&self, x: f64) -> bool {
        (self.x - x).abs() < EPSILON
    }

    /// Compares two positions with [EPSILON] tolerance on both axes
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.is_at_x(other.x) && (self.y - other.y).abs() < EPSILON
    }
}
