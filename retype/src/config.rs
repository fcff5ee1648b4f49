//! # Configuration Module - Caret Geometry and Input Limits
//!
//! The caret is moved in fixed steps rather than measured from real glyphs, so the step sizes
//! live here as plain configuration next to the input limits.
//!
//! ## Usage
//!
//! ```rust
//! use retype::config::Configuration;
//!
//! // Use default configuration
//! let config = Configuration::default();
//! assert_eq!(config.overflow_limit, 10);
//!
//! // Custom configuration
//! let config = Configuration {
//!     tab_width: 4,
//!     ..Configuration::default()
//! };
//! ```

use crate::CaretPos;

/// Horizontal distance covered by one character
pub const STEP_X: f64 = 0.582;

/// Vertical distance covered by one line
pub const STEP_Y: f64 = 1.875;

/// Where the caret starts before anything has been typed
pub const ORIGIN: CaretPos = CaretPos::new(0.0, -0.2);

/// Characters per indentation marker
pub const TAB_WIDTH: usize = 2;

/// How far a word may be overtyped before further letters are dropped
pub const OVERFLOW_LIMIT: usize = 10;

/// Runtime configuration for a practice session
///
/// Controls the caret geometry and how much slack the user gets when overtyping a word.
/// All settings have defaults matching a monospace font at the default size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Configuration {
    /// Horizontal caret step per character
    ///
    /// **Default**: 0.582
    pub step_x: f64,

    /// Vertical caret step per line
    ///
    /// **Default**: 1.875
    pub step_y: f64,

    /// Initial caret position. Its `x` is also the floor the caret never moves below.
    ///
    /// **Default**: (0.0, -0.2)
    pub origin: CaretPos,

    /// Number of `step_x` units one indentation marker occupies
    ///
    /// **Default**: 2
    pub tab_width: usize,

    /// Extra letters accepted beyond a word's length
    ///
    /// **Default**: 10
    pub overflow_limit: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            step_x: STEP_X,
            step_y: STEP_Y,
            origin: ORIGIN,
            tab_width: TAB_WIDTH,
            overflow_limit: OVERFLOW_LIMIT,
        }
    }
}

impl Configuration {
    /// Horizontal width of one indentation marker
    pub fn indent_width(&self) -> f64 {
        self.step_x * self.tab_width as f64
    }
}
