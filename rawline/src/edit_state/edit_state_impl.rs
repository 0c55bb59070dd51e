// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::GraphemeBuffer;
use crate::Token;

/// The line being edited during one [`crate::Readline::read_line`] call.
///
/// `point` is a cluster index with `0 <= point <= end()`. `end()` is derived from the
/// buffer, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    /// Shown before the buffer. May contain ANSI styling.
    pub prompt: String,
    pub buffer: GraphemeBuffer,
    /// Cursor position in clusters.
    pub point: usize,
    /// The most recent cut. Empty until something is cut.
    pub clipboard: String,
    /// The token applied last, for modes that react to what just happened.
    pub last_token: Option<Token>,
    /// Set by Submit. The read loop stops once this is `true`.
    pub done: bool,
}

impl EditState {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Start with a clipboard carried over from an earlier read.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Into<String>) -> Self {
        self.clipboard = clipboard.into();
        self
    }

    /// Start with text already in the buffer and the cursor at its end.
    #[must_use]
    pub fn with_buffer(mut self, text: &str) -> Self {
        self.buffer = GraphemeBuffer::from(text);
        self.point = self.buffer.len();
        self
    }

    /// Length of the buffer in clusters.
    #[must_use]
    pub fn end(&self) -> usize { self.buffer.len() }

    /// The buffer as a plain string.
    #[must_use]
    pub fn text(&self) -> String { self.buffer.to_string() }

    /// Move the cursor, clamped to `0..=end()`.
    pub fn set_point(&mut self, point: usize) { self.point = point.min(self.end()); }

    /// Terminal columns from the start of the buffer to the cursor.
    #[must_use]
    pub fn columns_before_point(&self) -> usize { self.buffer.columns(0..self.point) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state_is_empty() {
        let state = EditState::new("> ");
        assert_eq!(state.prompt, "> ");
        assert_eq!(state.point, 0);
        assert_eq!(state.end(), 0);
        assert_eq!(state.clipboard, "");
        assert!(!state.done);
    }

    #[test]
    fn test_builders() {
        let state = EditState::new("")
            .with_buffer("aあb")
            .with_clipboard("cut");
        assert_eq!(state.point, 3);
        assert_eq!(state.end(), 3);
        assert_eq!(state.columns_before_point(), 4);
        assert_eq!(state.clipboard, "cut");
        assert_eq!(state.text(), "aあb");
    }

    #[test]
    fn test_set_point_clamps() {
        let mut state = EditState::new("").with_buffer("ab");
        state.set_point(10);
        assert_eq!(state.point, 2);
        state.set_point(1);
        assert_eq!(state.point, 1);
    }
}
