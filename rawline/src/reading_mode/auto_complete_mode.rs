// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Interception, ReadingMode};
use crate::{CompletionRule, ControlTag, EditState, Token, WordCompletion};
use crossterm::style::Stylize;

/// Line editing plus an inline, dimmed suggestion for the word being typed.
///
/// | Key        | Effect                                                  |
/// |------------|---------------------------------------------------------|
/// | Tab        | insert the suggestion, if there is one                  |
/// | Up / Down  | step to the previous / next candidate (empty word only) |
#[derive(Debug, Clone, Default)]
pub struct AutoCompleteMode {
    pub completion: WordCompletion,
    /// Which candidate to offer when the last word is empty. Unbounded in both
    /// directions; wrapped when used.
    pub suggest_index: isize,
}

impl AutoCompleteMode {
    #[must_use]
    pub fn new(rule: CompletionRule) -> Self { Self::from(WordCompletion::new(rule)) }

    /// The suggestion for the current buffer.
    #[must_use]
    pub fn prediction(&self, state: &EditState) -> Option<String> {
        self.completion.predict(&state.text(), self.suggest_index)
    }
}

impl From<WordCompletion> for AutoCompleteMode {
    fn from(completion: WordCompletion) -> Self {
        Self {
            completion,
            suggest_index: 0,
        }
    }
}

impl ReadingMode for AutoCompleteMode {
    fn intercept(&mut self, state: &EditState, token: &Token) -> Interception {
        match token.tag() {
            Some(ControlTag::CursorUp) => {
                self.suggest_index = self.suggest_index.saturating_sub(1);
                Interception::Consumed
            }
            Some(ControlTag::CursorDown) => {
                self.suggest_index = self.suggest_index.saturating_add(1);
                Interception::Consumed
            }
            Some(ControlTag::Tab) => match self.prediction(state) {
                Some(suffix) => {
                    self.suggest_index = 0;
                    Interception::Insert(suffix)
                }
                None => Interception::PassThrough,
            },
            _ => Interception::PassThrough,
        }
    }

    fn rendering_text(&self, state: &EditState) -> String {
        let mut text = format!("{}{}", state.prompt, state.buffer);
        if let Some(suffix) = self.prediction(state).filter(|it| !it.is_empty()) {
            text.push_str(&suffix.as_str().dark_grey().to_string());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mode() -> AutoCompleteMode {
        AutoCompleteMode::new(CompletionRule::words(["123", "456", "789"]))
    }

    #[test]
    fn test_up_and_down_step_the_index() {
        let mut mode = mode();
        let state = EditState::new("ac:");
        let up = Token::control(ControlTag::CursorUp);
        let down = Token::control(ControlTag::CursorDown);

        assert_eq!(mode.intercept(&state, &up), Interception::Consumed);
        assert_eq!(mode.intercept(&state, &up), Interception::Consumed);
        assert_eq!(mode.suggest_index, -2);
        assert_eq!(mode.prediction(&state).as_deref(), Some("456"));

        assert_eq!(mode.intercept(&state, &down), Interception::Consumed);
        assert_eq!(mode.suggest_index, -1);
        assert_eq!(mode.prediction(&state).as_deref(), Some("789"));
    }

    #[test]
    fn test_tab_inserts_prediction_and_resets_index() {
        let mut mode = mode();
        mode.suggest_index = 2;
        let state = EditState::new("ac:");
        let tab = Token::control(ControlTag::Tab);
        assert_eq!(
            mode.intercept(&state, &tab),
            Interception::Insert("789".into())
        );
        assert_eq!(mode.suggest_index, 0);
    }

    #[test]
    fn test_tab_without_prediction_passes_through() {
        let mut mode = AutoCompleteMode::new(CompletionRule::default());
        let state = EditState::new("ac:");
        let tab = Token::control(ControlTag::Tab);
        assert_eq!(mode.intercept(&state, &tab), Interception::PassThrough);
    }

    #[test]
    fn test_other_tokens_pass_through() {
        let mut mode = mode();
        let state = EditState::new("");
        assert_eq!(
            mode.intercept(&state, &Token::printable("1")),
            Interception::PassThrough
        );
        assert_eq!(
            mode.intercept(&state, &Token::control(ControlTag::CursorBack)),
            Interception::PassThrough
        );
    }

    #[test]
    fn test_rendering_appends_dimmed_suggestion() {
        let mode = mode();
        let state = EditState::new("ac:").with_buffer("4");
        let text = mode.rendering_text(&state);
        assert!(text.starts_with("ac:4"));
        assert_eq!(strip_ansi_escapes::strip_str(&text), "ac:456");
        // Cursor stays at the end of the typed text, not the suggestion.
        assert_eq!(mode.cursor_column(&state), 4);
    }

    #[test]
    fn test_rendering_without_suggestion() {
        let mode = mode();
        let state = EditState::new("ac:").with_buffer("456");
        assert_eq!(mode.rendering_text(&state), "ac:456");
    }
}
