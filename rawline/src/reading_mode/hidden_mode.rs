// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ReadingMode;
use crate::{EditState, text_columns};

/// Nothing typed is echoed, not even its length. The cursor stays right after the
/// prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenMode;

impl ReadingMode for HiddenMode {
    fn rendering_text(&self, state: &EditState) -> String { state.prompt.clone() }

    fn cursor_column(&self, state: &EditState) -> usize { text_columns(&state.prompt) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hidden_mode_never_shows_buffer() {
        let state = EditState::new("pw: ").with_buffer("secret");
        assert_eq!(HiddenMode.rendering_text(&state), "pw: ");
        assert_eq!(HiddenMode.cursor_column(&state), 4);
    }
}
