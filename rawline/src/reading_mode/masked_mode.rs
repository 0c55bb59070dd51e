// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ReadingMode;
use crate::{DEFAULT_MASK_GLYPH, EditState, text_columns};

/// Shows one replacement glyph per buffered cluster. The cursor follows the glyphs, so
/// a wide character in the buffer still moves it by the width of one glyph.
#[derive(Debug, Clone)]
pub struct MaskedMode {
    pub replacement: String,
}

impl Default for MaskedMode {
    fn default() -> Self { Self::new(DEFAULT_MASK_GLYPH) }
}

impl MaskedMode {
    #[must_use]
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }
}

impl ReadingMode for MaskedMode {
    fn rendering_text(&self, state: &EditState) -> String {
        format!("{}{}", state.prompt, self.replacement.repeat(state.end()))
    }

    fn cursor_column(&self, state: &EditState) -> usize {
        text_columns(&state.prompt) + state.point * text_columns(&self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_masked_mode_default_glyph() {
        let mut state = EditState::new("pw: ").with_buffer("aあ");
        let mode = MaskedMode::default();
        assert_eq!(mode.rendering_text(&state), "pw: ∗∗");
        assert_eq!(mode.cursor_column(&state), 6);
        state.point = 1;
        assert_eq!(mode.cursor_column(&state), 5);
    }

    #[test]
    fn test_masked_mode_custom_glyph() {
        let state = EditState::new("").with_buffer("abc");
        let mode = MaskedMode::new("*");
        assert_eq!(mode.rendering_text(&state), "***");
        assert_eq!(mode.cursor_column(&state), 3);
    }
}
