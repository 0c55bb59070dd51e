// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ReadingMode;

/// Plain prompt: shows what is typed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineMode;

impl ReadingMode for LineMode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Acceptance, EditState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_mode_shows_prompt_and_buffer() {
        let mut state = EditState::new("> ").with_buffer("aあb");
        state.point = 2;
        let mode = LineMode;
        assert_eq!(mode.rendering_text(&state), "> aあb");
        assert_eq!(mode.cursor_column(&state), 5);
    }

    #[test]
    fn test_line_mode_accepts_anything() {
        assert_eq!(LineMode.accept_printable("\t"), Acceptance::Accept("\t".into()));
    }
}
