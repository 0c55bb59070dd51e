// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, InlineVec};
use strum_macros::{Display, EnumIter};

/// Named editing commands a key press can map to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ControlTag {
    /// Ctrl+A, Home.
    Bol,
    /// Ctrl+E, End.
    Eol,
    /// Ctrl+H, DEL.
    Backspace,
    /// Ctrl+D, `CSI 3 ~`.
    Delete,
    /// Ctrl+U.
    CutToBol,
    /// Ctrl+K.
    CutToEol,
    /// Ctrl+W.
    CutWord,
    /// Ctrl+Y.
    Paste,
    /// Ctrl+F, right arrow.
    CursorForward,
    /// Ctrl+B, left arrow.
    CursorBack,
    /// Up arrow.
    CursorUp,
    /// Down arrow.
    CursorDown,
    /// Horizontal tab.
    Tab,
    /// LF, CR, NUL.
    Submit,
    /// Ctrl+L.
    ClearScreen,
    /// Alt+F, Alt/Ctrl+Right.
    NextWord,
    /// Alt+B, Alt/Ctrl+Left.
    PrevWord,
    /// Ctrl+T.
    Transpose,
}

/// One atomic unit of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A complete UTF-8 encoded character that is not a control byte.
    Printable(InlineString),
    /// An editing command. `repeat` is at least 1 and only differs from 1 for CSI
    /// cursor movement that carries a count (`ESC [ 3 D`).
    Control { tag: ControlTag, repeat: usize },
    /// Bytes that form a complete unit but have no meaning to the editor. Ignored.
    Unrecognized(InlineVec<u8>),
}

impl Token {
    #[must_use]
    pub fn control(tag: ControlTag) -> Self { Token::Control { tag, repeat: 1 } }

    #[must_use]
    pub fn control_repeat(tag: ControlTag, repeat: usize) -> Self {
        Token::Control {
            tag,
            repeat: repeat.max(1),
        }
    }

    #[must_use]
    pub fn printable(text: &str) -> Self { Token::Printable(text.into()) }

    #[must_use]
    pub fn unrecognized(bytes: &[u8]) -> Self {
        Token::Unrecognized(bytes.iter().copied().collect())
    }

    /// Returns the tag if this is a [`Token::Control`].
    #[must_use]
    pub fn tag(&self) -> Option<ControlTag> {
        match self {
            Token::Control { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    #[must_use]
    pub fn is(&self, tag: ControlTag) -> bool { self.tag() == Some(tag) }
}

/// Single byte control characters recognized in the normal decoder state.
#[must_use]
pub fn control_tag_for_byte(byte: u8) -> Option<ControlTag> {
    let tag = match byte {
        0x00 | 0x0A | 0x0D => ControlTag::Submit,
        0x01 => ControlTag::Bol,
        0x02 => ControlTag::CursorBack,
        0x04 => ControlTag::Delete,
        0x05 => ControlTag::Eol,
        0x06 => ControlTag::CursorForward,
        0x08 | 0x7F => ControlTag::Backspace,
        0x09 => ControlTag::Tab,
        0x0B => ControlTag::CutToEol,
        0x0C => ControlTag::ClearScreen,
        0x14 => ControlTag::Transpose,
        0x15 => ControlTag::CutToBol,
        0x17 => ControlTag::CutWord,
        0x19 => ControlTag::Paste,
        _ => return None,
    };
    Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0x01, ControlTag::Bol ; "ctrl a")]
    #[test_case(0x05, ControlTag::Eol ; "ctrl e")]
    #[test_case(0x08, ControlTag::Backspace ; "ctrl h")]
    #[test_case(0x7F, ControlTag::Backspace ; "del")]
    #[test_case(0x04, ControlTag::Delete ; "ctrl d")]
    #[test_case(0x15, ControlTag::CutToBol ; "ctrl u")]
    #[test_case(0x0B, ControlTag::CutToEol ; "ctrl k")]
    #[test_case(0x17, ControlTag::CutWord ; "ctrl w")]
    #[test_case(0x19, ControlTag::Paste ; "ctrl y")]
    #[test_case(0x06, ControlTag::CursorForward ; "ctrl f")]
    #[test_case(0x02, ControlTag::CursorBack ; "ctrl b")]
    #[test_case(0x0A, ControlTag::Submit ; "line feed")]
    #[test_case(0x0D, ControlTag::Submit ; "carriage return")]
    #[test_case(0x00, ControlTag::Submit ; "nul")]
    #[test_case(0x0C, ControlTag::ClearScreen ; "ctrl l")]
    #[test_case(0x14, ControlTag::Transpose ; "ctrl t")]
    #[test_case(0x09, ControlTag::Tab ; "tab")]
    fn test_control_tag_for_byte(byte: u8, expected: ControlTag) {
        assert_eq!(control_tag_for_byte(byte), Some(expected));
    }

    #[test]
    fn test_unmapped_control_bytes() {
        for byte in [0x03_u8, 0x07, 0x0E, 0x1C, b'a', b' '] {
            assert_eq!(control_tag_for_byte(byte), None, "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_control_repeat_is_at_least_one() {
        assert_eq!(
            Token::control_repeat(ControlTag::CursorBack, 0),
            Token::control(ControlTag::CursorBack)
        );
        assert!(Token::control(ControlTag::Paste).is(ControlTag::Paste));
        assert_eq!(Token::printable("a").tag(), None);
    }
}
