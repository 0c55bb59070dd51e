// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Maps a complete CSI sequence to a [`Token`].
//!
//! ## Sequence format
//!
//! ```text
//! ESC [ <parameter bytes 0x30–0x3F>* <intermediate bytes 0x20–0x2F>* <final byte 0x40–0x7E>
//! ```
//!
//! Examples:
//! - `ESC [ D` - Left arrow
//! - `ESC [ 3 D` - Left arrow, repeat 3
//! - `ESC [ 1 ; 3 C` - Alt+Right (base: 1, modifier: 3, final: C)
//! - `ESC [ 3 ~` - Delete

use super::{ControlTag, Token};
use crate::InlineVec;

pub const CSI_PARAM_RANGE: std::ops::RangeInclusive<u8> = 0x30..=0x3F;
pub const CSI_INTERMEDIATE_RANGE: std::ops::RangeInclusive<u8> = 0x20..=0x2F;
pub const CSI_FINAL_RANGE: std::ops::RangeInclusive<u8> = 0x40..=0x7E;

/// Modifier parameter values (1 + bitfield of Shift=1, Alt=2, Ctrl=4) that turn an
/// arrow key into word motion.
const MODIFIER_ALT: u16 = 3;
const MODIFIER_CTRL: u16 = 5;

/// Parse the numeric parameters of a CSI sequence. `params` is everything between
/// `ESC [` and the first intermediate or final byte. Private markers (`?`, `<`, ...)
/// and empty fields are skipped.
#[must_use]
pub fn parse_csi_params(params: &[u8]) -> InlineVec<u16> {
    params
        .split(|byte| *byte == b';')
        .filter(|field| !field.is_empty() && field.iter().all(u8::is_ascii_digit))
        .map(|field| {
            field.iter().fold(0_u16, |acc, digit| {
                acc.saturating_mul(10).saturating_add(u16::from(digit - b'0'))
            })
        })
        .collect()
}

/// Build the token for a complete CSI sequence. `raw` is the whole sequence including
/// the leading `ESC [`, `params` the parameter bytes and `final_byte` the last byte.
#[must_use]
pub fn csi_to_token(raw: &[u8], params: &[u8], final_byte: u8) -> Token {
    let numbers = parse_csi_params(params);
    let first = numbers.first().copied().unwrap_or(1);
    let modifier = numbers.get(1).copied();
    let is_word_modifier = matches!(modifier, Some(MODIFIER_ALT | MODIFIER_CTRL));

    match final_byte {
        b'A' => Token::control(ControlTag::CursorUp),
        b'B' => Token::control(ControlTag::CursorDown),
        b'C' if is_word_modifier => Token::control(ControlTag::NextWord),
        b'D' if is_word_modifier => Token::control(ControlTag::PrevWord),
        b'C' => Token::control_repeat(ControlTag::CursorForward, usize::from(first)),
        b'D' => Token::control_repeat(ControlTag::CursorBack, usize::from(first)),
        b'H' => Token::control(ControlTag::Bol),
        b'F' => Token::control(ControlTag::Eol),
        b'~' => match first {
            1 | 7 => Token::control(ControlTag::Bol),
            4 | 8 => Token::control(ControlTag::Eol),
            3 => Token::control(ControlTag::Delete),
            _ => Token::unrecognized(raw),
        },
        _ => Token::unrecognized(raw),
    }
}
