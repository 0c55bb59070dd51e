// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteSource, ControlTag, Token, control_tag_for_byte,
            csi::{CSI_FINAL_RANGE, CSI_INTERMEDIATE_RANGE, CSI_PARAM_RANGE,
                  csi_to_token}};
use crate::{InlineVec, ReadlineError, SequenceKind};

const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;

/// Where the decoder is inside the token it is currently assembling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// On a token boundary.
    #[default]
    Normal,
    /// Saw `ESC`, waiting for the byte that picks the sequence family.
    SawEsc,
    /// Inside `ESC [`, reading parameter bytes.
    InCsiParams,
    /// Inside `ESC [`, reading intermediate bytes. No more parameters allowed.
    InCsiIntermediate,
    /// Inside `ESC ]`, reading the string body.
    InOsc,
    /// Inside an OSC body, saw `ESC`. Only `\` (string terminator) may follow.
    InOscSawEsc,
    /// Saw `ESC N` or `ESC O`, the next byte completes the sequence.
    InSingleShift,
    /// Inside a multi byte UTF-8 character.
    InUtf8 { remaining: u8 },
}

impl DecoderState {
    /// `true` when a token is partially assembled.
    #[must_use]
    pub fn is_pending(&self) -> bool { !matches!(self, DecoderState::Normal) }
}

/// Byte to [`Token`] state machine.
///
/// Feed bytes with [`KeyDecoder::advance`] (pure) or pull whole tokens from a
/// [`ByteSource`] with [`KeyDecoder::next_token`]. A decoder is reusable across reads;
/// after any returned token or error it is back in [`DecoderState::Normal`].
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecoderState,
    /// Bytes of the token being assembled, including the introducer.
    pending: InlineVec<u8>,
    /// Index into `pending` where CSI parameter bytes start.
    csi_params_start: usize,
    /// Index into `pending` where CSI parameter bytes end.
    csi_params_end: usize,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> DecoderState { self.state }

    /// Discard any partially assembled token.
    pub fn reset(&mut self) {
        self.state = DecoderState::Normal;
        self.pending.clear();
        self.csi_params_start = 0;
        self.csi_params_end = 0;
    }

    /// Pull bytes from `source` until one whole token is assembled.
    ///
    /// Blocks once via [`ByteSource::wait_until_readable`] before the first byte.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::StreamClosed`] if the source ends on a token boundary.
    /// - [`ReadlineError::InvalidSequence`] if a CSI or OSC sequence is malformed or the
    ///   source ends inside one.
    /// - [`ReadlineError::IO`] if the source fails.
    pub fn next_token(
        &mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Token, ReadlineError> {
        source.wait_until_readable()?;
        loop {
            let Some(byte) = source.read_byte()? else {
                return Err(self.end_of_stream());
            };
            if let Some(token) = self.advance(byte)? {
                return Ok(token);
            }
        }
    }

    /// Decide what running out of bytes means in the current state, and reset.
    fn end_of_stream(&mut self) -> ReadlineError {
        let error = match self.state {
            DecoderState::Normal => ReadlineError::StreamClosed,
            DecoderState::InCsiParams | DecoderState::InCsiIntermediate => {
                ReadlineError::InvalidSequence(SequenceKind::Csi)
            }
            DecoderState::InOsc | DecoderState::InOscSawEsc => {
                ReadlineError::InvalidSequence(SequenceKind::Osc)
            }
            // A dangling ESC, SS2/SS3 introducer or truncated UTF-8 character is dropped
            // and the next read sees a clean end-of-stream.
            DecoderState::SawEsc
            | DecoderState::InSingleShift
            | DecoderState::InUtf8 { .. } => {
                tracing::debug!(
                    message = "dropping incomplete token at end of stream",
                    pending = ?self.pending.as_slice()
                );
                ReadlineError::StreamClosed
            }
        };
        self.reset();
        error
    }

    /// Feed one byte. Returns `Ok(Some(token))` when the byte completes a token,
    /// `Ok(None)` when more bytes are needed.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::InvalidSequence`] when the byte cannot continue the CSI or OSC
    /// sequence in progress. The decoder is reset before returning.
    pub fn advance(&mut self, byte: u8) -> Result<Option<Token>, ReadlineError> {
        match self.state {
            DecoderState::Normal => Ok(self.advance_normal(byte)),
            DecoderState::SawEsc => Ok(self.advance_saw_esc(byte)),
            DecoderState::InCsiParams | DecoderState::InCsiIntermediate => {
                self.advance_csi(byte)
            }
            DecoderState::InOsc => {
                self.pending.push(byte);
                if byte == ESC {
                    self.state = DecoderState::InOscSawEsc;
                }
                Ok(None)
            }
            DecoderState::InOscSawEsc => {
                if byte == b'\\' {
                    self.pending.push(byte);
                    Ok(Some(self.finish_unrecognized()))
                } else {
                    self.reset();
                    Err(ReadlineError::InvalidSequence(SequenceKind::Osc))
                }
            }
            DecoderState::InSingleShift => {
                self.pending.push(byte);
                Ok(Some(self.finish_unrecognized()))
            }
            DecoderState::InUtf8 { remaining } => Ok(self.advance_utf8(byte, remaining)),
        }
    }

    fn advance_normal(&mut self, byte: u8) -> Option<Token> {
        if byte == ESC {
            self.pending.push(byte);
            self.state = DecoderState::SawEsc;
            return None;
        }

        if let Some(tag) = control_tag_for_byte(byte) {
            return Some(Token::control(tag));
        }

        match byte {
            0x20..DEL => {
                let text = [byte];
                // ASCII is always valid UTF-8.
                let text = std::str::from_utf8(&text).unwrap_or_default();
                Some(Token::printable(text))
            }
            0xC0..=0xDF => self.begin_utf8(byte, 1),
            0xE0..=0xEF => self.begin_utf8(byte, 2),
            0xF0..=0xF7 => self.begin_utf8(byte, 3),
            _ => Some(Token::unrecognized(&[byte])),
        }
    }

    fn advance_saw_esc(&mut self, byte: u8) -> Option<Token> {
        match byte {
            b'[' => {
                self.pending.push(byte);
                self.csi_params_start = self.pending.len();
                self.csi_params_end = self.pending.len();
                self.state = DecoderState::InCsiParams;
                None
            }
            b']' => {
                self.pending.push(byte);
                self.state = DecoderState::InOsc;
                None
            }
            b'N' | b'O' => {
                self.pending.push(byte);
                self.state = DecoderState::InSingleShift;
                None
            }
            b'f' => {
                self.reset();
                Some(Token::control(ControlTag::NextWord))
            }
            b'b' => {
                self.reset();
                Some(Token::control(ControlTag::PrevWord))
            }
            _ => {
                self.pending.push(byte);
                Some(self.finish_unrecognized())
            }
        }
    }

    fn advance_csi(&mut self, byte: u8) -> Result<Option<Token>, ReadlineError> {
        let in_params = self.state == DecoderState::InCsiParams;

        if in_params && CSI_PARAM_RANGE.contains(&byte) {
            self.pending.push(byte);
            self.csi_params_end = self.pending.len();
            return Ok(None);
        }

        if CSI_INTERMEDIATE_RANGE.contains(&byte) {
            self.pending.push(byte);
            self.state = DecoderState::InCsiIntermediate;
            return Ok(None);
        }

        if CSI_FINAL_RANGE.contains(&byte) {
            self.pending.push(byte);
            let params = &self.pending[self.csi_params_start..self.csi_params_end];
            let token = csi_to_token(&self.pending, params, byte);
            self.reset();
            return Ok(Some(token));
        }

        tracing::debug!(
            message = "invalid byte inside CSI sequence",
            byte = byte,
            pending = ?self.pending.as_slice()
        );
        self.reset();
        Err(ReadlineError::InvalidSequence(SequenceKind::Csi))
    }

    fn begin_utf8(&mut self, lead: u8, remaining: u8) -> Option<Token> {
        self.pending.push(lead);
        self.state = DecoderState::InUtf8 { remaining };
        None
    }

    fn advance_utf8(&mut self, byte: u8, remaining: u8) -> Option<Token> {
        self.pending.push(byte);
        if remaining > 1 {
            self.state = DecoderState::InUtf8 {
                remaining: remaining - 1,
            };
            return None;
        }

        let token = match std::str::from_utf8(&self.pending) {
            Ok(text) => Token::printable(text),
            Err(_) => Token::unrecognized(&self.pending),
        };
        self.reset();
        Some(token)
    }

    fn finish_unrecognized(&mut self) -> Token {
        let token = Token::unrecognized(&self.pending);
        self.reset();
        token
    }
}
