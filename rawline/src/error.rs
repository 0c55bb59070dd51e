// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;
use strum_macros::Display;

/// The two escape sequence families that can be cut short by the input stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum SequenceKind {
    #[strum(serialize = "CSI")]
    Csi,
    #[strum(serialize = "OSC")]
    Osc,
}

/// Error returned from [`crate::Readline::read_line`] and the prompt helpers.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ReadlineError {
    /// Reading the input source or writing the output sink failed.
    #[error(transparent)]
    #[diagnostic(code(rawline::io))]
    IO(#[from] io::Error),

    /// An escape sequence ended without its final byte (CSI) or string terminator
    /// (OSC). The read that saw it is aborted.
    #[error("Invalid {0} sequence")]
    #[diagnostic(
        code(rawline::decoder::invalid_sequence),
        help("The terminal sent an escape sequence that was cut off or malformed")
    )]
    InvalidSequence(SequenceKind),

    /// The input source reached end-of-stream on a token boundary. The read loop turns
    /// this into a submit, so callers of `read_line` never see it.
    #[error("input stream closed")]
    #[diagnostic(code(rawline::decoder::stream_closed))]
    StreamClosed,

    /// The terminal could not be switched into raw mode.
    #[error("failed to change terminal settings: {0}")]
    #[diagnostic(
        code(rawline::raw_mode),
        help("Make sure stdin or /dev/tty is an interactive terminal")
    )]
    TerminalSettings(String),

    /// A prompt helper got an answer outside of the accepted set.
    #[error("Invalid input: '{0}'")]
    #[diagnostic(code(rawline::prompt::invalid_input))]
    InvalidInput(String),
}

impl ReadlineError {
    #[must_use]
    pub fn is_invalid_sequence(&self) -> bool {
        matches!(self, ReadlineError::InvalidSequence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_sequence_messages() {
        assert_eq!(
            ReadlineError::InvalidSequence(SequenceKind::Csi).to_string(),
            "Invalid CSI sequence"
        );
        assert_eq!(
            ReadlineError::InvalidSequence(SequenceKind::Osc).to_string(),
            "Invalid OSC sequence"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let error = ReadlineError::InvalidInput("maybe".into());
        assert_eq!(error.to_string(), "Invalid input: 'maybe'");
        assert!(!error.is_invalid_sequence());
    }

    #[test]
    fn test_io_error_is_wrapped() {
        let error: ReadlineError = io::Error::other("boom").into();
        assert!(matches!(error, ReadlineError::IO(_)));
        assert_eq!(error.to_string(), "boom");
    }
}
