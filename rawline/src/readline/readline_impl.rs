// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteSource, ControlTag, EditState, KeyDecoder, LineMode, NoopModeSwitch,
            RawModeGuard, ReadingMode, ReadlineError, Renderer, SendRawTerminal,
            TerminalModeSwitch, Token, Transition, apply, ok};

/// # Mental model and overview
///
/// This is a replacement for [`std::io::BufRead::read_line`] for terminals in raw
/// mode. Each call to [`Readline::read_line`]:
///
/// 1. Switches the terminal to raw mode (restored when the call returns, however it
///    returns).
/// 2. Draws the prompt.
/// 3. Loops: decode one token, [`apply()`] it, redraw. Stops on Enter or when the input
///    runs out.
/// 4. Emits a line feed and returns the buffer.
///
/// The input, output and raw mode switch are injected, so the whole loop can run
/// against in-memory fixtures (the `test_fixtures` module, behind the feature of the
/// same name).
///
/// # State kept across reads
///
/// - The decoder. Bytes that arrive after Enter in the same `read()` are not lost.
/// - The clipboard. Text cut in one read can be pasted in the next.
pub struct Readline {
    pub input: Box<dyn ByteSource>,
    pub output: Box<SendRawTerminal>,
    pub mode_switch: Box<dyn TerminalModeSwitch>,
    pub decoder: KeyDecoder,
    pub clipboard: String,
}

impl std::fmt::Debug for Readline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Readline")
            .field("decoder", &self.decoder)
            .field("clipboard", &self.clipboard)
            .finish_non_exhaustive()
    }
}

impl Readline {
    #[must_use]
    pub fn new(
        input: Box<dyn ByteSource>,
        output: Box<SendRawTerminal>,
        mode_switch: Box<dyn TerminalModeSwitch>,
    ) -> Self {
        Self {
            input,
            output,
            mode_switch,
            decoder: KeyDecoder::new(),
            clipboard: String::new(),
        }
    }

    /// No raw mode switching. For inputs that are not terminals.
    #[must_use]
    pub fn new_without_raw_mode(
        input: Box<dyn ByteSource>,
        output: Box<SendRawTerminal>,
    ) -> Self {
        Self::new(input, output, Box::new(NoopModeSwitch))
    }

    /// Read from the controlling terminal (stdin, or `/dev/tty` if stdin is redirected)
    /// and draw to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no controlling terminal.
    #[cfg(unix)]
    pub fn try_new_stdio() -> Result<Self, ReadlineError> {
        Ok(Self::new(
            Box::new(crate::TtyByteSource::try_new()?),
            Box::new(std::io::stdout()),
            Box::new(crate::TermiosModeSwitch::default()),
        ))
    }

    /// Read one line with the plain [`LineMode`] and no prompt.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn read_plain_line(&mut self) -> Result<String, ReadlineError> {
        self.read_line("", &mut LineMode)
    }

    /// Read one line and return what was typed.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn read_line(
        &mut self,
        prompt: &str,
        mode: &mut dyn ReadingMode,
    ) -> Result<String, ReadlineError> {
        self.read_line_state(prompt, mode).map(|state| state.text())
    }

    /// Read one line and return the final [`EditState`] (cursor position included).
    ///
    /// End of input counts as Enter: whatever was typed so far is returned.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::TerminalSettings`] if raw mode can't be entered.
    /// - [`ReadlineError::InvalidSequence`] if the input contains a malformed or cut off
    ///   CSI or OSC sequence. The line typed so far is discarded.
    /// - [`ReadlineError::IO`] if reading input or writing output fails.
    pub fn read_line_state(
        &mut self,
        prompt: &str,
        mode: &mut dyn ReadingMode,
    ) -> Result<EditState, ReadlineError> {
        let Readline {
            input,
            output,
            mode_switch,
            decoder,
            clipboard,
        } = self;

        let _guard = RawModeGuard::try_new(mode_switch.as_mut())
            .map_err(|report| ReadlineError::TerminalSettings(report.to_string()))?;

        let mut state = EditState::new(prompt).with_clipboard(std::mem::take(clipboard));
        let result = edit_until_done(
            input.as_mut(),
            output.as_mut(),
            decoder,
            &mut state,
            mode,
        );
        clipboard.clone_from(&state.clipboard);

        match result {
            Ok(()) => {
                tracing::debug!(
                    message = "read_line done",
                    end = state.end(),
                    point = state.point
                );
                Ok(state)
            }
            Err(error) => {
                decoder.reset();
                tracing::warn!(message = "read_line failed", error = %error);
                Err(error)
            }
        }
    }
}

/// The decode, apply, render loop.
fn edit_until_done(
    input: &mut dyn ByteSource,
    output: &mut SendRawTerminal,
    decoder: &mut KeyDecoder,
    state: &mut EditState,
    mode: &mut dyn ReadingMode,
) -> Result<(), ReadlineError> {
    let mut renderer = Renderer::new(output);
    renderer.redraw(state, mode)?;

    loop {
        let token = match decoder.next_token(input) {
            Ok(token) => token,
            Err(ReadlineError::StreamClosed) => Token::control(ControlTag::Submit),
            Err(error) => return Err(error),
        };
        tracing::debug!(message = "token", token = ?token);

        match apply(state, &token, mode) {
            Transition::Redraw => renderer.redraw(state, mode)?,
            Transition::ClearScreen => {
                renderer.clear_screen()?;
                renderer.redraw(state, mode)?;
            }
            Transition::Reject => {
                renderer.bell()?;
                renderer.redraw(state, mode)?;
            }
            Transition::Finish => {
                renderer.finish()?;
                return ok!();
            }
        }
    }
}
