// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{handle_backspace, handle_bol, handle_cursor_back, handle_cursor_forward,
            handle_cut_to_bol, handle_cut_to_eol, handle_cut_word, handle_delete,
            handle_eol, handle_next_word, handle_paste, handle_prev_word,
            handle_printable, handle_submit, handle_transpose, insert_text};
use crate::{ControlTag, EditState, Interception, ReadingMode, Token};

/// The side effect the read loop owes the terminal after a token was applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Redraw the line.
    Redraw,
    /// Erase the screen, home the cursor, then redraw the line.
    ClearScreen,
    /// The mode refused the input. Ring the bell, then redraw the line.
    Reject,
    /// The line is complete. Emit a line feed and return the buffer.
    Finish,
}

/// Apply one token to `state`.
///
/// The mode sees the token first (see [`ReadingMode::intercept`]) and typed clusters go
/// through [`ReadingMode::accept_printable`]. Control tokens without an effect in the
/// current state (Backspace at the start, Delete at the end, Up and Down outside of
/// autocomplete) leave it unchanged.
pub fn apply(
    state: &mut EditState,
    token: &Token,
    mode: &mut dyn ReadingMode,
) -> Transition {
    state.last_token = Some(token.clone());

    match mode.intercept(state, token) {
        Interception::PassThrough => {}
        Interception::Consumed => return Transition::Redraw,
        Interception::Insert(text) => return insert_text(state, &text),
    }

    match token {
        Token::Printable(cluster) => handle_printable(state, cluster, mode),
        Token::Control { tag, repeat } => apply_control(state, *tag, *repeat, mode),
        Token::Unrecognized(_) => Transition::Redraw,
    }
}

fn apply_control(
    state: &mut EditState,
    tag: ControlTag,
    repeat: usize,
    mode: &mut dyn ReadingMode,
) -> Transition {
    match tag {
        ControlTag::Bol => handle_bol(state),
        ControlTag::Eol => handle_eol(state),
        ControlTag::Backspace => handle_backspace(state),
        ControlTag::Delete => handle_delete(state),
        ControlTag::CutToBol => handle_cut_to_bol(state),
        ControlTag::CutToEol => handle_cut_to_eol(state),
        ControlTag::CutWord => handle_cut_word(state),
        ControlTag::Paste => handle_paste(state),
        ControlTag::CursorForward => handle_cursor_forward(state, repeat),
        ControlTag::CursorBack => handle_cursor_back(state, repeat),
        ControlTag::NextWord => handle_next_word(state),
        ControlTag::PrevWord => handle_prev_word(state),
        ControlTag::Transpose => handle_transpose(state),
        ControlTag::Submit => handle_submit(state),
        ControlTag::ClearScreen => Transition::ClearScreen,
        // A tab is text unless the mode intercepted it.
        ControlTag::Tab => handle_printable(state, "\t", mode),
        ControlTag::CursorUp | ControlTag::CursorDown => Transition::Redraw,
    }
}
