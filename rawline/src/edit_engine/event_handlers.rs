// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words bol eol

use super::{Transition, find_next_word_end, find_prev_word_start};
use crate::{Acceptance, EditState, ReadingMode};

/// Insert `text` at the cursor and move the cursor past it.
pub fn insert_text(state: &mut EditState, text: &str) -> Transition {
    state.point = state.buffer.insert_str(state.point, text);
    Transition::Redraw
}

/// Run a typed cluster through the mode's filter, then insert it.
pub fn handle_printable(
    state: &mut EditState,
    cluster: &str,
    mode: &mut dyn ReadingMode,
) -> Transition {
    match mode.accept_printable(cluster) {
        Acceptance::Accept(text) => insert_text(state, &text),
        Acceptance::Reject => Transition::Reject,
    }
}

pub fn handle_backspace(state: &mut EditState) -> Transition {
    if state.point > 0 {
        state.buffer.remove(state.point - 1);
        state.point -= 1;
    }
    Transition::Redraw
}

pub fn handle_delete(state: &mut EditState) -> Transition {
    if state.point < state.end() {
        state.buffer.remove(state.point);
    }
    Transition::Redraw
}

pub fn handle_bol(state: &mut EditState) -> Transition {
    state.point = 0;
    Transition::Redraw
}

pub fn handle_eol(state: &mut EditState) -> Transition {
    state.point = state.end();
    Transition::Redraw
}

pub fn handle_cursor_forward(state: &mut EditState, repeat: usize) -> Transition {
    state.set_point(state.point.saturating_add(repeat));
    Transition::Redraw
}

pub fn handle_cursor_back(state: &mut EditState, repeat: usize) -> Transition {
    state.set_point(state.point.saturating_sub(repeat));
    Transition::Redraw
}

/// Everything before the cursor goes to the clipboard.
pub fn handle_cut_to_bol(state: &mut EditState) -> Transition {
    state.clipboard = state.buffer.drain(0..state.point);
    state.point = 0;
    Transition::Redraw
}

/// Everything from the cursor on goes to the clipboard.
pub fn handle_cut_to_eol(state: &mut EditState) -> Transition {
    state.clipboard = state.buffer.drain(state.point..state.end());
    Transition::Redraw
}

/// The word before the cursor, and any separators between it and the cursor, go to
/// the clipboard.
pub fn handle_cut_word(state: &mut EditState) -> Transition {
    let start = find_prev_word_start(&state.buffer, state.point);
    state.clipboard = state.buffer.drain(start..state.point);
    state.point = start;
    Transition::Redraw
}

/// Insert the clipboard at the cursor. The clipboard is kept, so pasting again repeats
/// it.
pub fn handle_paste(state: &mut EditState) -> Transition {
    let clipboard = state.clipboard.clone();
    insert_text(state, &clipboard)
}

pub fn handle_next_word(state: &mut EditState) -> Transition {
    state.point = find_next_word_end(&state.buffer, state.point);
    Transition::Redraw
}

pub fn handle_prev_word(state: &mut EditState) -> Transition {
    state.point = find_prev_word_start(&state.buffer, state.point);
    Transition::Redraw
}

/// Swap the clusters on either side of the cursor. The cursor stays put.
///
/// ```text
/// "ab|c"  ─▶  "ac|b"    swap around the cursor
/// "abc|"  ─▶  "abc|"    at the end, nothing after the cursor
/// "|abc"  ─▶  "|abc"    at the start, nothing before the cursor
/// ```
pub fn handle_transpose(state: &mut EditState) -> Transition {
    if state.point > 0 && state.point < state.end() {
        state.buffer.swap(state.point - 1, state.point);
    }
    Transition::Redraw
}

pub fn handle_submit(state: &mut EditState) -> Transition {
    state.done = true;
    Transition::Finish
}
