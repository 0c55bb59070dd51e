// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GraphemeBuffer, is_word_cluster};

fn is_word_at(buffer: &GraphemeBuffer, index: usize) -> bool {
    buffer.get(index).is_some_and(is_word_cluster)
}

/// Scan back from `point`: skip non word clusters, then word clusters. Returns the index
/// where that word starts.
///
/// ```text
/// "hello world   "
///        ▲      ▲
///        │      └ point
///        └ result
/// ```
#[must_use]
pub fn find_prev_word_start(buffer: &GraphemeBuffer, point: usize) -> usize {
    let mut cursor = point.min(buffer.len());
    while cursor > 0 && !is_word_at(buffer, cursor - 1) {
        cursor -= 1;
    }
    while cursor > 0 && is_word_at(buffer, cursor - 1) {
        cursor -= 1;
    }
    cursor
}

/// Scan forward from `point`: skip non word clusters, then word clusters. Returns the
/// index just past the end of that word.
#[must_use]
pub fn find_next_word_end(buffer: &GraphemeBuffer, point: usize) -> usize {
    let end = buffer.len();
    let mut cursor = point.min(end);
    while cursor < end && !is_word_at(buffer, cursor) {
        cursor += 1;
    }
    while cursor < end && is_word_at(buffer, cursor) {
        cursor += 1;
    }
    cursor
}
