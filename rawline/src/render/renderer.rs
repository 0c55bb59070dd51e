// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditState, ReadingMode, ok};
use crossterm::{QueueableCommand,
                cursor::{MoveRight, MoveTo},
                style::Print,
                terminal::{Clear, ClearType}};
use std::io::{self, Write};

pub const BELL: &str = "\x07";
pub const LINE_FEED: &str = "\n";

/// Writes redraws and the other editor side effects to a terminal.
pub struct Renderer<'a> {
    term: &'a mut dyn Write,
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

impl<'a> Renderer<'a> {
    pub fn new(term: &'a mut dyn Write) -> Self { Self { term } }

    /// Erase the current line and draw `mode`'s view of `state`, leaving the cursor at
    /// [`ReadingMode::cursor_column`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn redraw(&mut self, state: &EditState, mode: &dyn ReadingMode) -> io::Result<()> {
        let text = mode.rendering_text(state);
        let column = mode.cursor_column(state);

        let mut buffer: Vec<u8> = Vec::with_capacity(text.len() + 16);
        buffer
            .queue(Clear(ClearType::CurrentLine))?
            .queue(Print("\r"))?
            .queue(Print(text))?
            .queue(Print("\r"))?;
        // `CSI 0 C` would still move one column on most terminals.
        if column > 0 {
            buffer.queue(MoveRight(u16::try_from(column).unwrap_or(u16::MAX)))?;
        }

        self.term.write_all(&buffer)?;
        self.term.flush()?;

        ok!()
    }

    /// Erase the screen and move the cursor to the top left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        let mut buffer: Vec<u8> = vec![];
        buffer.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        self.term.write_all(&buffer)?;
        self.term.flush()?;
        ok!()
    }

    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn bell(&mut self) -> io::Result<()> {
        self.term.write_all(BELL.as_bytes())?;
        self.term.flush()?;
        ok!()
    }

    /// End the line after Submit.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn finish(&mut self) -> io::Result<()> {
        self.term.write_all(LINE_FEED.as_bytes())?;
        self.term.flush()?;
        ok!()
    }
}
