// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr icanon vmin vtime

//! Unix/Linux/macOS raw mode using rustix's safe termios API.

use super::TerminalModeSwitch;
use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File, io};

/// Either stdin or `/dev/tty`.
///
/// Stdin is used when it is a terminal. When it is redirected (`echo x | app`) the
/// controlling terminal is opened directly.
#[derive(Debug)]
pub enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl TerminalFd {
    /// Gets a file descriptor for the controlling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
    pub fn try_open() -> io::Result<Self> {
        let stdin = io::stdin();
        if termios::isatty(&stdin) {
            Ok(TerminalFd::Stdin(stdin))
        } else {
            let file = File::options().read(true).write(true).open("/dev/tty")?;
            Ok(TerminalFd::DevTty(file))
        }
    }
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Clear canonical mode and echo, read one byte at a time. Everything else in `termios`
/// is kept.
pub fn make_non_canonical(termios: &mut Termios) {
    termios.local_modes &= !(LocalModes::ICANON | LocalModes::ECHO);
    termios.special_codes[SpecialCodeIndex::VMIN] = 1;
    termios.special_codes[SpecialCodeIndex::VTIME] = 0;
}

/// Real terminal mode switch. Remembers the settings it found on enable and puts them
/// back on disable.
#[derive(Debug, Default)]
pub struct TermiosModeSwitch {
    original: Option<Termios>,
}

impl TerminalModeSwitch for TermiosModeSwitch {
    fn enable_raw_mode(&mut self) -> miette::Result<()> {
        let fd = TerminalFd::try_open()
            .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

        let mut termios = termios::tcgetattr(&fd)
            .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

        if self.original.is_none() {
            self.original = Some(termios.clone());
        }

        make_non_canonical(&mut termios);

        termios::tcsetattr(&fd, OptionalActions::Now, &termios)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

        tracing::debug!(message = "raw mode enabled");
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> miette::Result<()> {
        let Some(termios) = self.original.take() else {
            return Ok(());
        };

        let fd = TerminalFd::try_open()
            .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

        termios::tcsetattr(&fd, OptionalActions::Now, &termios)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

        tracing::debug!(message = "raw mode disabled");
        Ok(())
    }
}
