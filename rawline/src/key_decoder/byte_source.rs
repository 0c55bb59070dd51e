// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(unix)]
use crate::TerminalFd;
#[cfg(unix)]
use rustix::{event::{PollFd, PollFlags, poll},
             io::Errno};
use std::io;

/// A raw byte-at-a-time input handle. No framing, no length prefixes.
///
/// The decoder calls [`ByteSource::wait_until_readable`] once before each token and
/// then [`ByteSource::read_byte`] until the token is complete.
pub trait ByteSource {
    /// Read exactly one byte. `Ok(None)` means end-of-stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Block until at least one byte can be read without blocking (or the stream is
    /// closed). The default implementation returns immediately, which is right for
    /// in-memory sources.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting on the underlying handle fails.
    fn wait_until_readable(&mut self) -> io::Result<()> { Ok(()) }
}

/// Reads the controlling terminal: stdin when it is a tty, `/dev/tty` otherwise.
///
/// Reads go straight to the file descriptor (no [`std::io::Stdin`] buffering), so the
/// readiness reported by `poll()` always matches what [`ByteSource::read_byte`] sees.
#[cfg(unix)]
#[derive(Debug)]
pub struct TtyByteSource {
    fd: TerminalFd,
}

#[cfg(unix)]
impl TtyByteSource {
    /// # Errors
    ///
    /// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
    pub fn try_new() -> io::Result<Self> {
        Ok(Self {
            fd: TerminalFd::try_open()?,
        })
    }
}

#[cfg(unix)]
impl ByteSource for TtyByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        loop {
            match rustix::io::read(&self.fd, &mut buf[..]) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(Errno::INTR) => {}
                Err(errno) => return Err(errno.into()),
            }
        }
    }

    fn wait_until_readable(&mut self) -> io::Result<()> {
        let mut fds = [PollFd::new(&self.fd, PollFlags::IN)];
        loop {
            // No timeout: the editor does nothing until the user types.
            match poll(&mut fds, None) {
                Ok(_) => return Ok(()),
                Err(Errno::INTR) => {}
                Err(errno) => return Err(errno.into()),
            }
        }
    }
}
