// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios icanon isig opost vmin vtime

//! Switching the terminal between cooked and raw mode for one read.
//!
//! ## What "raw" means here
//!
//! The editor only needs two things from the line discipline to go away:
//!
//! - **Canonical mode** (`ICANON`): otherwise the kernel buffers until Enter and does
//!   its own backspace handling.
//! - **Echo** (`ECHO`): otherwise every byte shows up twice, once from the kernel and
//!   once from the redraw.
//!
//! `VMIN=1, VTIME=0` makes `read()` return as soon as one byte is available. Signal
//! generation (`ISIG`) and output post-processing (`OPOST`) are left alone, so Ctrl+C
//! still interrupts the process and `\n` on output still returns the carriage. This is
//! the same as `stty -icanon -echo min 1 time 0`.
//!
//! ## Usage
//!
//! ```no_run
//! # #[cfg(unix)]
//! # {
//! use rawline::{RawModeGuard, TermiosModeSwitch};
//!
//! let mut switch = TermiosModeSwitch::default();
//! {
//!     let _guard = RawModeGuard::try_new(&mut switch)?;
//!     // ... read bytes ...
//! } // Previous settings restored here, also on early return and panic.
//! # }
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! The [`TerminalModeSwitch`] trait is the seam that lets tests swap the real termios
//! calls for a counting mock (`ModeSwitchMock`, behind the `test_fixtures` feature).

// Attach sources.
pub mod raw_mode_core;

#[cfg(unix)]
pub mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;

#[cfg(unix)]
pub use raw_mode_unix::*;
