// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios icanon

//! `rawline` is a blocking line editor for terminals in non-canonical mode. There is no
//! help from the OS line discipline: every byte the user types is read one at a time,
//! decoded into a key [`Token`], applied to the in-progress [`EditState`], and the line is
//! redrawn in place.
//!
//! # Pipeline
//!
//! ```text
//! ByteSource ──▶ KeyDecoder ──▶ Token ──▶ apply() ──▶ Transition ──▶ Renderer
//!  (raw tty)    (state machine)          (EditState +             (erase line, CR,
//!                                          ReadingMode)             text, CR, CUF n)
//! ```
//!
//! 1. [`KeyDecoder`] groups raw bytes into tokens: one UTF-8 character, one control
//!    byte, or one complete escape sequence (CSI, OSC, SS2/SS3).
//! 2. [`apply()`] maps `(EditState, Token)` to a new state and a [`Transition`] telling
//!    the caller whether to redraw, ring the bell, clear the screen or finish.
//! 3. [`Renderer`] redraws `prompt + text` and puts the cursor on the right column,
//!    counting wide glyphs as two columns.
//!
//! All cursor arithmetic is in grapheme clusters, never bytes. See [`GraphemeBuffer`].
//!
//! # Reading modes
//!
//! One engine serves every prompt flavor. The flavor is a [`ReadingMode`] value picked
//! per call:
//!
//! | Mode                 | Echo                                   |
//! |----------------------|----------------------------------------|
//! | [`LineMode`]         | prompt + buffer                        |
//! | [`HiddenMode`]       | prompt only                            |
//! | [`MaskedMode`]       | prompt + one replacement glyph/cluster |
//! | [`IntegerMode`]      | prompt + buffer, non digits ring bell  |
//! | [`AutoCompleteMode`] | prompt + buffer + dimmed suggestion    |
//!
//! # Usage
//!
//! ```no_run
//! use rawline::{CompletionRule, Readline};
//!
//! let mut readline = Readline::try_new_stdio()?;
//! let name = readline.text("name: ")?;
//! let secret = readline.masked("password: ", "*")?;
//! let rule = CompletionRule::branches([
//!     ("git", Some(CompletionRule::words(["commit", "push"]))),
//!     ("skip", None),
//! ]);
//! let command = readline.auto_complete("$ ", rule)?;
//! # Ok::<(), rawline::ReadlineError>(())
//! ```
//!
//! # Raw mode
//!
//! [`Readline`] puts the terminal in non-canonical, no-echo mode for the duration of
//! each read via a [`RawModeGuard`]. The previous settings are restored on every exit
//! path, including decode errors.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod decl_macros;
pub mod edit_engine;
pub mod edit_state;
pub mod error;
pub mod key_decoder;
pub mod log;
pub mod reading_mode;
pub mod readline;
pub mod render;
pub mod terminal_raw_mode;
#[cfg(any(test, feature = "test_fixtures"))]
pub mod test_fixtures;
pub mod word_completion;

// Re-export.
pub use edit_engine::*;
pub use edit_state::*;
pub use error::*;
pub use key_decoder::*;
pub use log::*;
pub use reading_mode::*;
pub use readline::*;
pub use render::*;
pub use terminal_raw_mode::*;
#[cfg(any(test, feature = "test_fixtures"))]
pub use test_fixtures::*;
pub use word_completion::*;

// Type aliases.
use smallstr::SmallString;
use smallvec::SmallVec;

pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SendRawTerminal = dyn std::io::Write + Send;

pub const DEFAULT_INLINE_VEC_SIZE: usize = 16;
pub type InlineVec<T> = SmallVec<[T; DEFAULT_INLINE_VEC_SIZE]>;

pub const DEFAULT_INLINE_STRING_SIZE: usize = 16;
pub type InlineString = SmallString<[u8; DEFAULT_INLINE_STRING_SIZE]>;

// Constants.
pub const DEFAULT_MASK_GLYPH: &str = "\u{2217}";
