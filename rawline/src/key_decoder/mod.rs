// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the raw terminal byte stream into [`Token`]s.
//!
//! ```text
//! ByteSource (one byte at a time)
//!    │
//!    ▼
//! KeyDecoder::advance() ── Normal ──┬── ESC ─▶ SawEsc ─┬─ '[' ─▶ InCsiParams ─▶ InCsiIntermediate
//!                                   │                  ├─ ']' ─▶ InOsc ─▶ InOscSawEsc
//!                                   │                  └─ N/O ─▶ InSingleShift
//!                                   └── UTF-8 lead ─▶ InUtf8 { remaining }
//!    │
//!    ▼
//! Token::{Printable, Control, Unrecognized}
//! ```
//!
//! The state machine in [`KeyDecoder::advance`] is pure: it never touches I/O, so the
//! grammar and its failure points can be tested byte by byte. [`KeyDecoder::next_token`]
//! drives it from a [`ByteSource`] and decides what end-of-stream means in each state.

// Attach sources.
pub mod byte_source;
pub mod csi;
pub mod decoder;
pub mod token;

// Re-export.
pub use byte_source::*;
pub use csi::*;
pub use decoder::*;
pub use token::*;
