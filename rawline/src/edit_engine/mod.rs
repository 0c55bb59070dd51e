// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `(EditState, Token) -> Transition`.
//!
//! [`apply()`] mutates the state in place and reports which side effect the read loop
//! owes the terminal. It never writes anything itself, so the full editing behavior
//! can be tested without an output device.

// Attach sources.
pub mod apply_token;
pub mod event_handlers;
pub mod word_motion;

// Re-export.
pub use apply_token::*;
pub use event_handlers::*;
pub use word_motion::*;
