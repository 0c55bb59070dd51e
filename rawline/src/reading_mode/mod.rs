// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prompt flavors layered on the one edit engine.
//!
//! A [`ReadingMode`] gets three hooks into [`crate::apply()`] and the [`crate::Renderer`]:
//!
//! 1. [`ReadingMode::intercept`] sees every token first and may swallow it or replace it
//!    with text to insert (autocomplete uses this for Tab and the arrow keys).
//! 2. [`ReadingMode::accept_printable`] may rewrite or reject a typed cluster before it
//!    reaches the buffer (integer mode rejects non digits).
//! 3. [`ReadingMode::rendering_text`] and [`ReadingMode::cursor_column`] decide what
//!    the redraw shows (hidden and masked modes never show the buffer).

// Attach sources.
pub mod auto_complete_mode;
pub mod hidden_mode;
pub mod integer_mode;
pub mod line_mode;
pub mod masked_mode;
pub mod reading_mode_core;

// Re-export.
pub use auto_complete_mode::*;
pub use hidden_mode::*;
pub use integer_mode::*;
pub use line_mode::*;
pub use masked_mode::*;
pub use reading_mode_core::*;
