// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The data model of one in-progress line.
//!
//! Every index here (`point`, `end`, ranges) counts grapheme clusters. Bytes only appear
//! at the edges: the decoder produces them and the renderer writes them.

// Attach sources.
pub mod edit_state_impl;
pub mod grapheme_buffer;
pub mod width;
pub mod word;

// Re-export.
pub use edit_state_impl::*;
pub use grapheme_buffer::*;
pub use width::*;
pub use word::*;
