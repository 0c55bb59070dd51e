// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The blocking read loop and the prompt helpers built on it.

// Attach sources.
pub mod prompts;
pub mod readline_impl;

// Re-export.
pub use prompts::*;
pub use readline_impl::*;

#[cfg(test)]
mod integration_tests;
