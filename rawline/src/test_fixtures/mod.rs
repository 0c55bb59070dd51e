// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory stand-ins for the terminal, used by this crate's tests. Downstream tests
//! that drive a [`crate::Readline`] with scripted input enable the `test_fixtures`
//! feature from their `[dev-dependencies]`.

// Attach sources.
pub mod byte_source_mock;
pub mod mode_switch_mock;
pub mod stdout_mock;

// Re-export.
pub use byte_source_mock::*;
pub use mode_switch_mock::*;
pub use stdout_mock::*;
