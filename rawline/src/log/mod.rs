// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional `tracing` subscriber setup for applications that use this crate.
//!
//! The editor owns the current terminal line while a read is in progress, so logging
//! to stdout or stderr during a read will garble the prompt. Log to a file:
//!
//! ```no_run
//! use rawline::{TracingConfig, init};
//!
//! init(TracingConfig::new_file("/tmp/rawline.log", tracing::Level::DEBUG))?;
//! # Ok::<(), miette::Report>(())
//! ```

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;
pub mod writer_config;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
pub use writer_config::*;
