// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Redraws the edited line in place.
//!
//! ```text
//! ESC[2K  CR  <prompt + text>  CR  ESC[<col>C
//! │       │   │                │   └ cursor forward to the cursor column
//! │       │   │                └ back to column 0
//! │       │   └ mode's rendering text
//! │       └ column 0
//! └ erase the whole line
//! ```
//!
//! Each redraw is assembled in memory and handed to the output in one `write_all` +
//! `flush`, so the terminal never shows a half drawn line.

// Attach sources.
pub mod renderer;

// Re-export.
pub use renderer::*;
