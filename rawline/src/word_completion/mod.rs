// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Predicts the rest of the word being typed from a tree of known words.
//!
//! ```text
//! CompletionRule::branches([
//!     ("git",  Some(words(["commit", "push"]))),     "git c"  ─▶ "ommit"
//!     ("skip", None),                                "sk"     ─▶ "ip"
//! ])                                                 "git "   ─▶ "commit" (index 0)
//!                                                    "git "   ─▶ "push"   (index 1, -1)
//! ```
//!
//! Every word before the last must name a branch exactly. The last word is matched
//! against the candidates at that depth, or, when it is empty, one candidate is picked
//! by a wrapping index so the user can cycle through them.

// Attach sources.
pub mod completion_rule;
pub mod predictor;
pub mod wrap_index;

// Re-export.
pub use completion_rule::*;
pub use predictor::*;
pub use wrap_index::*;
