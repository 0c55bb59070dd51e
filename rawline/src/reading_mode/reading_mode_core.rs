// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditState, InlineString, Token, text_columns};
use std::fmt::Debug;

/// What a mode wants done with a typed cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// Insert this text (usually the cluster itself).
    Accept(InlineString),
    /// Drop the cluster and ring the bell.
    Reject,
}

/// What a mode wants done with a token before the engine sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// Let the engine handle the token normally.
    PassThrough,
    /// The mode handled the token. Only redraw.
    Consumed,
    /// Insert this text at the cursor instead of handling the token.
    Insert(String),
}

/// The capability interface each prompt flavor implements. Every method has the plain
/// line editing behavior as its default.
pub trait ReadingMode: Debug {
    /// Filter or transform one typed cluster.
    fn accept_printable(&mut self, cluster: &str) -> Acceptance {
        Acceptance::Accept(cluster.into())
    }

    fn intercept(&mut self, _state: &EditState, _token: &Token) -> Interception {
        Interception::PassThrough
    }

    /// Full text of the line to draw, prompt included.
    fn rendering_text(&self, state: &EditState) -> String {
        format!("{}{}", state.prompt, state.buffer)
    }

    /// Column (0 based) where the cursor goes after drawing [`Self::rendering_text`].
    fn cursor_column(&self, state: &EditState) -> usize {
        text_columns(&state.prompt) + state.columns_before_point()
    }
}
