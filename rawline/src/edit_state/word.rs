// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use regex::Regex;
use std::sync::LazyLock;

/// Separators (`\p{Z}`) and symbols (`\p{S}`) end a word. Everything else, letters,
/// digits and punctuation included, is part of one.
static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Z}\p{S}]").expect("Invalid separator/symbol regex")
});

/// `true` if `cluster` belongs to a word for word motion and Ctrl+W.
#[must_use]
pub fn is_word_cluster(cluster: &str) -> bool { !NON_WORD_REGEX.is_match(cluster) }
