// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One level of the completion tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionRule {
    /// A leaf: the words that may be typed here. Nothing follows them.
    Words(Vec<String>),
    /// Each key may be typed here. After a key and a space, its child (if any) applies.
    /// Order is kept: it is the order candidates are offered in.
    Branches(Vec<(String, Option<CompletionRule>)>),
}

impl Default for CompletionRule {
    fn default() -> Self { CompletionRule::Words(vec![]) }
}

impl CompletionRule {
    #[must_use]
    pub fn words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        CompletionRule::Words(words.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn branches<S: Into<String>>(
        branches: impl IntoIterator<Item = (S, Option<CompletionRule>)>,
    ) -> Self {
        CompletionRule::Branches(
            branches
                .into_iter()
                .map(|(key, child)| (key.into(), child))
                .collect(),
        )
    }

    /// The words that can be typed at this level.
    #[must_use]
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            CompletionRule::Words(words) => words.iter().map(String::as_str).collect(),
            CompletionRule::Branches(branches) => {
                branches.iter().map(|(key, _)| key.as_str()).collect()
            }
        }
    }

    /// Follow the branch named `word`.
    ///
    /// - `None`: there is no such branch (leaves have no branches at all).
    /// - `Some(None)`: the branch exists but nothing can follow it.
    #[must_use]
    pub fn child(&self, word: &str) -> Option<Option<&CompletionRule>> {
        match self {
            CompletionRule::Words(_) => None,
            CompletionRule::Branches(branches) => branches
                .iter()
                .find(|(key, _)| key == word)
                .map(|(_, child)| child.as_ref()),
        }
    }
}
