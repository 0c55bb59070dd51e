// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CompletionRule, wrap_index};
use strum_macros::{Display, EnumIter};

/// How the partially typed last word is matched against candidates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumIter)]
pub enum MatchStrategy {
    /// The word may occur anywhere in the candidate. The suggestion is whatever follows
    /// the first occurrence, so `"om"` against `"commit"` suggests `"mit"`.
    #[default]
    Substring,
    /// The candidate must start with the word.
    Prefix,
}

/// Suggests the rest of the current word from a [`CompletionRule`] tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCompletion {
    pub rule: CompletionRule,
    pub strategy: MatchStrategy,
}

impl WordCompletion {
    #[must_use]
    pub fn new(rule: CompletionRule) -> Self {
        Self {
            rule,
            strategy: MatchStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Text to append to `input` to complete its last word, or `None` if nothing fits.
    ///
    /// `input` is split on single spaces. Every word but the last must be a branch key
    /// at its depth (surrounding whitespace ignored). At the final depth:
    ///
    /// - An empty last word picks a whole candidate by `index`, which wraps in both
    ///   directions (see [`wrap_index`]).
    /// - Otherwise the first candidate matching the last word (per [`MatchStrategy`])
    ///   gives the suggestion. An exact match suggests `""`.
    #[must_use]
    pub fn predict(&self, input: &str, index: isize) -> Option<String> {
        let mut words: Vec<&str> = input.split(' ').collect();
        let last_word = words.pop().unwrap_or_default();

        let mut rule = &self.rule;
        for word in words {
            rule = rule.child(word.trim())??;
        }

        let candidates = rule.candidates();

        if last_word.is_empty() {
            let picked = wrap_index(index, candidates.len())?;
            return candidates.get(picked).map(|it| (*it).to_string());
        }

        candidates
            .iter()
            .find_map(|candidate| self.remainder(candidate, last_word))
            .map(str::to_string)
    }

    fn remainder<'a>(&self, candidate: &'a str, word: &str) -> Option<&'a str> {
        match self.strategy {
            MatchStrategy::Substring => candidate
                .find(word)
                .map(|position| &candidate[position + word.len()..]),
            MatchStrategy::Prefix => candidate.strip_prefix(word),
        }
    }
}
