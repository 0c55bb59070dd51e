// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::cluster_width;
use crate::{InlineString, InlineVec};
use std::{fmt::{Display, Formatter, Result},
          ops::Range};
use unicode_segmentation::UnicodeSegmentation;

/// Text stored as a sequence of extended grapheme clusters.
///
/// Indices are cluster indices. There is no way to reach into the middle of a cluster,
/// so an edit can never leave half of a multi byte character (or half of `e` + `◌́`)
/// behind.
///
/// ```text
/// text:      "aあe\u{301}"
/// bytes:     61 e3 81 82 65 cc 81
/// clusters:  [ "a" | "あ" | "e\u{301}" ]
/// index:        0     1         2
/// columns:      1     2         1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphemeBuffer {
    clusters: InlineVec<InlineString>,
}

impl GraphemeBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of clusters.
    #[must_use]
    pub fn len(&self) -> usize { self.clusters.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.clusters.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.clusters.get(index).map(InlineString::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.clusters.iter().map(InlineString::as_str)
    }

    /// The clusters in `range` joined into one string. `range` is clamped to the buffer.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        let range = self.clamp(range);
        self.clusters[range].iter().map(InlineString::as_str).collect()
    }

    /// Terminal columns the clusters in `range` take up.
    #[must_use]
    pub fn columns(&self, range: Range<usize>) -> usize {
        let range = self.clamp(range);
        self.clusters[range]
            .iter()
            .map(|cluster| cluster_width(cluster))
            .sum()
    }

    /// Insert `text` before the cluster at `at`, returning the cluster index just past
    /// the inserted text.
    ///
    /// The whole line is re-segmented, since the inserted text can join clusters on
    /// either side of it. A combining mark typed after `e` joins the `e`, and an `e`
    /// typed in front of a lone combining mark absorbs it. When a cluster straddles the
    /// end of the inserted text, the returned index is just past that cluster.
    ///
    /// ```text
    /// before:  [ "\u{301}" | "x" ]   insert "e" at 0
    /// after:   [ "e\u{301}" | "x" ]  returns 1
    /// ```
    pub fn insert_str(&mut self, at: usize, text: &str) -> usize {
        let at = at.min(self.len());
        if text.is_empty() {
            return at;
        }

        let mut line = self.slice(0..at);
        line.push_str(text);
        let inserted_end = line.len();
        line.push_str(&self.slice(at..self.len()));

        self.clusters = line.graphemes(true).map(InlineString::from).collect();

        line.grapheme_indices(true)
            .take_while(|(start, _)| *start < inserted_end)
            .count()
    }

    /// Remove and return the cluster at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<InlineString> {
        (index < self.len()).then(|| self.clusters.remove(index))
    }

    /// Remove the clusters in `range` (clamped) and return them joined.
    pub fn drain(&mut self, range: Range<usize>) -> String {
        let range = self.clamp(range);
        self.clusters
            .drain(range)
            .fold(String::new(), |mut acc, cluster| {
                acc.push_str(&cluster);
                acc
            })
    }

    /// Swap the clusters at `a` and `b`. Both must be in bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.len() && b < self.len() {
            self.clusters.swap(a, b);
        }
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.len());
        range.start.min(end)..end
    }
}

impl From<&str> for GraphemeBuffer {
    fn from(text: &str) -> Self {
        Self {
            clusters: text.graphemes(true).map(InlineString::from).collect(),
        }
    }
}

impl Display for GraphemeBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for cluster in &self.clusters {
            f.write_str(cluster)?;
        }
        Ok(())
    }
}
