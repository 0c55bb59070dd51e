// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Terminal columns taken by one grapheme cluster: 2 for a single wide codepoint (CJK,
/// most emoji), 1 for everything else.
///
/// Multi codepoint clusters (`👋🏻`, flags, ZWJ sequences) count as 1. Terminals disagree
/// on how wide these are, and 1 matches what most of them draw for the cursor.
#[must_use]
pub fn cluster_width(cluster: &str) -> usize {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.width() == Some(2) => 2,
        _ => 1,
    }
}

/// Display columns of `text`, ignoring any ANSI styling in it.
#[must_use]
pub fn text_columns(text: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(text);
    plain.graphemes(true).map(cluster_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("a", 1 ; "ascii")]
    #[test_case("あ", 2 ; "hiragana")]
    #[test_case("😀", 2 ; "emoji")]
    #[test_case("👋🏻", 1 ; "emoji with skin tone modifier")]
    #[test_case("e\u{301}", 1 ; "combining acute")]
    #[test_case("∗", 1 ; "mask glyph")]
    fn test_cluster_width(cluster: &str, expected: usize) {
        assert_eq!(cluster_width(cluster), expected);
    }

    #[test]
    fn test_text_columns() {
        assert_eq!(text_columns(""), 0);
        assert_eq!(text_columns("> "), 2);
        assert_eq!(text_columns("aあb"), 4);
        assert_eq!(text_columns("\x1b[1m> \x1b[0m"), 2);
    }
}
