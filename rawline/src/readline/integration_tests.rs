// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive a [`Readline`] end to end with scripted bytes, an in-memory terminal and a
//! counting raw mode switch.

use crate::{ByteSourceMock, CompletionRule, HiddenMode, LineMode, MaskedMode,
            MatchStrategy, ModeSwitchMock, Readline, ReadlineError, SequenceKind,
            StdoutMock, WordCompletion};
use pretty_assertions::assert_eq;
use test_case::test_case;

const UP: &str = "\x1b[A";
const DOWN: &str = "\x1b[B";

struct Harness {
    readline: Readline,
    stdout_mock: StdoutMock,
    mode_switch: ModeSwitchMock,
}

fn harness(input: &str) -> Harness { harness_with(input, ModeSwitchMock::new()) }

fn harness_with(input: &str, mode_switch: ModeSwitchMock) -> Harness {
    let stdout_mock = StdoutMock::new();
    let readline = Readline::new(
        Box::new(ByteSourceMock::from(input)),
        Box::new(stdout_mock.clone()),
        Box::new(mode_switch.clone()),
    );
    Harness {
        readline,
        stdout_mock,
        mode_switch,
    }
}

#[test_case("hello\n", "hello", 5 ; "ascii")]
#[test_case("あ\n", "あ", 1 ; "multi byte")]
#[test_case("hello\x01\x06\n", "hello", 1 ; "cursor kept where submit happened")]
#[test_case("hello world\x17\n", "hello ", 6 ; "cut word")]
#[test_case("ab\x14\n", "ab", 2 ; "transpose at end of line does nothing")]
#[test_case("ab\x02\x14\n", "ba", 1 ; "transpose keeps cursor")]
fn test_read_line_state(input: &str, text: &str, point: usize) {
    let mut it = harness(input);
    let state = it.readline.read_line_state("", &mut LineMode).unwrap();
    assert_eq!(state.text(), text);
    assert_eq!(state.point, point);
    assert!(state.done);
    assert!(it.mode_switch.is_balanced());
    assert_eq!(it.mode_switch.get_counts().enable, 1);
}

#[test]
fn test_end_of_input_submits_what_was_typed() {
    let mut it = harness("partial");
    assert_eq!(it.readline.read_plain_line().unwrap(), "partial");
    // Nothing left: the next read returns an empty line.
    assert_eq!(it.readline.read_plain_line().unwrap(), "");
    assert!(it.mode_switch.is_balanced());
}

#[test]
fn test_prompt_and_line_feed_are_drawn() {
    let mut it = harness("hi\n");
    assert_eq!(it.readline.text("> ").unwrap(), "hi");
    let output = it.stdout_mock.get_copy_of_buffer_as_string();
    assert!(output.contains("\r> hi\r"));
    assert!(output.ends_with('\n'));
}

#[test_case("\x1b[\n", SequenceKind::Csi ; "csi interrupted by line feed")]
#[test_case("\x1b]hello\x1b\n", SequenceKind::Osc ; "osc with bad terminator")]
#[test_case("abc\x1b[12", SequenceKind::Csi ; "csi cut off by end of input")]
fn test_invalid_sequence_aborts_read(input: &str, kind: SequenceKind) {
    let mut it = harness(input);
    let error = it.readline.read_plain_line().unwrap_err();
    assert!(error.is_invalid_sequence());
    assert_eq!(error.to_string(), format!("Invalid {kind} sequence"));
    // Raw mode is restored on the error path too.
    assert!(it.mode_switch.is_balanced());
}

#[test]
fn test_decoder_recovers_after_invalid_sequence() {
    let mut it = harness("\x1b[\nok\n");
    assert!(it.readline.read_plain_line().is_err());
    assert_eq!(it.readline.read_plain_line().unwrap(), "ok");
}

#[test]
fn test_osc_is_ignored() {
    let mut it = harness("\x1b]hello\x1b\\\n");
    assert_eq!(it.readline.read_plain_line().unwrap(), "");
}

#[test]
fn test_raw_mode_failure() {
    let mut it = harness_with("hello\n", ModeSwitchMock::failing());
    let error = it.readline.read_plain_line().unwrap_err();
    assert!(matches!(error, ReadlineError::TerminalSettings(_)));
    assert!(error.to_string().contains("not a terminal"));
    // Nothing was consumed or drawn.
    assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "");
}

#[test]
fn test_clipboard_persists_across_reads() {
    let mut it = harness("abc\x15\n\x19\n");
    assert_eq!(it.readline.read_plain_line().unwrap(), "");
    assert_eq!(it.readline.clipboard, "abc");
    assert_eq!(it.readline.read_plain_line().unwrap(), "abc");
}

#[test]
fn test_hidden_never_echoes() {
    let mut it = harness("123\n");
    assert_eq!(it.readline.hidden("pin: ").unwrap(), "123");
    let output = it.stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.contains("pin: "));
    assert!(!output.contains("123"));
}

#[test]
fn test_hidden_cursor_stays_after_prompt() {
    let mut it = harness("12\x02\n");
    let state = it.readline.read_line_state("pin: ", &mut HiddenMode).unwrap();
    assert_eq!(state.point, 1);
    assert_eq!(state.end(), 2);
}

#[test]
fn test_masked_shows_one_glyph_per_cluster() {
    let mut it = harness("aあ\n");
    let state = it
        .readline
        .read_line_state("pw: ", &mut MaskedMode::default())
        .unwrap();
    assert_eq!(state.text(), "aあ");
    assert_eq!(state.point, 2);
    assert_eq!(state.end(), 2);

    let output = it.stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.contains("pw: ∗∗"));
    assert!(!output.contains("あ"));
}

#[test]
fn test_masked_custom_glyph() {
    let mut it = harness("abc\n");
    assert_eq!(it.readline.masked("pw: ", "*").unwrap(), "abc");
    assert!(
        it.stdout_mock
            .get_copy_of_buffer_as_string_strip_ansi()
            .contains("pw: ***")
    );
}

#[test]
fn test_auto_complete_cycles_and_accepts() {
    let input = format!("{UP}{UP}{DOWN}\t\n");
    let mut it = harness(&input);
    let rule = CompletionRule::words(["123", "456", "789"]);
    assert_eq!(it.readline.auto_complete("ac:", rule).unwrap(), "789");
    assert!(
        it.stdout_mock
            .get_copy_of_buffer_as_string_strip_ansi()
            .contains("ac:789")
    );
}

#[test]
fn test_auto_complete_tab_without_prediction_is_text() {
    let input = format!("{UP}\t\n");
    let mut it = harness(&input);
    assert_eq!(
        it.readline
            .auto_complete("ac:", CompletionRule::default())
            .unwrap(),
        "\t"
    );
}

#[test]
fn test_auto_complete_nested_rule() {
    let mut it = harness("git c\t\n");
    let rule = CompletionRule::branches([(
        "git",
        Some(CompletionRule::words(["commit", "push"])),
    )]);
    assert_eq!(it.readline.auto_complete("$ ", rule).unwrap(), "git commit");
}

#[test]
fn test_auto_complete_prefix_strategy() {
    let mut it = harness("om\t\n");
    let completion = WordCompletion::new(CompletionRule::words(["commit"]))
        .with_strategy(MatchStrategy::Prefix);
    // No prefix match, so Tab is typed as text.
    assert_eq!(
        it.readline.auto_complete_with("$ ", completion).unwrap(),
        "om\t"
    );
}

#[test]
fn test_integer_reads_consecutive_lines() {
    let mut it = harness("123\n456\n");
    assert_eq!(it.readline.integer("n: ").unwrap(), Some(123));
    assert_eq!(it.readline.integer("n: ").unwrap(), Some(456));
}

#[test]
fn test_integer_empty_is_none() {
    let mut it = harness("\n");
    assert_eq!(it.readline.integer("n: ").unwrap(), None);
}

#[test]
fn test_integer_rejects_non_digits_with_bell() {
    let mut it = harness("1a\t-2\n");
    assert_eq!(it.readline.integer("n: ").unwrap(), Some(12));
    let output = it.stdout_mock.get_copy_of_buffer_as_string();
    assert_eq!(output.matches('\x07').count(), 3);
}

#[test]
fn test_integer_overflow_prompts_again() {
    let mut it = harness("99999999999999999999\n7\n");
    assert_eq!(it.readline.integer("n: ").unwrap(), Some(7));
    let output = it.stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.contains(&format!(
        "Integer overflow! allowed: ±{} given: 99999999999999999999",
        i64::MAX
    )));
    assert!(it.mode_switch.is_balanced());
    assert_eq!(it.mode_switch.get_counts().enable, 2);
}

#[test_case("y\n", None, true ; "yes")]
#[test_case("n\n", None, false ; "no")]
#[test_case("\n", Some(true), true ; "default yes")]
#[test_case("\n", Some(false), false ; "default no")]
#[test_case("maybe\n", Some(false), false ; "unknown answer takes default")]
#[test_case("n\n", Some(true), false ; "explicit answer beats default")]
fn test_confirm(input: &str, default: Option<bool>, expected: bool) {
    let mut it = harness(input);
    assert_eq!(it.readline.confirm("Go?", default).unwrap(), expected);
}

#[test]
fn test_confirm_without_default_rejects_unknown_answer() {
    let mut it = harness("maybe\n");
    let error = it.readline.confirm("Go?", None).unwrap_err();
    assert!(matches!(error, ReadlineError::InvalidInput(ref answer) if answer == "maybe"));
    assert!(
        it.stdout_mock
            .get_copy_of_buffer_as_string_strip_ansi()
            .contains("Go?(y/n) : maybe")
    );
}

#[test]
fn test_select() {
    let mut it = harness("2\n");
    let options = [("1", "apple"), ("2", "banana")];
    assert_eq!(it.readline.select(&options).unwrap(), "2");
    let output = it.stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.starts_with("1. apple\n2. banana\n"));
}

#[test]
fn test_select_invalid_key() {
    let mut it = harness("3\n");
    let options = [("1", "apple"), ("2", "banana")];
    let error = it.readline.select(&options).unwrap_err();
    assert_eq!(error.to_string(), "Invalid input: '3'");
}
