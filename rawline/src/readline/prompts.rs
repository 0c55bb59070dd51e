// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AutoCompleteMode, CompletionRule, HiddenMode, IntegerMode, LineMode,
            MaskedMode, Readline, ReadlineError, WordCompletion, ok};
use crossterm::style::Stylize;
use std::io::Write;

pub const CONFIRM_YES: &str = "y";
pub const CONFIRM_NO: &str = "n";

/// Ready made prompts. Each one is a single [`Readline::read_line`] with a particular
/// [`crate::ReadingMode`], plus whatever validation the answer needs.
impl Readline {
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn text(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.read_line(prompt, &mut LineMode)
    }

    /// Nothing typed is shown.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn hidden(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.read_line(prompt, &mut HiddenMode)
    }

    /// Every typed cluster is shown as `replacement`.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn masked(
        &mut self,
        prompt: &str,
        replacement: &str,
    ) -> Result<String, ReadlineError> {
        self.read_line(prompt, &mut MaskedMode::new(replacement))
    }

    /// Suggests completions from `rule` as the user types. Tab accepts, Up and Down
    /// cycle.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn auto_complete(
        &mut self,
        prompt: &str,
        rule: CompletionRule,
    ) -> Result<String, ReadlineError> {
        self.auto_complete_with(prompt, WordCompletion::new(rule))
    }

    /// Same as [`Readline::auto_complete`], with control over the match strategy.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn auto_complete_with(
        &mut self,
        prompt: &str,
        completion: WordCompletion,
    ) -> Result<String, ReadlineError> {
        self.read_line(prompt, &mut AutoCompleteMode::from(completion))
    }

    /// Read a non negative integer. Only digits can be typed.
    ///
    /// Returns `Ok(None)` if the user submits an empty line. If the number does not fit
    /// in an [`i64`], an error is printed and the prompt is shown again.
    ///
    /// # Errors
    ///
    /// See [`Readline::read_line_state`].
    pub fn integer(&mut self, prompt: &str) -> Result<Option<i64>, ReadlineError> {
        loop {
            let answer = self.read_line(prompt, &mut IntegerMode)?;
            if answer.is_empty() {
                return ok!(None);
            }

            match answer.parse::<i64>() {
                Ok(value) => return ok!(Some(value)),
                Err(error) => {
                    tracing::debug!(message = "integer rejected", answer = %answer, error = %error);
                    let message = format!(
                        "Integer overflow! allowed: ±{} given: {answer}",
                        i64::MAX
                    );
                    writeln!(self.output, "{}", message.red())?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Ask a yes/no question. The prompt reads `message(y/n) [default: y]: `.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::InvalidInput`] if the answer is neither `y` nor `n` and there
    ///   is no `default`.
    /// - See [`Readline::read_line_state`] for the rest.
    pub fn confirm(
        &mut self,
        message: &str,
        default: Option<bool>,
    ) -> Result<bool, ReadlineError> {
        let prompt = confirm_prompt(message, default);
        let answer = self.text(&prompt)?;
        match (answer.as_str(), default) {
            (CONFIRM_YES, _) => ok!(true),
            (CONFIRM_NO, _) => ok!(false),
            (_, Some(default)) => ok!(default),
            (_, None) => Err(ReadlineError::InvalidInput(answer)),
        }
    }

    /// Print `key. label` for each option, then read the key of the chosen one.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::InvalidInput`] if the answer is not one of the keys.
    /// - See [`Readline::read_line_state`] for the rest.
    pub fn select(&mut self, options: &[(&str, &str)]) -> Result<String, ReadlineError> {
        write!(self.output, "{}", select_menu(options))?;
        self.output.flush()?;

        let answer = self.text("")?;
        if options.iter().any(|(key, _)| *key == answer) {
            ok!(answer)
        } else {
            Err(ReadlineError::InvalidInput(answer))
        }
    }
}

#[must_use]
pub fn confirm_prompt(message: &str, default: Option<bool>) -> String {
    let mut prompt = format!("{message}({CONFIRM_YES}/{CONFIRM_NO}) ");
    if let Some(default) = default {
        let default = if default { CONFIRM_YES } else { CONFIRM_NO };
        prompt.push_str(&format!("[default: {default}]"));
    }
    prompt.push_str(": ");
    prompt
}

/// One `key. label` line per option, keys padded to the widest key.
#[must_use]
pub fn select_menu(options: &[(&str, &str)]) -> String {
    let key_width = options
        .iter()
        .map(|(key, _)| crate::text_columns(key))
        .max()
        .unwrap_or(0);

    options
        .iter()
        .map(|(key, label)| {
            let padding = " ".repeat(key_width - crate::text_columns(key));
            format!("{key}{padding}. {label}\n")
        })
        .collect()
}
