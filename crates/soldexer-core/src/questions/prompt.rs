//! Prompt surface used by the questionnaire
//!
//! The questionnaire never touches the terminal directly. It asks one
//! question at a time through `PromptSurface`, which the `tui` feature
//! implements with cliclack.

use std::io;

/// Validator applied to free-text answers before they are accepted
pub type TextValidator = fn(&str) -> Result<(), String>;

/// A free-text question with a default used for empty input
#[derive(Debug, Clone, Copy)]
pub struct TextPrompt<'a> {
    pub message: &'a str,
    pub default: &'a str,
    pub validate: Option<TextValidator>,
}

impl<'a> TextPrompt<'a> {
    pub fn new(message: &'a str, default: &'a str) -> Self {
        Self {
            message,
            default,
            validate: None,
        }
    }

    pub fn with_validator(mut self, validate: TextValidator) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// One entry of a single-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Short label; this is what the prompt returns and what gets normalized
    pub label: &'static str,
    pub hint: &'static str,
}

impl Choice {
    pub const fn new(label: &'static str, hint: &'static str) -> Self {
        Self { label, hint }
    }
}

/// Ask one question, get one typed answer
///
/// Errors (terminal I/O failure, user cancellation) are never recovered by
/// the questionnaire.
pub trait PromptSurface {
    /// Ask for free text; empty input yields `prompt.default`
    fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String>;

    /// Ask to pick one of `choices`; returns the chosen label
    fn select(
        &mut self,
        message: &str,
        choices: &[Choice],
        initial: Option<&str>,
    ) -> io::Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool>;
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Pre-recorded answer for `ScriptedPrompts`
    #[derive(Debug, Clone)]
    pub(crate) enum Answer {
        Text(&'static str),
        Select(&'static str),
        Confirm(bool),
        /// Accept whatever default the question offers
        Default,
    }

    /// Replays answers in order and records every question asked
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompts {
        answers: VecDeque<Answer>,
        pub asked: Vec<String>,
        pub choice_sets: Vec<(String, Vec<String>)>,
    }

    impl ScriptedPrompts {
        pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                ..Default::default()
            }
        }

        pub(crate) fn was_asked(&self, needle: &str) -> bool {
            self.asked.iter().any(|m| m.contains(needle))
        }

        pub(crate) fn choices_for(&self, needle: &str) -> Option<&[String]> {
            self.choice_sets
                .iter()
                .find(|(m, _)| m.contains(needle))
                .map(|(_, c)| c.as_slice())
        }

        pub(crate) fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, message: &str) -> io::Result<Answer> {
            self.asked.push(message.to_string());
            self.answers.pop_front().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::Interrupted,
                    format!("no scripted answer for '{}'", message),
                )
            })
        }
    }

    fn mismatch(message: &str, answer: &Answer) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unexpected answer {:?} for '{}'", answer, message),
        )
    }

    impl PromptSurface for ScriptedPrompts {
        fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String> {
            let answer = self.next(prompt.message)?;
            let value = match answer {
                Answer::Text("") | Answer::Default => prompt.default.to_string(),
                Answer::Text(s) => s.to_string(),
                other => return Err(mismatch(prompt.message, &other)),
            };
            if let Some(validate) = prompt.validate {
                validate(&value).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            }
            Ok(value)
        }

        fn select(
            &mut self,
            message: &str,
            choices: &[Choice],
            initial: Option<&str>,
        ) -> io::Result<String> {
            self.choice_sets.push((
                message.to_string(),
                choices.iter().map(|c| c.label.to_string()).collect(),
            ));
            let answer = self.next(message)?;
            let label = match answer {
                Answer::Select(label) => label.to_string(),
                Answer::Default => initial
                    .or_else(|| choices.first().map(|c| c.label))
                    .unwrap_or_default()
                    .to_string(),
                other => return Err(mismatch(message, &other)),
            };
            if !choices.iter().any(|c| c.label == label) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' is not offered for '{}'", label, message),
                ));
            }
            Ok(label)
        }

        fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
            match self.next(message)? {
                Answer::Confirm(value) => Ok(value),
                Answer::Default => Ok(default),
                other => Err(mismatch(message, &other)),
            }
        }
    }
}
