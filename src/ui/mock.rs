//! Scripted input and recording output for testing
//!
//! Useful for driving the interactive session without a terminal.

use super::input::{InputError, Result, UserInput};
use super::output::OutputWriter;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Input that replays predetermined answers
///
/// Once the script runs out every prompt fails with `InputError::Closed`,
/// like a closed stdin.
#[derive(Debug, Default)]
pub struct MockInput {
    answers: RefCell<VecDeque<Result<String>>>,
    prompts: RefCell<Vec<String>>,
}

impl MockInput {
    /// Create a mock input answering with `answers` in order
    #[must_use]
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().map(|a| Ok(a.into())).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Queue an interrupt (Ctrl+C) after the scripted answers
    #[must_use]
    pub fn then_interrupt(self) -> Self {
        self.answers.borrow_mut().push_back(Err(InputError::Interrupted));
        self
    }

    /// Prompts asked so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl UserInput for MockInput {
    fn prompt_text(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(InputError::Closed))
            .map(|answer| answer.trim().to_string())
    }
}

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Write,
    Error,
    Success,
    Warning,
    Info,
}

/// Output that records every message instead of printing it
#[derive(Debug, Default)]
pub struct MockOutput {
    messages: RefCell<Vec<(Level, String)>>,
    clears: RefCell<usize>,
}

impl MockOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order
    #[must_use]
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages recorded at `level`
    #[must_use]
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|(_, m)| m.contains(needle))
    }

    /// Number of times the screen was cleared
    #[must_use]
    pub fn clears(&self) -> usize {
        *self.clears.borrow()
    }

    fn record(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for MockOutput {
    fn write(&self, message: &str) {
        self.record(Level::Write, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.record(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.record(Level::Warning, message);
    }

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn clear(&self) {
        *self.clears.borrow_mut() += 1;
    }
}
