//! Prompt provider that answers from a script instead of the terminal.
//!
//! Responses are queued per prompt text and consumed in order, so a question
//! asked repeatedly (e.g. "add another domain?") can receive a different
//! answer each time. Once a queue is drained the prompt's default is used.

use super::interface::*;
use crate::error::Result;
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

/// Automatic prompt provider that gives predefined responses
/// Useful for automation, testing, or CI/CD environments
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    confirmation_responses: RefCell<HashMap<String, VecDeque<bool>>>,
    asked: RefCell<Vec<String>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text response for a specific prompt
    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        self.text_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response.to_string());
        self
    }

    /// Queue several text responses for a specific prompt, answered in order
    pub fn with_text_responses(mut self, prompt: &str, responses: &[&str]) -> Self {
        for response in responses {
            self = self.with_text_response(prompt, response);
        }
        self
    }

    /// Queue a confirmation response for a specific prompt
    pub fn with_confirmation_response(self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Queue several confirmation responses for a specific prompt, answered in order
    pub fn with_confirmation_responses(mut self, prompt: &str, responses: &[bool]) -> Self {
        for response in responses {
            self = self.with_confirmation_response(prompt, *response);
        }
        self
    }

    /// Every prompt asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Number of queued responses that were never consumed.
    pub fn remaining(&self) -> usize {
        let text: usize = self.text_responses.borrow().values().map(VecDeque::len).sum();
        let confirm: usize =
            self.confirmation_responses.borrow().values().map(VecDeque::len).sum();
        text + confirm
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.asked.borrow_mut().push(config.prompt.clone());

        let response = self
            .text_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.asked.borrow_mut().push(config.prompt.clone());

        let response = self
            .confirmation_responses
            .borrow_mut()
            .get_mut(&config.prompt)
            .and_then(VecDeque::pop_front)
            .unwrap_or(config.default);

        log::debug!(
            "Auto-answering confirmation prompt '{}' with: {}",
            config.prompt,
            response
        );
        Ok(response)
    }
}
