//! Pure interfaces for prompting without external dependencies
//!
//! The wizard only talks to these traits, so the terminal implementation can
//! be swapped for a scripted one.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    pub allow_empty: bool,
}

impl TextPromptConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), default: None, allow_empty: false }
    }

    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

impl ConfirmationConfig {
    pub fn new(prompt: impl Into<String>, default: bool) -> Self {
        Self { prompt: prompt.into(), default }
    }
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ConfirmationPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter {}
