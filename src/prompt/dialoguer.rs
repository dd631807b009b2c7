//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Terminal prompter rendering questions with dialoguer's colorful theme
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .allow_empty(config.allow_empty);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        Ok(input.interact_text()?)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}
