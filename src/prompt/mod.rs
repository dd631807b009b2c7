//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Scripted implementation for tests and automation

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

pub use interface::*;

use crate::{error::Result, prompt::dialoguer::DialoguerPrompter};

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks a yes/no question unless `skip` is set, in which case the answer is yes.
pub fn confirm<P: PromptProvider + ?Sized>(
    provider: &P,
    skip: bool,
    prompt: String,
) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    provider.prompt_confirmation(&ConfirmationConfig::new(prompt, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::automatic_impl::AutomaticPrompter;

    #[test]
    fn confirm_short_circuits_when_skipped() {
        let provider = AutomaticPrompter::new().with_confirmation_response("Overwrite?", false);
        assert!(confirm(&provider, true, "Overwrite?".to_string()).unwrap());
        assert!(provider.asked().is_empty());
    }

    #[test]
    fn confirm_defaults_to_no() {
        let provider = AutomaticPrompter::new();
        assert!(!confirm(&provider, false, "Overwrite?".to_string()).unwrap());
    }
}
