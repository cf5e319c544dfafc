//! Interactive prompts for CLI commands.
//!
//! Uses dialoguer for terminal confirmation; `--yes` swaps every prompt for
//! its default answer.

use gdpack_core::{AssumeDefault, Confirm};

/// The CLI's confirmation strategy.
pub struct CliConfirm {
    assume_default: bool,
}

impl CliConfirm {
    pub fn new(assume_default: bool) -> Self {
        Self { assume_default }
    }
}

impl Confirm for CliConfirm {
    fn confirm(&mut self, prompt: &str, default: bool) -> gdpack_core::Result<bool> {
        if self.assume_default {
            return AssumeDefault.confirm(prompt, default);
        }

        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(gdpack_core::Error::collaborator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_default_returns_the_default() {
        let mut confirm = CliConfirm::new(true);
        assert!(confirm.confirm("overwrite?", true).unwrap());
        assert!(!confirm.confirm("remove?", false).unwrap());
    }
}
