//! Injected confirmation capability.
//!
//! Interactive prompts are kept out of the manager's logic; commands inject
//! either a terminal-backed implementation or [`AssumeDefault`] for batch
//! and test runs.

use crate::error::Result;

/// Ask the user to confirm an action.
pub trait Confirm {
    /// Present `prompt` and return the user's choice. `default` is the
    /// answer used when the user just accepts.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Non-interactive confirmation that always returns the default answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeDefault;

impl Confirm for AssumeDefault {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        tracing::debug!(prompt, default, "non-interactive confirmation");
        Ok(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_default_echoes_default() {
        let mut confirm = AssumeDefault;
        assert!(confirm.confirm("overwrite?", true).unwrap());
        assert!(!confirm.confirm("remove anyway?", false).unwrap());
    }
}
