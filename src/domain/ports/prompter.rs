//! Prompter port
//!
//! Confirmation and selection questions asked during push and rollback.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("cannot prompt: {0}")]
    Unavailable(String),
}

pub trait Prompter {
    /// Yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;

    /// Pick one of `items`, returning its index
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError>;
}

/// Non-interactive prompter used for `--yes`.
///
/// Confirms everything and picks the first item.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool, PromptError> {
        Ok(true)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::Unavailable(format!(
                "nothing to choose for '{}'",
                prompt
            )));
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_confirms_and_picks_first() {
        assert!(AssumeYes.confirm("Continue?", false).unwrap());
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(AssumeYes.select("Pick", &items).unwrap(), 0);
        assert!(AssumeYes.select("Pick", &[]).is_err());
    }
}
