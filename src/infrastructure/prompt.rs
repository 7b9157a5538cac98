//! Interactive prompter backed by dialoguer
//!
//! Prompts are drawn on stderr so stdout stays clean for `--json`.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Select};
use is_terminal::IsTerminal;

use crate::domain::ports::{PromptError, Prompter};

pub struct DialoguerPrompter {
    colored: bool,
}

impl DialoguerPrompter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn theme(&self) -> Box<dyn Theme> {
        prompt_theme(self.colored)
    }

    fn ensure_interactive() -> Result<(), PromptError> {
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            Ok(())
        } else {
            Err(PromptError::Unavailable(
                "not running in a terminal; pass --yes (and a target) to run unattended"
                    .to_string(),
            ))
        }
    }
}

/// Theme shared by every interactive prompt
pub fn prompt_theme(colored: bool) -> Box<dyn Theme> {
    if colored {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

fn unavailable(err: dialoguer::Error) -> PromptError {
    PromptError::Unavailable(err.to_string())
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        Self::ensure_interactive()?;
        let theme = self.theme();
        Confirm::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(unavailable)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        Self::ensure_interactive()?;
        if items.is_empty() {
            return Err(PromptError::Unavailable(format!(
                "nothing to choose for '{}'",
                prompt
            )));
        }
        let theme = self.theme();
        Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(unavailable)
    }
}
