//! Terminal name prompt

use inquire::{InquireError, Text};

use crate::error::{Error, Result};
use crate::project::{NamePrompt, PromptAnswer};

/// Asks for a project name on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn ask(&self, default_name: &str) -> Result<PromptAnswer> {
        let message = format!("Attempting to create project '{default_name}'. Enter project name:");
        match Text::new(&message)
            .with_placeholder(default_name)
            .with_help_message("type X to skip or leave empty to use default")
            .prompt()
        {
            Ok(answer) => Ok(PromptAnswer::parse(&answer)),
            // Esc skips this project; Ctrl-C aborts the whole run
            Err(InquireError::OperationCanceled) => Ok(PromptAnswer::Skip),
            Err(err) => Err(Error::Prompt(err.to_string())),
        }
    }
}
