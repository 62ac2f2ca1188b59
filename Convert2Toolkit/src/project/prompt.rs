//! Interactive project naming

use super::identity::sanitize_name;
use crate::error::Result;

/// Answer to the project name prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Keep the workspace name
    UseDefault,
    /// Use this (already sanitized) name instead
    Rename(String),
    /// Do not build this workspace
    Skip,
}

impl PromptAnswer {
    /// Interpret a typed answer.
    ///
    /// Empty input keeps the default and `X`/`x` skips. Anything else is
    /// sanitized; if nothing survives sanitizing, the default is kept.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => Self::UseDefault,
            "X" | "x" => Self::Skip,
            other => {
                let name = sanitize_name(other);
                if name.is_empty() {
                    Self::UseDefault
                } else {
                    Self::Rename(name)
                }
            }
        }
    }
}

/// Asks the user what to call a project before anything is written
pub trait NamePrompt {
    /// `default_name` is the human-readable workspace name
    fn ask(&self, default_name: &str) -> Result<PromptAnswer>;
}

impl<F> NamePrompt for F
where
    F: Fn(&str) -> Result<PromptAnswer>,
{
    fn ask(&self, default_name: &str) -> Result<PromptAnswer> {
        self(default_name)
    }
}
