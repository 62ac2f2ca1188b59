//! Metadata template storage
//!
//! Templates are read from a user directory when one is configured, and
//! otherwise come from the copies compiled into the crate.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const PROJECT_META: &str = include_str!("bundled/project_meta.lsx");
const MOD_META: &str = include_str!("bundled/mod_meta.lsx");

/// The two metadata documents of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Toolkit project descriptor (`Projects/<name>/meta.lsx`)
    Project,
    /// Mod descriptor (`Mods/<name>/meta.lsx`)
    Mod,
}

impl TemplateKind {
    /// File name inside a templates directory
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Project => "project_meta.lsx",
            Self::Mod => "mod_meta.lsx",
        }
    }

    /// Copy bundled with the crate
    #[must_use]
    pub fn bundled(self) -> &'static str {
        match self {
            Self::Project => PROJECT_META,
            Self::Mod => MOD_META,
        }
    }
}

/// Source of metadata templates
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    dir: Option<PathBuf>,
}

impl TemplateStore {
    /// Use the bundled templates
    #[must_use]
    pub fn bundled() -> Self {
        Self::default()
    }

    /// Read templates from `dir`
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Configured directory, if any
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Load a template
    ///
    /// # Errors
    /// Returns [`Error::TemplateRead`] if a configured template is missing or
    /// unreadable. A configured directory never falls back to the bundled copy.
    pub fn load(&self, kind: TemplateKind) -> Result<Cow<'static, str>> {
        let Some(dir) = &self.dir else {
            return Ok(Cow::Borrowed(kind.bundled()));
        };

        let path = dir.join(kind.file_name());
        fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|source| Error::TemplateRead { path, source })
    }
}
