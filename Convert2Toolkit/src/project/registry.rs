//! Workspace registry and batch building

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use walkdir::WalkDir;

use super::builder::{BuildReport, ProjectBuilder};
use super::identity::{has_guid_suffix, workspace_name};
use super::is_project;
use super::prompt::NamePrompt;
use super::types::BuildProgressCallback;
use crate::error::{Error, Result};

/// How a registered workspace fared in a batch build
#[derive(Debug)]
pub enum ProjectOutcome {
    Built(BuildReport),
    /// Not a workspace; nothing was written
    Invalid,
    /// Skipped at the name prompt; nothing was written
    Skipped,
    /// Build failed and was rolled back
    Failed(Error),
}

/// Outcome for one workspace
#[derive(Debug)]
pub struct ProjectResult {
    pub workspace: PathBuf,
    /// Human-readable project name
    pub name: String,
    pub outcome: ProjectOutcome,
}

/// Result of building every registered workspace
#[derive(Debug, Default)]
pub struct BatchBuildResult {
    /// Number of projects built
    pub success_count: usize,
    /// Number of invalid or skipped workspaces
    pub skip_count: usize,
    /// Number of failed builds
    pub fail_count: usize,
    /// Outcome for each workspace, in registration order
    pub results: Vec<ProjectResult>,
}

impl BatchBuildResult {
    fn push(&mut self, workspace: &Path, result: Result<BuildReport>) {
        let (name, outcome) = match result {
            Ok(report) => {
                self.success_count += 1;
                (report.identity.raw_name.clone(), ProjectOutcome::Built(report))
            }
            Err(Error::InvalidWorkspace { name }) => {
                self.skip_count += 1;
                (name, ProjectOutcome::Invalid)
            }
            Err(Error::UserSkipped { name }) => {
                self.skip_count += 1;
                (name, ProjectOutcome::Skipped)
            }
            Err(err) => {
                self.fail_count += 1;
                let name = match &err {
                    Error::BuildFailed { name, .. } => name.clone(),
                    _ => workspace_name(workspace),
                };
                (name, ProjectOutcome::Failed(err))
            }
        };
        self.results.push(ProjectResult {
            workspace: workspace.to_path_buf(),
            name,
            outcome,
        });
    }
}

/// Ordered set of workspaces selected for building
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: IndexSet<PathBuf>,
}

impl ProjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workspace. Returns `false` if it was already registered.
    ///
    /// Validity is checked at build time, not here.
    pub fn add_project(&mut self, path: impl Into<PathBuf>) -> bool {
        self.projects.insert(path.into())
    }

    /// Register every workspace under `root` and return how many were new.
    ///
    /// A workspace's own subdirectories are not searched. Directories named
    /// like built projects (`<name>_<guid>`) are left out, so scanning an
    /// output root does not pick up earlier builds.
    pub fn discover(&mut self, root: &Path) -> Result<usize> {
        let mut added = 0;
        let mut walker = WalkDir::new(root).follow_links(true).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            if !entry.file_type().is_dir() || !is_project(entry.path()) {
                continue;
            }
            walker.skip_current_dir();
            if has_guid_suffix(&entry.file_name().to_string_lossy()) {
                tracing::debug!("Ignoring built project {}", entry.path().display());
                continue;
            }
            if self.add_project(entry.path()) {
                tracing::debug!("Found workspace {}", entry.path().display());
                added += 1;
            }
        }
        Ok(added)
    }

    #[must_use]
    pub fn projects(&self) -> impl Iterator<Item = &Path> {
        self.projects.iter().map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn clear(&mut self) {
        self.projects.clear();
    }

    /// Build every registered workspace in order, continuing past failures.
    ///
    /// Only an interrupted prompt stops the batch early.
    pub fn build_all(
        &self,
        builder: &ProjectBuilder,
        prompt: Option<&dyn NamePrompt>,
    ) -> BatchBuildResult {
        self.build_all_inner(builder, prompt, None)
    }

    /// Build every registered workspace with progress callback
    pub fn build_all_with_progress(
        &self,
        builder: &ProjectBuilder,
        prompt: Option<&dyn NamePrompt>,
        progress: BuildProgressCallback,
    ) -> BatchBuildResult {
        self.build_all_inner(builder, prompt, Some(progress))
    }

    fn build_all_inner(
        &self,
        builder: &ProjectBuilder,
        prompt: Option<&dyn NamePrompt>,
        progress: Option<BuildProgressCallback>,
    ) -> BatchBuildResult {
        let mut batch = BatchBuildResult::default();
        for workspace in &self.projects {
            let result = builder.build_inner(workspace, prompt, progress);
            let interrupted = matches!(result, Err(Error::Prompt(_)));
            batch.push(workspace, result);
            if interrupted {
                tracing::warn!("Prompt interrupted, not building remaining projects");
                break;
            }
        }
        batch
    }
}
