//! Types for project build progress tracking

/// Progress callback type for project builds
pub type BuildProgressCallback<'a> = &'a (dyn Fn(&BuildProgress) + Sync + Send);

/// Progress information during a project build
#[derive(Debug, Clone)]
pub struct BuildProgress {
    /// Current build phase
    pub phase: BuildPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Workspace-relative file being processed (if applicable)
    pub current_file: Option<String>,
}

impl BuildProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: BuildPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(phase: BuildPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a project build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Creating the project directory skeleton
    Scaffolding,
    /// Writing the project and mod descriptors
    WritingMetadata,
    /// Copying workspace files into the project
    CopyingFiles,
    /// Rewriting and re-encoding structured files
    RewritingFiles,
    /// Build complete
    Complete,
}

impl BuildPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scaffolding => "Creating project structure",
            Self::WritingMetadata => "Writing metadata",
            Self::CopyingFiles => "Copying files",
            Self::RewritingFiles => "Rewriting references",
            Self::Complete => "Complete",
        }
    }
}
