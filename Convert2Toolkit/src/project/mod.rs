//! Project assembly
//!
//! A workspace is a converted mod tree with `Public/` and `Mods/` folders.
//! Building it produces a toolkit project under the output root, named after
//! the workspace and suffixed with a fresh GUID.

pub mod builder;
pub mod identity;
pub mod prompt;
pub mod registry;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use builder::{BuildReport, FileFailure, FileStage, ProjectBuilder};
pub use identity::{ProjectIdentity, generate_guid, is_guid, sanitize_name, workspace_name};
pub use prompt::{NamePrompt, PromptAnswer};
pub use registry::{BatchBuildResult, ProjectOutcome, ProjectRegistry, ProjectResult};
pub use types::{BuildPhase, BuildProgress, BuildProgressCallback};

/// Folders a workspace must contain
pub const WORKSPACE_MARKERS: [&str; 2] = ["Public", "Mods"];

/// Check if a directory is a buildable workspace
#[must_use]
pub fn is_project(path: &Path) -> bool {
    path.is_dir() && WORKSPACE_MARKERS.iter().all(|marker| path.join(marker).exists())
}

/// The nine folders every project starts with, relative to its root
#[must_use]
pub fn skeleton_dirs(identity: &ProjectIdentity) -> [String; 9] {
    let name = &identity.name;
    let pak = sanitize_name(&identity.raw_name);
    [
        format!("Editor/Mods/{name}"),
        format!("Generated/Public/{name}"),
        format!("Public/{name}/RootTemplates"),
        format!("Public/{name}/Content/[PAK]_{pak}"),
        format!("Mods/{name}/Localization/English"),
        format!("Mods/{name}"),
        format!("Mods/{name}/Scripts"),
        format!("Mods/{name}/GUI"),
        format!("Projects/{name}"),
    ]
}

/// Create the project skeleton under `root`
pub fn create_skeleton(root: &Path, identity: &ProjectIdentity) -> Result<()> {
    for dir in skeleton_dirs(identity) {
        fs::create_dir_all(root.join(dir))?;
    }
    Ok(())
}
