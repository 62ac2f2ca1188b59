//! CLI command for checking a workspace

use std::path::Path;

use crate::cli::progress::{print_success, print_warning};
use crate::project::{WORKSPACE_MARKERS, is_project};

/// Report whether `path` can be built
pub fn execute(path: &Path) -> anyhow::Result<()> {
    if is_project(path) {
        print_success(&format!("{} is a valid workspace", path.display()));
        return Ok(());
    }

    if !path.is_dir() {
        anyhow::bail!("{} is not a directory", path.display());
    }

    let missing: Vec<&str> = WORKSPACE_MARKERS
        .iter()
        .copied()
        .filter(|marker| !path.join(marker).exists())
        .collect();
    print_warning(&format!(
        "{} is not a valid workspace (missing {})",
        path.display(),
        missing.join(", ")
    ));
    anyhow::bail!("not a workspace")
}
