//! CLI command for discovering workspaces

use std::path::Path;

use crate::cli::progress::{LOOKING_GLASS, print_step};
use crate::config::BuildSettings;
use crate::project::ProjectRegistry;

/// List the workspaces under `root`, optionally building them
pub fn execute(root: &Path, build: bool, settings: &BuildSettings) -> anyhow::Result<()> {
    print_step(1, 1, LOOKING_GLASS, &format!("Scanning {}...", root.display()));

    let mut registry = ProjectRegistry::new();
    let found = registry.discover(root)?;

    if found == 0 {
        println!("No workspaces found in: {}", root.display());
        return Ok(());
    }

    println!("Found {found} workspace(s):");
    for workspace in registry.projects() {
        println!("  {}", workspace.display());
    }

    if build {
        println!();
        super::build::run(&registry, settings)?;
    }
    Ok(())
}
