//! Command execution implementations

use super::Commands;
use super::{build, check, inspect, scan, translate};
use crate::config::BuildSettings;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, settings: &BuildSettings) -> anyhow::Result<()> {
        match self {
            Commands::Build { workspaces, options } => {
                build::execute(workspaces, &options.apply(settings))
            }
            Commands::Scan {
                root,
                build,
                options,
            } => scan::execute(root, *build, &options.apply(settings)),
            Commands::Check { path } => check::execute(path),
            Commands::Translate { path, name, guid } => {
                translate::execute(path, name, guid.as_deref())
            }
            Commands::Inspect { path } => inspect::execute(path, settings),
        }
    }
}
