//! CLI subcommands

pub mod build;
pub mod check;
pub mod execute;
pub mod inspect;
pub mod scan;
pub mod translate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::BuildSettings;

/// Build options shared by `build` and `scan`
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Ask for a project name before each build (X skips)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output directory for built projects
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory containing project_meta.lsx and mod_meta.lsx
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

impl BuildArgs {
    /// Settings with these flags applied on top
    #[must_use]
    pub fn apply(&self, settings: &BuildSettings) -> BuildSettings {
        let mut settings = settings.clone();
        settings.interactive |= self.interactive;
        if let Some(output) = &self.output {
            settings.output_root.clone_from(output);
        }
        if let Some(templates) = &self.templates {
            settings.templates_dir = Some(templates.clone());
        }
        settings
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build toolkit projects from workspaces
    Build {
        /// Workspace directories (each containing Public/ and Mods/)
        #[arg(required = true)]
        workspaces: Vec<PathBuf>,

        #[command(flatten)]
        options: BuildArgs,
    },

    /// Find workspaces under a directory
    Scan {
        /// Directory to search
        root: PathBuf,

        /// Build every workspace found
        #[arg(short, long)]
        build: bool,

        #[command(flatten)]
        options: BuildArgs,
    },

    /// Check whether a directory is a buildable workspace
    Check {
        /// Directory to check
        path: PathBuf,
    },

    /// Show where a workspace file lands inside a project
    Translate {
        /// Workspace-relative file path (e.g. Public/MyMod/Stats/Generated/Data/Armor.stats)
        path: String,

        /// Project name
        #[arg(short, long)]
        name: String,

        /// Project GUID (generated if not specified)
        #[arg(short, long)]
        guid: Option<String>,
    },

    /// Show the data type of a structured file
    Inspect {
        /// File to inspect
        path: PathBuf,
    },
}
