//! # Convert2Toolkit
//!
//! Assembles converted Baldur's Gate 3 mod workspaces into projects laid out
//! the way the Larian modding toolkit expects.
//!
//! A workspace is a directory holding `Public/` and `Mods/` trees produced by
//! unpacking and converting a mod. Each build creates
//! `<output_root>/<name>_<guid>/` with the toolkit skeleton, fresh project and
//! mod descriptors, and every workspace file moved into the project's
//! namespace. Path references inside resource banks and UI atlases are
//! rewritten to follow the files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use convert2toolkit::project::{ProjectBuilder, ProjectRegistry};
//!
//! let mut registry = ProjectRegistry::new();
//! registry.discover(Path::new("convert"))?;
//!
//! let builder = ProjectBuilder::new("convert");
//! let batch = registry.build_all(&builder, None);
//! println!("{} built, {} failed", batch.success_count, batch.fail_count);
//! # Ok::<(), convert2toolkit::Error>(())
//! ```
//!
//! A build is all-or-nothing: if it fails, the partially written project is
//! removed before the error is returned.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `convert2toolkit` command-line binary

pub mod codec;
pub mod config;
pub mod error;
pub mod meta;
pub mod project;
pub mod rules;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::codec::{DataType, LsxCodec, StructuredCodec};
    pub use crate::config::BuildSettings;
    pub use crate::error::{Error, Result};
    pub use crate::meta::{MetadataGenerator, TemplateStore, xml_escape};
    pub use crate::project::{
        BatchBuildResult, BuildPhase, BuildProgress, BuildReport, NamePrompt, ProjectBuilder,
        ProjectIdentity, ProjectOutcome, ProjectRegistry, PromptAnswer, is_project,
    };
    pub use crate::rules::{compute_destination, rewrite_content};
}

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
