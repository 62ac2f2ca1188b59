//! Relocation rules
//!
//! Where each workspace file lands in the project, and how references inside
//! structured files follow it.

pub mod content;
pub mod path;
pub mod structure;

pub use content::{rewrite_content, rewrite_file};
pub use path::{compute_destination, is_namespaced};
pub use structure::{is_editor_file, translate_structure};
