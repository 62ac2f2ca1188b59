//! Structured document codec boundary
//!
//! The builder never decodes LSX/LSF itself. It asks a [`StructuredCodec`]
//! what kind of document a file is and to turn rewritten text back into the
//! compact form the game loads.

pub mod lsx;
pub mod types;

use std::path::Path;

use crate::error::Result;

pub use lsx::{ConverterCommand, LsxCodec};
pub use types::{DataType, LSF_TYPES};

/// Inspects and re-encodes structured game documents.
pub trait StructuredCodec {
    /// Classify a file. Files that are not structured documents are
    /// [`DataType::Unknown`].
    fn data_type(&self, path: &Path) -> Result<DataType>;

    /// Re-serialize a text-form document to its binary form in place.
    fn reencode(&self, path: &Path, verbose: bool) -> Result<()>;
}
