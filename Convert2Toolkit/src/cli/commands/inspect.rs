//! CLI command for inspecting structured files

use std::path::Path;

use crate::codec::StructuredCodec;
use crate::config::BuildSettings;

/// Print the data type of a file and whether builds rewrite it
pub fn execute(path: &Path, settings: &BuildSettings) -> anyhow::Result<()> {
    let data_type = settings.codec().data_type(path)?;

    println!("File: {}", path.display());
    println!("Type: {data_type}");
    println!("LSF type: {}", if data_type.is_lsf() { "yes" } else { "no" });
    println!(
        "Rewritten on build: {}",
        if data_type.is_rewrite_target() { "yes" } else { "no" }
    );
    Ok(())
}
