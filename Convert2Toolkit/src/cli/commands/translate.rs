//! CLI command for previewing destination paths

use crate::project::{ProjectIdentity, is_guid};
use crate::rules::compute_destination;

/// Print the project-relative destination of a workspace file
pub fn execute(path: &str, name: &str, guid: Option<&str>) -> anyhow::Result<()> {
    let identity = match guid {
        Some(guid) if !is_guid(guid) => anyhow::bail!("'{guid}' is not a GUID"),
        Some(guid) => ProjectIdentity::with_guid(name, guid),
        None => ProjectIdentity::generate(name),
    };

    println!("Project: {}", identity.name);
    println!("{path} -> {}", compute_destination(path, &identity));
    Ok(())
}
