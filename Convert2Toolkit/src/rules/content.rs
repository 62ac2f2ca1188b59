//! In-file path reference rewriting
//!
//! Resource banks and UI atlas descriptions reference generated meshes and
//! UI assets by path. After a file moves into the project namespace those
//! references have to follow it.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::codec::DataType;
use crate::error::Result;

lazy_static! {
    /// First `Generated/<segment>/` reference (shortest match)
    static ref GENERATED_REF: Regex = Regex::new(r"Generated/(.*?)/").expect("valid regex");
    /// `Public/<segment>/Assets/` reference, one segment only
    static ref PUBLIC_ASSETS: Regex =
        Regex::new(r"Public/([^/\r\n]*?)/Assets/").expect("valid regex");
}

/// Mod folder whose assets are shared with the base game and never renamed
const SHARED_FOLDER: &str = "Shared";

/// Rewrite the path references in `content` for project `pname`.
///
/// LSF types get their `Generated/` references moved under
/// `Generated/Public/<pname>/`, keyed on the first reference found. Every
/// type gets `Public/<segment>/Assets/` renamed to `Public/<pname>/Assets/`,
/// except `Public/Shared/Assets/`.
#[must_use]
pub fn rewrite_content(content: &str, data_type: &DataType, pname: &str) -> String {
    let mut data = content.to_string();

    if data_type.is_lsf() {
        if let Some(caps) = GENERATED_REF.captures(&data) {
            data = if &caps[1] == "Public" {
                data.replace("Generated/Public/", &format!("Generated/Public/{pname}/"))
            } else {
                data.replace("Generated/", &format!("Generated/Public/{pname}/"))
            };
        }
    }

    PUBLIC_ASSETS
        .replace_all(&data, |caps: &Captures| {
            if &caps[1] == SHARED_FOLDER {
                caps[0].to_string()
            } else {
                format!("Public/{pname}/Assets/")
            }
        })
        .into_owned()
}

/// Rewrite a file in place. Returns whether its content changed.
pub fn rewrite_file(path: &Path, data_type: &DataType, pname: &str) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let rewritten = rewrite_content(&content, data_type, pname);
    if rewritten == content {
        return Ok(false);
    }
    fs::write(path, rewritten)?;
    tracing::debug!("Rewrote path references in {}", path.display());
    Ok(true)
}
