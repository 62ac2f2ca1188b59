//! Destination path rules
//!
//! Maps a workspace-relative file path to its place inside the project tree.
//! All rules work on `/`-delimited strings so they can be tested without
//! touching the filesystem.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use super::structure::{is_editor_file, translate_structure};
use crate::project::ProjectIdentity;

lazy_static! {
    /// First `/Public/<segment>/` (shortest match)
    static ref PUBLIC_SEGMENT: Regex = Regex::new(r"/Public/.*?/").expect("valid regex");
    /// First `/Mods/<segment>/` (shortest match)
    static ref MODS_SEGMENT: Regex = Regex::new(r"/Mods/.*?/").expect("valid regex");
    /// `/Stats/Generated/` with an optional `Data/`
    static ref STATS_GENERATED: Regex =
        Regex::new(r"/Stats/Generated/(Data/)?").expect("valid regex");
}

/// Compute where a workspace file lands inside the project.
///
/// `relative_path` is the file path with the workspace directory stripped
/// (e.g. `Public/MyMod/RootTemplates/foo.lsf`). The result is relative to the
/// project root and never starts with a separator.
///
/// Running the function on its own output returns the same path.
///
/// Files at the workspace root, or under a top-level folder no rule covers
/// (e.g. `Scripts/x.lua`), keep their relative path and so land outside the
/// project's namespaced folders. See [`is_namespaced`].
#[must_use]
pub fn compute_destination(relative_path: &str, identity: &ProjectIdentity) -> String {
    let normalized = relative_path.replace('\\', "/");
    let normalized = normalized.trim_start_matches('/');
    let (dir, file_name) = normalized.rsplit_once('/').unwrap_or(("", normalized));

    let dir = translate_dir(&format!("/{dir}/"), file_name, &identity.name);
    let dest = collapse_separators(&format!("{dir}{file_name}"));
    dest.trim_start_matches('/').to_string()
}

/// Apply the namespace rules to a `/`-wrapped directory path.
///
/// Order: namespace segments, editor stats layout, generated assets,
/// localization.
#[must_use]
pub fn translate_dir(dir: &str, file_name: &str, pname: &str) -> String {
    let public = format!("/Public/{pname}/");
    let mods = format!("/Mods/{pname}/");

    let mut dir = PUBLIC_SEGMENT.replace(dir, NoExpand(&public)).into_owned();
    dir = MODS_SEGMENT.replace(&dir, NoExpand(&mods)).into_owned();

    if is_editor_file(file_name) {
        dir = STATS_GENERATED.replace_all(&dir, "/Stats/").into_owned();
        dir = dir.replace(&public, &format!("/Editor/Mods/{pname}/"));
        dir = translate_structure(&dir, file_name);
    }

    if dir.contains("/Generated/")
        && !dir.contains("/Generated/Public/")
        && !dir.contains("/Stats/Generated/")
    {
        dir = dir.replace("/Generated/", &format!("/Generated/Public/{pname}/"));
    }

    let localization = format!("/Mods/{pname}/Localization/");
    if dir.contains("/Localization/") && !dir.contains(&localization) {
        dir = dir.replace("/Localization/", &localization);
    }

    dir
}

/// Whether a project-relative destination lies inside one of the project's
/// namespaced folders (a path segment equal to `pname`)
#[must_use]
pub fn is_namespaced(destination: &str, pname: &str) -> bool {
    destination
        .split('/')
        .rev()
        .skip(1)
        .any(|segment| segment == pname)
}

/// Collapse runs of `/` into a single separator
#[must_use]
pub fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}
