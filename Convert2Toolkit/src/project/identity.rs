//! Project naming and identifiers

use std::path::{Path, PathBuf};

/// Length of a hyphenated GUID
const GUID_LEN: usize = 36;

/// Characters kept by [`sanitize_name`] besides alphanumerics
const NAME_SYMBOLS: [char; 4] = ['_', '-', '(', ')'];

/// Identity of a project being built.
///
/// `name` is the directory-safe project name (`sanitize(raw_name)_guid`) used
/// for every namespaced folder; `raw_name` is what users see in reports and
/// in the metadata display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// Human-readable name (workspace folder name or prompt override)
    pub raw_name: String,
    /// Project GUID, shared by the module and the mod descriptor
    pub guid: String,
    /// `sanitize(raw_name) + "_" + guid`
    pub name: String,
}

impl ProjectIdentity {
    /// Create an identity with a freshly generated GUID
    #[must_use]
    pub fn generate(raw_name: &str) -> Self {
        Self::with_guid(raw_name, &generate_guid())
    }

    /// Create an identity from an existing GUID
    #[must_use]
    pub fn with_guid(raw_name: &str, guid: &str) -> Self {
        Self {
            raw_name: raw_name.to_string(),
            guid: guid.to_string(),
            name: sanitize_name(&format!("{raw_name}_{guid}")),
        }
    }

    /// Same GUID, different display name
    #[must_use]
    pub fn renamed(&self, raw_name: &str) -> Self {
        Self::with_guid(raw_name, &self.guid)
    }

    /// Project root under the output directory (`<output_root>/<name>`)
    #[must_use]
    pub fn root(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.name)
    }
}

/// Strip every character outside `[A-Za-z0-9_\-()]`.
///
/// Non-ASCII letters and digits are stripped as well.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || NAME_SYMBOLS.contains(c))
        .collect()
}

/// Generate a new random GUID in hyphenated lowercase form
#[must_use]
pub fn generate_guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Check if a string has the shape of a hyphenated GUID
#[must_use]
pub fn is_guid(value: &str) -> bool {
    value.len() == GUID_LEN
        && [8, 13, 18, 23]
            .iter()
            .all(|&i| value.as_bytes().get(i) == Some(&b'-'))
}

/// Check if a directory name ends in `_<guid>`, the shape of a built
/// project's name
#[must_use]
pub fn has_guid_suffix(name: &str) -> bool {
    name.len() > GUID_LEN
        && name
            .get(name.len() - GUID_LEN..)
            .is_some_and(is_guid)
        && name.as_bytes()[name.len() - GUID_LEN - 1] == b'_'
}

/// Display name of a workspace: its final path component.
///
/// Falls back to the full path when the path has no file name (e.g. `..`).
#[must_use]
pub fn workspace_name(workspace: &Path) -> String {
    workspace
        .file_name()
        .map_or_else(
            || workspace.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_allowed_set() {
        assert_eq!(sanitize_name("My Cool Mod!"), "MyCoolMod");
        assert_eq!(sanitize_name("armor_(v2)-final"), "armor_(v2)-final");
        assert_eq!(sanitize_name("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_sanitize_output_only_allowed_chars() {
        let inputs = ["Dröm & Co.", "   ", "x$y%z^", "tab\tnew\nline", "[PAK]_Name"];
        for input in inputs {
            let out = sanitize_name(input);
            assert!(
                out.chars().all(|c| c.is_ascii_alphanumeric() || NAME_SYMBOLS.contains(&c)),
                "{input:?} -> {out:?}"
            );
        }
    }

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!(sanitize_name("Dröm & Co."), "DrmCo");
        assert_eq!(sanitize_name("Ⅻ٣名前"), "");
    }

    #[test]
    fn test_identity_name_suffixes_guid() {
        let id = ProjectIdentity::with_guid("My Mod", "1234abcd-0000-0000-0000-000000000000");
        assert_eq!(id.raw_name, "My Mod");
        assert_eq!(id.name, "MyMod_1234abcd-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_renamed_keeps_guid() {
        let id = ProjectIdentity::generate("First");
        let renamed = id.renamed("Second");
        assert_eq!(renamed.guid, id.guid);
        assert_eq!(renamed.name, format!("Second_{}", id.guid));
    }

    #[test]
    fn test_generated_guids_differ() {
        let a = generate_guid();
        let b = generate_guid();
        assert!(is_guid(&a));
        assert!(is_guid(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_guid() {
        assert!(is_guid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_guid("550e8400e29b41d4a716446655440000"));
        assert!(!is_guid("not-a-guid"));
    }

    #[test]
    fn test_has_guid_suffix() {
        assert!(has_guid_suffix("MyMod_550e8400-e29b-41d4-a716-446655440000"));
        assert!(!has_guid_suffix("MyMod-550e8400-e29b-41d4-a716-446655440000"));
        assert!(!has_guid_suffix("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!has_guid_suffix("MyMod"));
    }

    #[test]
    fn test_workspace_name() {
        assert_eq!(workspace_name(Path::new("convert/MyMod")), "MyMod");
        assert_eq!(workspace_name(Path::new("convert/MyMod/")), "MyMod");
    }
}
