//! Project metadata generation
//!
//! Every project gets two `meta.lsx` documents: the toolkit project
//! descriptor under `Projects/<name>/` and the mod descriptor under
//! `Mods/<name>/`. Both are instantiated from `$TOKEN` templates.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::project::ProjectIdentity;
use crate::project::identity::generate_guid;

pub use templates::{TemplateKind, TemplateStore};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\$[A-Z_]+").expect("valid regex");
}

/// Name of both metadata documents
pub const META_FILE: &str = "meta.lsx";

/// Escape the five XML reserved characters in one pass.
///
/// Escaping an already escaped string escapes its `&` again.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace `$TOKEN`s in a single pass.
///
/// Substituted values are never scanned again and unknown tokens are kept.
#[must_use]
pub fn instantiate(template: &str, tokens: &[(&str, &str)]) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            tokens
                .iter()
                .find(|(name, _)| *name == token)
                .map_or_else(|| token.to_string(), |(_, value)| (*value).to_string())
        })
        .into_owned()
}

/// Writes the project and mod descriptors of a project
#[derive(Debug, Clone, Default)]
pub struct MetadataGenerator {
    store: TemplateStore,
}

impl MetadataGenerator {
    #[must_use]
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Instantiate the project descriptor. `project_id` is the descriptor's
    /// own GUID, distinct from the module GUID.
    pub fn project_meta(&self, identity: &ProjectIdentity, project_id: &str) -> Result<String> {
        let template = self.store.load(TemplateKind::Project)?;
        let name = xml_escape(&identity.raw_name);
        Ok(instantiate(
            &template,
            &[
                ("$MODULE_ID", identity.guid.as_str()),
                ("$PROJECT_ID", project_id),
                ("$PROJECT_NAME", name.as_str()),
            ],
        ))
    }

    /// Instantiate the mod descriptor
    pub fn mod_meta(&self, identity: &ProjectIdentity) -> Result<String> {
        let template = self.store.load(TemplateKind::Mod)?;
        let folder = xml_escape(&identity.name);
        let name = xml_escape(&identity.raw_name);
        Ok(instantiate(
            &template,
            &[
                ("$MOD_FOLDER", folder.as_str()),
                ("$MOD_NAME", name.as_str()),
                ("$MOD_UUID", identity.guid.as_str()),
            ],
        ))
    }

    /// Write both descriptors under `project_root` and return their paths.
    ///
    /// Both templates are loaded before anything is written.
    pub fn generate(&self, project_root: &Path, identity: &ProjectIdentity) -> Result<Vec<PathBuf>> {
        let project = self.project_meta(identity, &generate_guid())?;
        let module = self.mod_meta(identity)?;

        let documents = [
            (project_meta_path(project_root, identity), project),
            (mod_meta_path(project_root, identity), module),
        ];

        let mut written = Vec::with_capacity(documents.len());
        for (path, content) in documents {
            write_document(&path, &content)?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// `Projects/<name>/meta.lsx`
#[must_use]
pub fn project_meta_path(project_root: &Path, identity: &ProjectIdentity) -> PathBuf {
    project_root
        .join("Projects")
        .join(&identity.name)
        .join(META_FILE)
}

/// `Mods/<name>/meta.lsx`
#[must_use]
pub fn mod_meta_path(project_root: &Path, identity: &ProjectIdentity) -> PathBuf {
    project_root.join("Mods").join(&identity.name).join(META_FILE)
}

fn write_document(path: &Path, content: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    };
    write().map_err(|source| Error::MetadataWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const GUID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    #[test]
    fn test_xml_escape_reserved_characters() {
        assert_eq!(
            xml_escape(r#"<a & 'b' "c">"#),
            "&lt;a &amp; &apos;b&apos; &quot;c&quot;&gt;"
        );
        assert_eq!(xml_escape("Plain Name 123"), "Plain Name 123");
    }

    #[test]
    fn test_xml_escape_twice_double_escapes_ampersand() {
        assert_eq!(xml_escape(&xml_escape("&")), "&amp;amp;");
    }

    #[test]
    fn test_instantiate_is_single_pass() {
        let out = instantiate(
            "$MOD_NAME / $MOD_UUID / $UNKNOWN",
            &[("$MOD_NAME", "$MOD_UUID"), ("$MOD_UUID", GUID)],
        );
        assert_eq!(out, format!("$MOD_UUID / {GUID} / $UNKNOWN"));
    }

    #[test]
    fn test_mod_meta_escapes_names() {
        let identity = ProjectIdentity::with_guid("Swords & <Shields>", GUID);
        let generator = MetadataGenerator::default();
        let meta = generator.mod_meta(&identity).unwrap();

        assert!(meta.contains(r#"value="Swords &amp; &lt;Shields&gt;""#));
        assert!(meta.contains(&format!(r#"value="{}""#, identity.name)));
        assert!(meta.contains(&format!(r#"id="UUID" type="FixedString" value="{GUID}""#)));
        assert!(!meta.contains('$'));
    }

    #[test]
    fn test_project_meta_uses_distinct_ids() {
        let identity = ProjectIdentity::with_guid("MyMod", GUID);
        let project_id = generate_guid();
        let meta = MetadataGenerator::default()
            .project_meta(&identity, &project_id)
            .unwrap();

        assert!(meta.contains(&format!(r#"value="{GUID}""#)));
        assert!(meta.contains(&format!(r#"value="{project_id}""#)));
        assert_ne!(project_id, GUID);
    }

    #[test]
    fn test_generate_writes_both_documents() {
        let temp = TempDir::new().unwrap();
        let identity = ProjectIdentity::with_guid("MyMod", GUID);
        let written = MetadataGenerator::default()
            .generate(temp.path(), &identity)
            .unwrap();

        assert_eq!(
            written,
            vec![
                project_meta_path(temp.path(), &identity),
                mod_meta_path(temp.path(), &identity),
            ]
        );
        for path in written {
            let content = fs::read_to_string(path).unwrap();
            assert!(content.starts_with("<?xml"));
        }
    }

    #[test]
    fn test_generate_fails_on_missing_template() {
        let temp = TempDir::new().unwrap();
        let identity = ProjectIdentity::with_guid("MyMod", GUID);
        let generator = MetadataGenerator::new(TemplateStore::from_dir(temp.path().join("none")));

        let err = generator.generate(temp.path(), &identity).unwrap_err();
        assert!(matches!(err, Error::TemplateRead { .. }));
        assert!(!project_meta_path(temp.path(), &identity).exists());
    }
}
