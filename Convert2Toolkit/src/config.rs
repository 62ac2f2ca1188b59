//! Build settings
//!
//! Settings come from a TOML file. The lookup order is an explicit path, then
//! `./convert2toolkit.toml`, then `<config dir>/Convert2Toolkit/config.toml`.
//! When no file exists the defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::{ConverterCommand, LsxCodec};
use crate::error::{Error, Result};
use crate::meta::TemplateStore;

/// Settings file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "convert2toolkit.toml";

// Default value functions for serde
fn default_output_root() -> PathBuf {
    PathBuf::from("convert")
}

/// Settings shared by every build of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Directory that receives the built projects
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Directory holding `project_meta.lsx` and `mod_meta.lsx`.
    /// Bundled templates are used when unset.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// Ask for a project name before each build
    #[serde(default)]
    pub interactive: bool,
    /// Show converter output
    #[serde(default)]
    pub verbose: bool,
    /// External LSX → LSF converter
    #[serde(default)]
    pub converter: Option<ConverterCommand>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            templates_dir: None,
            interactive: false,
            verbose: false,
            converter: None,
        }
    }
}

impl BuildSettings {
    /// Per-user settings file
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("Convert2Toolkit").join("config.toml"))
    }

    /// Load settings following the lookup order. A missing explicit file is
    /// an error; missing implicit files are not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(Self::user_config_path());
        for path in candidates {
            if path.is_file() {
                tracing::debug!("Loading settings from {}", path.display());
                return Self::load_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load settings from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse settings and expand `~` in path values
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(content)?;
        settings.expand_paths();
        Ok(settings)
    }

    fn expand_paths(&mut self) {
        self.output_root = expand_tilde(&self.output_root);
        if let Some(dir) = &self.templates_dir {
            self.templates_dir = Some(expand_tilde(dir));
        }
        if let Some(converter) = &mut self.converter {
            converter.program = shellexpand::tilde(&converter.program).into_owned();
        }
    }

    /// Template source for these settings
    #[must_use]
    pub fn template_store(&self) -> TemplateStore {
        self.templates_dir
            .as_ref()
            .map_or_else(TemplateStore::bundled, TemplateStore::from_dir)
    }

    /// Codec for these settings
    #[must_use]
    pub fn codec(&self) -> LsxCodec {
        LsxCodec::new(self.converter.clone())
    }
}

/// Expand a leading `~` in a path
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(BuildSettings::from_toml("").unwrap(), BuildSettings::default());
        assert_eq!(BuildSettings::default().output_root, PathBuf::from("convert"));
    }

    #[test]
    fn test_parses_all_fields() {
        let settings = BuildSettings::from_toml(
            r#"
output_root = "out"
templates_dir = "templates"
interactive = true
verbose = true

[converter]
program = "divine"
args = ["-a", "convert-resource", "-s", "{input}", "-d", "{output}"]
"#,
        )
        .unwrap();

        assert_eq!(settings.output_root, PathBuf::from("out"));
        assert_eq!(settings.templates_dir, Some(PathBuf::from("templates")));
        assert!(settings.interactive);
        assert!(settings.verbose);
        let converter = settings.converter.unwrap();
        assert_eq!(converter.program, "divine");
        assert_eq!(converter.args.len(), 6);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let settings = BuildSettings::from_toml(r#"output_root = "~/bg3/convert""#).unwrap();
        assert!(!settings.output_root.to_string_lossy().starts_with('~'));
        assert!(settings.output_root.ends_with("bg3/convert"));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let err = BuildSettings::from_toml("interactive = \"sometimes\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "interactive = true").unwrap();

        let settings = BuildSettings::load(Some(&path)).unwrap();
        assert!(settings.interactive);

        let missing = temp.path().join("missing.toml");
        assert!(matches!(
            BuildSettings::load(Some(&missing)),
            Err(Error::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_template_store_follows_settings() {
        let mut settings = BuildSettings::default();
        assert!(settings.template_store().dir().is_none());

        settings.templates_dir = Some(PathBuf::from("tpl"));
        assert_eq!(settings.template_store().dir(), Some(Path::new("tpl")));
    }
}
