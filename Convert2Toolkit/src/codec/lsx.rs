//! LSX inspection and external LSF conversion

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};

use super::{DataType, StructuredCodec};
use crate::error::{Error, Result};

/// Placeholder replaced by the text document path
const INPUT_TOKEN: &str = "{input}";
/// Placeholder replaced by the binary document path
const OUTPUT_TOKEN: &str = "{output}";

/// External LSX → LSF converter invocation.
///
/// `args` may contain `{input}` and `{output}`; with no args the converter is
/// called as `program {input} {output}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ConverterCommand {
    /// Arguments for a single conversion
    #[must_use]
    pub fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        if self.args.is_empty() {
            return vec![input.into_owned(), output.into_owned()];
        }
        self.args
            .iter()
            .map(|arg| arg.replace(INPUT_TOKEN, &input).replace(OUTPUT_TOKEN, &output))
            .collect()
    }

    /// Run the converter and wait for it
    pub fn run(&self, input: &Path, output: &Path, verbose: bool) -> Result<()> {
        let stdio = || if verbose { Stdio::inherit() } else { Stdio::null() };
        let status = Command::new(&self.program)
            .args(self.arguments(input, output))
            .stdin(Stdio::null())
            .stdout(stdio())
            .stderr(stdio())
            .status()
            .map_err(|source| Error::ConverterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::ConverterFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Codec for converted (LSX) workspaces.
///
/// The data type is the id of the document's first `<region>`. Re-encoding is
/// handed to an external converter; without one, documents stay in LSX form,
/// which the toolkit also loads.
#[derive(Debug, Clone, Default)]
pub struct LsxCodec {
    converter: Option<ConverterCommand>,
}

impl LsxCodec {
    #[must_use]
    pub fn new(converter: Option<ConverterCommand>) -> Self {
        Self { converter }
    }

    /// Path of the binary document produced for `path`
    #[must_use]
    pub fn binary_path(path: &Path) -> PathBuf {
        path.with_extension("lsf")
    }
}

impl StructuredCodec for LsxCodec {
    fn data_type(&self, path: &Path) -> Result<DataType> {
        let is_lsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("lsx"));
        if !is_lsx {
            return Ok(DataType::Unknown);
        }

        Ok(read_region_id(path)?
            .map_or(DataType::Unknown, |region| DataType::from_region(&region)))
    }

    fn reencode(&self, path: &Path, verbose: bool) -> Result<()> {
        let Some(converter) = &self.converter else {
            tracing::debug!("No converter configured, keeping {}", path.display());
            return Ok(());
        };

        let output = Self::binary_path(path);
        converter.run(path, &output, verbose)?;

        if output != path && output.exists() {
            fs::remove_file(path)?;
        }
        tracing::debug!("Re-encoded {}", output.display());
        Ok(())
    }
}

/// Read the id of the first `<region>` element, stopping as soon as it is found
pub fn read_region_id(path: &Path) -> Result<Option<String>> {
    let mut reader = Reader::from_file(path)?;
    reader.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"region" => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"id" {
                        return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const BANK: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<save>
    <version major="4" minor="0" revision="9" build="328"/>
    <region id="VisualBank">
        <node id="VisualBank">
            <children/>
        </node>
    </region>
</save>"#;

    #[test]
    fn test_reads_first_region() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bank.lsx", BANK);
        assert_eq!(read_region_id(&path).unwrap().as_deref(), Some("VisualBank"));

        let codec = LsxCodec::default();
        assert_eq!(
            codec.data_type(&path).unwrap(),
            DataType::Lsf("VisualBank".to_string())
        );
    }

    #[test]
    fn test_document_without_region_is_unknown() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "empty.lsx", "<save><version major=\"4\"/></save>");
        assert_eq!(LsxCodec::default().data_type(&path).unwrap(), DataType::Unknown);
    }

    #[test]
    fn test_other_extensions_are_unknown() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "mesh.gr2", "not xml at all");
        assert_eq!(LsxCodec::default().data_type(&path).unwrap(), DataType::Unknown);
    }

    #[test]
    fn test_malformed_lsx_errors() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "broken.lsx", "<save><region id=\"A\"></save>");
        // The region is found before the mismatched close tag is reached.
        assert!(LsxCodec::default().data_type(&path).is_ok());

        let path = write(&temp, "broken2.lsx", "<save></region>");
        assert!(LsxCodec::default().data_type(&path).is_err());
    }

    #[test]
    fn test_reencode_without_converter_keeps_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bank.lsx", BANK);
        LsxCodec::default().reencode(&path, false).unwrap();
        assert!(path.exists());
        assert!(!LsxCodec::binary_path(&path).exists());
    }

    #[test]
    fn test_converter_arguments() {
        let default_args = ConverterCommand {
            program: "divine".to_string(),
            args: Vec::new(),
        };
        assert_eq!(
            default_args.arguments(Path::new("a.lsx"), Path::new("a.lsf")),
            vec!["a.lsx", "a.lsf"]
        );

        let templated = ConverterCommand {
            program: "maclarian".to_string(),
            args: vec![
                "convert".to_string(),
                "-s".to_string(),
                "{input}".to_string(),
                "-d".to_string(),
                "{output}".to_string(),
            ],
        };
        assert_eq!(
            templated.arguments(Path::new("a.lsx"), Path::new("a.lsf")),
            vec!["convert", "-s", "a.lsx", "-d", "a.lsf"]
        );
    }

    #[test]
    fn test_missing_converter_program_errors() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bank.lsx", BANK);
        let codec = LsxCodec::new(Some(ConverterCommand {
            program: "convert2toolkit-test-no-such-program".to_string(),
            args: Vec::new(),
        }));
        assert!(matches!(
            codec.reencode(&path, false),
            Err(Error::ConverterSpawn { .. })
        ));
        assert!(path.exists());
    }
}
