//! Error types for `Convert2Toolkit`

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The error type for `Convert2Toolkit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    // ==================== Build Outcomes ====================
    /// The workspace lacks the `Public/` and `Mods/` directories.
    #[error("{name} is not a valid project")]
    InvalidWorkspace {
        /// Human-readable workspace name.
        name: String,
    },

    /// The user chose to skip the workspace at the name prompt.
    #[error("skipped project {name}")]
    UserSkipped {
        /// Human-readable workspace name.
        name: String,
    },

    /// The build failed and the partially built project was removed.
    #[error("failed to create project {name}: {source}")]
    BuildFailed {
        /// Human-readable project name.
        name: String,
        /// The error that aborted the build.
        source: Box<Error>,
    },

    /// The name prompt could not be answered.
    #[error("prompt failed: {0}")]
    Prompt(String),

    // ==================== Metadata Errors ====================
    /// A metadata template could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        /// Path of the template file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An instantiated metadata document could not be written.
    #[error("failed to write metadata {path}: {source}")]
    MetadataWrite {
        /// Destination of the metadata document.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    // ==================== File Transfer Errors ====================
    /// A workspace file could not be copied into the project.
    #[error("failed to copy {from} to {to}: {source}")]
    CopyFailed {
        /// Source file inside the workspace.
        from: PathBuf,
        /// Destination inside the project.
        to: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    // ==================== Codec Errors ====================
    /// XML parsing error while inspecting an LSX file.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    /// The external converter could not be started.
    #[error("failed to run converter {program}: {source}")]
    ConverterSpawn {
        /// Converter program.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The external converter exited unsuccessfully.
    #[error("converter {program} exited with {status}")]
    ConverterFailed {
        /// Converter program.
        program: String,
        /// Exit status reported by the process.
        status: ExitStatus,
    },

    // ==================== Configuration Errors ====================
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the settings schema.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `Convert2Toolkit` operations.
pub type Result<T> = std::result::Result<T, Error>;
