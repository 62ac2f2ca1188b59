//! Single-project build pipeline
//!
//! A build either leaves a complete project (skeleton, metadata and every
//! workspace file) under the output root or nothing at all. Problems with an
//! individual structured file after it was copied are recorded in the
//! [`BuildReport`] and do not abort the build.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::identity::{ProjectIdentity, workspace_name};
use super::prompt::{NamePrompt, PromptAnswer};
use super::types::{BuildPhase, BuildProgress, BuildProgressCallback};
use super::{create_skeleton, is_project, skeleton_dirs};
use crate::codec::{LsxCodec, StructuredCodec};
use crate::config::BuildSettings;
use crate::error::{Error, Result};
use crate::meta::{MetadataGenerator, TemplateStore};
use crate::rules::{compute_destination, is_namespaced, rewrite_file};

/// Step of the per-file pass that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    /// Asking the codec for the data type
    Inspect,
    /// Rewriting path references
    Rewrite,
    /// Re-encoding to binary form
    Reencode,
}

impl FileStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inspect => "inspect",
            Self::Rewrite => "rewrite",
            Self::Reencode => "re-encode",
        }
    }
}

impl fmt::Display for FileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured file that could not be fully processed
#[derive(Debug)]
pub struct FileFailure {
    /// File inside the project
    pub path: PathBuf,
    pub stage: FileStage,
    pub error: Error,
}

/// Result of a successful build
#[derive(Debug)]
pub struct BuildReport {
    pub identity: ProjectIdentity,
    /// Project root directory
    pub root: PathBuf,
    /// Files copied from the workspace
    pub files_copied: usize,
    /// Files not copied because their destination already existed
    pub files_skipped: usize,
    /// Copied files whose path references changed
    pub files_rewritten: usize,
    /// Copied files handed to the codec for re-encoding
    pub files_reencoded: usize,
    /// Per-file problems that did not abort the build
    pub failures: Vec<FileFailure>,
}

impl BuildReport {
    fn new(identity: ProjectIdentity, root: PathBuf) -> Self {
        Self {
            identity,
            root,
            files_copied: 0,
            files_skipped: 0,
            files_rewritten: 0,
            files_reencoded: 0,
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, path: &Path, stage: FileStage, error: Error) {
        tracing::warn!("Failed to {stage} {}: {error}", path.display());
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            stage,
            error,
        });
    }

    /// Whether every structured file was processed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds toolkit projects from workspaces
pub struct ProjectBuilder {
    output_root: PathBuf,
    metadata: MetadataGenerator,
    codec: Box<dyn StructuredCodec>,
    verbose: bool,
}

impl fmt::Debug for ProjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectBuilder")
            .field("output_root", &self.output_root)
            .field("metadata", &self.metadata)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl ProjectBuilder {
    /// Builder writing into `output_root` with bundled templates and no
    /// external converter
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            metadata: MetadataGenerator::default(),
            codec: Box::new(LsxCodec::default()),
            verbose: false,
        }
    }

    /// Builder configured from settings
    #[must_use]
    pub fn from_settings(settings: &BuildSettings) -> Self {
        Self::new(settings.output_root.clone())
            .with_templates(settings.template_store())
            .with_codec(settings.codec())
            .with_verbose(settings.verbose)
    }

    #[must_use]
    pub fn with_templates(mut self, store: TemplateStore) -> Self {
        self.metadata = MetadataGenerator::new(store);
        self
    }

    #[must_use]
    pub fn with_codec(mut self, codec: impl StructuredCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Build one workspace.
    ///
    /// With a prompt, the user may rename or skip the project before
    /// anything is written.
    ///
    /// # Errors
    /// - [`Error::InvalidWorkspace`] / [`Error::UserSkipped`] with nothing written
    /// - [`Error::BuildFailed`] after the partial project was removed
    pub fn build(&self, workspace: &Path, prompt: Option<&dyn NamePrompt>) -> Result<BuildReport> {
        self.build_inner(workspace, prompt, None)
    }

    /// Build one workspace with progress callback
    pub fn build_with_progress(
        &self,
        workspace: &Path,
        prompt: Option<&dyn NamePrompt>,
        progress: BuildProgressCallback,
    ) -> Result<BuildReport> {
        self.build_inner(workspace, prompt, Some(progress))
    }

    pub(crate) fn build_inner(
        &self,
        workspace: &Path,
        prompt: Option<&dyn NamePrompt>,
        progress: Option<BuildProgressCallback>,
    ) -> Result<BuildReport> {
        let raw_name = workspace_name(workspace);
        if !is_project(workspace) {
            tracing::warn!("{raw_name} is not a valid project");
            return Err(Error::InvalidWorkspace { name: raw_name });
        }

        let mut identity = ProjectIdentity::generate(&raw_name);
        if let Some(prompt) = prompt {
            match prompt.ask(&identity.raw_name)? {
                PromptAnswer::UseDefault => {}
                PromptAnswer::Rename(name) => identity = identity.renamed(&name),
                PromptAnswer::Skip => {
                    tracing::info!("Skipped project {raw_name}");
                    return Err(Error::UserSkipped { name: raw_name });
                }
            }
        }

        let root = identity.root(&self.output_root);
        let created_output_root = !self.output_root.exists();

        match self.assemble(workspace, &identity, &root, progress) {
            Ok(report) => {
                tracing::info!(
                    "Project {} successfully created ({} files)",
                    identity.raw_name,
                    report.files_copied
                );
                Ok(report)
            }
            Err(err) => {
                tracing::error!("Failed to create project {}: {err}", identity.raw_name);
                self.rollback(&root, created_output_root);
                Err(Error::BuildFailed {
                    name: identity.raw_name,
                    source: Box::new(err),
                })
            }
        }
    }

    fn assemble(
        &self,
        workspace: &Path,
        identity: &ProjectIdentity,
        root: &Path,
        progress: Option<BuildProgressCallback>,
    ) -> Result<BuildReport> {
        let notify = |update: BuildProgress| {
            if let Some(cb) = progress {
                cb(&update);
            }
        };

        notify(BuildProgress::new(
            BuildPhase::Scaffolding,
            0,
            skeleton_dirs(identity).len(),
        ));
        create_skeleton(root, identity)?;

        notify(BuildProgress::new(BuildPhase::WritingMetadata, 0, 2));
        self.metadata.generate(root, identity)?;

        let files = collect_files(workspace)?;
        let total = files.len();
        let mut report = BuildReport::new(identity.clone(), root.to_path_buf());
        let mut copied = Vec::new();

        for (i, file) in files.iter().enumerate() {
            let relative = file
                .strip_prefix(workspace)
                .map_err(|_| Error::InvalidPath(file.display().to_string()))?
                .to_string_lossy()
                .into_owned();
            notify(BuildProgress::with_file(BuildPhase::CopyingFiles, i + 1, total, &relative));

            let destination = compute_destination(&relative, identity);
            if !is_namespaced(&destination, &identity.name) {
                tracing::warn!("{relative} is outside the project namespace, copied to {destination}");
            }
            let dest = root.join(destination);
            if dest.exists() {
                tracing::debug!("Keeping existing {}", dest.display());
                report.files_skipped += 1;
                continue;
            }
            copy_file(file, &dest)?;
            report.files_copied += 1;
            copied.push(dest);
        }

        let total = copied.len();
        for (i, dest) in copied.iter().enumerate() {
            notify(BuildProgress::with_file(
                BuildPhase::RewritingFiles,
                i + 1,
                total,
                dest.display().to_string(),
            ));
            self.process_file(dest, identity, &mut report);
        }

        notify(BuildProgress::new(BuildPhase::Complete, total, total));
        Ok(report)
    }

    /// Rewrite and re-encode one copied file. Failures go into the report.
    fn process_file(&self, path: &Path, identity: &ProjectIdentity, report: &mut BuildReport) {
        let data_type = match self.codec.data_type(path) {
            Ok(data_type) => data_type,
            Err(err) => {
                report.record_failure(path, FileStage::Inspect, err);
                return;
            }
        };
        if !data_type.is_rewrite_target() {
            return;
        }

        match rewrite_file(path, &data_type, &identity.name) {
            Ok(true) => report.files_rewritten += 1,
            Ok(false) => {}
            Err(err) => {
                report.record_failure(path, FileStage::Rewrite, err);
                return;
            }
        }

        match self.codec.reencode(path, self.verbose) {
            Ok(()) => report.files_reencoded += 1,
            Err(err) => report.record_failure(path, FileStage::Reencode, err),
        }
    }

    /// Remove everything a failed build wrote
    fn rollback(&self, root: &Path, created_output_root: bool) {
        if root.exists() {
            if let Err(err) = fs::remove_dir_all(root) {
                tracing::error!("Failed to remove {}: {err}", root.display());
                return;
            }
            tracing::debug!("Removed {}", root.display());
        }

        if created_output_root && is_empty_dir(&self.output_root) {
            if let Err(err) = fs::remove_dir(&self.output_root) {
                tracing::warn!("Failed to remove {}: {err}", self.output_root.display());
            }
        }
    }
}

/// Every regular file under `dir`, sorted
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy = || -> std::io::Result<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        Ok(())
    };
    copy().map_err(|source| Error::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    tracing::debug!("Copied {} -> {}", from.display(), to.display());
    Ok(())
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DataType;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir) -> PathBuf {
        let ws = temp.path().join("convert").join("MyMod");
        fs::create_dir_all(ws.join("Public/MyMod/RootTemplates")).unwrap();
        fs::create_dir_all(ws.join("Mods/MyMod")).unwrap();
        fs::write(ws.join("Public/MyMod/RootTemplates/foo.lsf"), "binary").unwrap();
        ws
    }

    /// Codec that calls every `.lsx` file a failing type
    struct FailingCodec;

    impl StructuredCodec for FailingCodec {
        fn data_type(&self, path: &Path) -> Result<DataType> {
            if path.extension().is_some_and(|e| e == "lsx") {
                Ok(DataType::from_region("VisualBank"))
            } else {
                Ok(DataType::Unknown)
            }
        }

        fn reencode(&self, path: &Path, _verbose: bool) -> Result<()> {
            Err(Error::InvalidPath(path.display().to_string()))
        }
    }

    #[test]
    fn test_invalid_workspace_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = temp.path().join("NotAMod");
        fs::create_dir_all(ws.join("Public")).unwrap();
        let out = temp.path().join("out");

        let err = ProjectBuilder::new(&out).build(&ws, None).unwrap_err();
        assert!(matches!(err, Error::InvalidWorkspace { ref name } if name == "NotAMod"));
        assert!(!out.exists());
    }

    #[test]
    fn test_skip_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        let out = temp.path().join("out");
        let asked = Cell::new(false);
        let prompt = |name: &str| -> Result<PromptAnswer> {
            assert_eq!(name, "MyMod");
            asked.set(true);
            Ok(PromptAnswer::Skip)
        };

        let err = ProjectBuilder::new(&out).build(&ws, Some(&prompt)).unwrap_err();
        assert!(matches!(err, Error::UserSkipped { .. }));
        assert!(asked.get());
        assert!(!out.exists());
    }

    #[test]
    fn test_rename_keeps_guid_in_name() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        let prompt = |_: &str| -> Result<PromptAnswer> { Ok(PromptAnswer::Rename("Renamed".to_string())) };

        let report = ProjectBuilder::new(temp.path().join("out"))
            .build(&ws, Some(&prompt))
            .unwrap();
        assert_eq!(report.identity.raw_name, "Renamed");
        assert_eq!(report.identity.name, format!("Renamed_{}", report.identity.guid));
        assert!(report.root.join(format!("Public/{}/Content/[PAK]_Renamed", report.identity.name)).is_dir());
    }

    #[test]
    fn test_failed_template_rolls_back() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        let out = temp.path().join("out");

        let err = ProjectBuilder::new(&out)
            .with_templates(TemplateStore::from_dir(temp.path().join("no-templates")))
            .build(&ws, None)
            .unwrap_err();

        match err {
            Error::BuildFailed { name, source } => {
                assert_eq!(name, "MyMod");
                assert!(matches!(*source, Error::TemplateRead { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_rollback_keeps_existing_output_root() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();

        ProjectBuilder::new(&out)
            .with_templates(TemplateStore::from_dir(temp.path().join("no-templates")))
            .build(&ws, None)
            .unwrap_err();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_per_file_failures_do_not_abort() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        fs::write(
            ws.join("Public/MyMod/bank.lsx"),
            "<region id=\"VisualBank\">Generated/Hash/x.GR2</region>",
        )
        .unwrap();

        let report = ProjectBuilder::new(temp.path().join("out"))
            .with_codec(FailingCodec)
            .build(&ws, None)
            .unwrap();

        assert_eq!(report.files_copied, 2);
        assert_eq!(report.files_rewritten, 1);
        assert_eq!(report.files_reencoded, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, FileStage::Reencode);
        assert!(!report.is_clean());

        let bank = report.root.join(format!("Public/{}/bank.lsx", report.identity.name));
        let content = fs::read_to_string(bank).unwrap();
        assert!(content.contains(&format!("Generated/Public/{}/Hash/x.GR2", report.identity.name)));
    }

    #[test]
    fn test_progress_reports_phases() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);
        let phases = std::sync::Mutex::new(Vec::new());
        let callback = |p: &BuildProgress| phases.lock().unwrap().push(p.phase);

        ProjectBuilder::new(temp.path().join("out"))
            .build_with_progress(&ws, None, &callback)
            .unwrap();

        let phases = phases.into_inner().unwrap();
        assert_eq!(phases.first(), Some(&BuildPhase::Scaffolding));
        assert!(phases.contains(&BuildPhase::WritingMetadata));
        assert!(phases.contains(&BuildPhase::CopyingFiles));
        assert_eq!(phases.last(), Some(&BuildPhase::Complete));
    }
}
