//! Project generation
//!
//! Every file operation takes the output root explicitly; the process working
//! directory is never changed. A failure on one file is logged and recorded in
//! the report, and the remaining files are still attempted.

use super::manifest::FileEntry;
use super::render::{TemplateData, TemplateRenderer};
use super::source::TemplateSource;
use super::{GenerationError, TemplateError};
use crate::config::{validate_project_name, ProjectConfig};
use chrono::{DateTime, Utc};
use minijinja::Value;
use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// What to do when the project directory already has content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingDirPolicy {
    /// Refuse to touch a non-empty directory
    #[default]
    Abort,
    /// Write planned files over whatever is there; other files are left alone
    Overwrite,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Embedded in templates as `timestamp` and `current_year`
    pub generated_at: DateTime<Utc>,
    pub existing_dir: ExistingDirPolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            existing_dir: ExistingDirPolicy::default(),
        }
    }
}

impl GenerateOptions {
    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            ..Default::default()
        }
    }

    pub fn with_existing_dir(mut self, policy: ExistingDirPolicy) -> Self {
        self.existing_dir = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Rendered,
    Copied,
    Failed(String),
}

/// Result of generating one planned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Output path relative to the project directory
    pub path: String,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, FileStatus::Failed(_))
    }
}

/// Per-file results of one `generate_project` call, in generation order
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub project_dir: PathBuf,
    pub files: Vec<FileOutcome>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> BTreeSet<&str> {
        self.files
            .iter()
            .filter(|f| f.is_success())
            .map(|f| f.path.as_str())
            .collect()
    }

    pub fn failed(&self) -> BTreeSet<&str> {
        self.files
            .iter()
            .filter(|f| !f.is_success())
            .map(|f| f.path.as_str())
            .collect()
    }

    /// `(path, reason)` for every failed file
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().filter_map(|f| match &f.status {
            FileStatus::Failed(reason) => Some((f.path.as_str(), reason.as_str())),
            _ => None,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.files.iter().all(FileOutcome::is_success)
    }
}

/// Why a single file could not be generated
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("output path '{0}' must stay inside the project directory")]
    OutputPath(String),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory the project will be generated into
pub fn project_dir(parent_dir: &Path, config: &ProjectConfig) -> Result<PathBuf, GenerationError> {
    validate_project_name(&config.project_name).map_err(|reason| {
        GenerationError::InvalidProjectName {
            name: config.project_name.clone(),
            reason,
        }
    })?;
    Ok(parent_dir.join(&config.project_name))
}

/// Number of entries in `dir`; zero when it does not exist
pub async fn existing_entries(dir: &Path) -> io::Result<usize> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut count = 0;
    while entries.next_entry().await?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Create `path` and any missing parents
pub async fn ensure_directory(path: &Path) -> Result<(), FileError> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| FileError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

async fn ensure_parent(output_path: &Path) -> Result<(), FileError> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent).await,
        _ => Ok(()),
    }
}

async fn write_output(output_path: &Path, content: &[u8]) -> Result<(), FileError> {
    ensure_parent(output_path).await?;
    fs::write(output_path, content)
        .await
        .map_err(|source| FileError::Write {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Load template `template_id`, render it with `data` and write it to `output_path`
pub async fn render_single_file(
    source: &TemplateSource,
    renderer: &TemplateRenderer,
    template_id: &str,
    output_path: &Path,
    data: &Value,
) -> Result<(), FileError> {
    let template = source.read_template_str(template_id).await?;
    let rendered = renderer.render(template_id, &template, data)?;
    write_output(output_path, rendered.as_bytes()).await
}

/// Copy template `template_id` to `output_path` byte for byte
pub async fn copy_static_file(
    source: &TemplateSource,
    template_id: &str,
    output_path: &Path,
) -> Result<(), FileError> {
    let content = source.read_template(template_id).await?;
    write_output(output_path, &content).await
}

/// Join a rendered relative path onto the root, refusing anything that escapes it
fn resolve_output(root: &Path, relative: &str) -> Result<PathBuf, FileError> {
    let path = Path::new(relative);
    let inside = !relative.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if inside {
        Ok(root.join(path))
    } else {
        Err(FileError::OutputPath(relative.to_string()))
    }
}

async fn generate_entry(
    source: &TemplateSource,
    renderer: &TemplateRenderer,
    root: &Path,
    entry: &FileEntry,
    data: &Value,
) -> FileOutcome {
    let relative = match renderer.render(&entry.output, &entry.output, data) {
        Ok(relative) => relative,
        Err(e) => return failed(&entry.output, e.into()),
    };

    let result = match resolve_output(root, &relative) {
        Ok(output_path) if entry.copy => copy_static_file(source, &entry.template, &output_path)
            .await
            .map(|_| FileStatus::Copied),
        Ok(output_path) => {
            render_single_file(source, renderer, &entry.template, &output_path, data)
                .await
                .map(|_| FileStatus::Rendered)
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(status) => {
            tracing::info!(file = %relative, template = %entry.template, "generated file");
            FileOutcome {
                path: relative,
                status,
            }
        }
        Err(e) => failed(&relative, e),
    }
}

fn failed(path: &str, error: FileError) -> FileOutcome {
    tracing::warn!(file = %path, error = %error, "failed to generate file");
    FileOutcome {
        path: path.to_string(),
        status: FileStatus::Failed(error.to_string()),
    }
}

/// Generate the project for `config` under `parent_dir/<project_name>`
///
/// Returns an error only when nothing can be generated (bad project name,
/// unusable manifest, refused or uncreatable directory). Individual file
/// failures are reported in the `GenerationReport`.
pub async fn generate_project(
    source: &TemplateSource,
    config: &ProjectConfig,
    parent_dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerationReport, GenerationError> {
    let project_dir = project_dir(parent_dir, config)?;
    let manifest = source.load_manifest().await?;

    let io_error = |source| GenerationError::Io {
        path: project_dir.clone(),
        source,
    };

    let existing = existing_entries(&project_dir).await.map_err(io_error)?;
    if existing > 0 && options.existing_dir == ExistingDirPolicy::Abort {
        return Err(GenerationError::DirectoryNotEmpty {
            path: project_dir.clone(),
            count: existing,
        });
    }
    fs::create_dir_all(&project_dir).await.map_err(io_error)?;

    let renderer = TemplateRenderer::new();
    let data = TemplateData::new(config, options.generated_at).to_value();
    let planned = manifest.plan(config);
    tracing::debug!(
        project = %config.project_name,
        templates = %manifest.name,
        files = planned.len(),
        "planned project files"
    );

    let mut files = Vec::with_capacity(planned.len());
    for entry in planned {
        files.push(generate_entry(source, &renderer, &project_dir, entry, &data).await);
    }

    let report = GenerationReport { project_dir, files };
    tracing::info!(
        dir = %report.project_dir.display(),
        succeeded = report.succeeded().len(),
        failed = report.failed().len(),
        "project generation finished"
    );
    Ok(report)
}
