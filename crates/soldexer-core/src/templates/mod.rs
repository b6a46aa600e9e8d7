//! Template loading, planning, rendering and project generation
//!
//! This module provides:
//! - The `template.yaml` manifest: the declarative file table with per-file
//!   framework/feature conditions
//! - Template sources (embedded in the binary, or a local override directory)
//! - minijinja rendering against the project configuration
//! - `generate_project`, which writes the planned files best-effort
//! - Version compatibility checking between the CLI and a template set

pub mod generator;
pub mod manifest;
pub mod render;
pub mod source;
pub mod version;

use std::io;
use std::path::PathBuf;

pub use generator::{
    copy_static_file, ensure_directory, existing_entries, generate_project, project_dir,
    render_single_file, ExistingDirPolicy, FileError, FileOutcome, FileStatus,
    GenerateOptions, GenerationReport,
};
pub use manifest::{FileEntry, FileGroup, TemplateManifest, When};
pub use render::{TemplateData, TemplateRenderer};
pub use source::TemplateSource;
pub use version::check_compatibility;

/// Failures loading or rendering a single template
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template '{0}' not found")]
    NotFound(String),

    #[error("template id '{0}' must be a relative path inside the template directory")]
    InvalidId(String),

    #[error("failed to read template '{id}': {source}")]
    Read {
        id: String,
        #[source]
        source: io::Error,
    },

    #[error("template '{0}' is not valid UTF-8")]
    NotUtf8(String),

    #[error("failed to render '{id}': {source}")]
    Render {
        id: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to parse template manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("invalid template manifest: {0}")]
    InvalidManifest(String),
}

/// Failures that stop `generate_project` before any file is attempted
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("{} already contains {count} item(s)", .path.display())]
    DirectoryNotEmpty { path: PathBuf, count: usize },

    #[error("failed to prepare {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}
