//! Template sources: embedded in the binary, or a local directory
//!
//! Both sources expose the same layout: a `template.yaml` manifest at the
//! root and template files addressed by relative id.

use super::manifest::TemplateManifest;
use super::TemplateError;
use crate::product::ProductConfig;
use include_dir::{include_dir, Dir};
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

static EMBEDDED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub(crate) const MANIFEST_FILE: &str = "template.yaml";

#[cfg(test)]
pub(crate) const EMBEDDED_MANIFEST: &str = include_str!("../../templates/template.yaml");

/// Where templates are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Embedded,
    /// A directory on disk (development override)
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the source: explicit directory, then the product's env var, then embedded
    pub fn from_config<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| std::env::var_os(config.template_dir_env()).map(PathBuf::from))
            .map(Self::Local)
            .unwrap_or(Self::Embedded)
    }

    /// Create a local template source from a path
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    /// Human-readable description for log output
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "built-in templates".to_string(),
            TemplateSource::Local(path) => format!("local templates from {}", path.display()),
        }
    }

    /// Reject ids that could escape the template root
    fn check_id(id: &str) -> Result<&Path, TemplateError> {
        let path = Path::new(id);
        let relative = !id.is_empty()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if relative {
            Ok(path)
        } else {
            Err(TemplateError::InvalidId(id.to_string()))
        }
    }

    /// Read a template's raw bytes
    pub async fn read_template(&self, id: &str) -> Result<Vec<u8>, TemplateError> {
        let path = Self::check_id(id)?;

        match self {
            TemplateSource::Embedded => EMBEDDED_TEMPLATES
                .get_file(path)
                .map(|file| file.contents().to_vec())
                .ok_or_else(|| TemplateError::NotFound(id.to_string())),
            TemplateSource::Local(root) => {
                fs::read(root.join(path)).await.map_err(|source| {
                    if source.kind() == io::ErrorKind::NotFound {
                        TemplateError::NotFound(id.to_string())
                    } else {
                        TemplateError::Read {
                            id: id.to_string(),
                            source,
                        }
                    }
                })
            }
        }
    }

    /// Read a template as UTF-8 text
    pub async fn read_template_str(&self, id: &str) -> Result<String, TemplateError> {
        let bytes = self.read_template(id).await?;
        String::from_utf8(bytes).map_err(|_| TemplateError::NotUtf8(id.to_string()))
    }

    /// Load and validate the manifest at the source root
    pub async fn load_manifest(&self) -> Result<TemplateManifest, TemplateError> {
        let content = self.read_template_str(MANIFEST_FILE).await?;
        TemplateManifest::parse(&content)
    }
}
