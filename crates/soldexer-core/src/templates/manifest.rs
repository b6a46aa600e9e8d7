//! Template manifest types and file planning
//!
//! `template.yaml` lists every file a project can contain. Each entry may be
//! gated on a framework or a feature; `plan` evaluates those gates against a
//! configuration.

use super::TemplateError;
use crate::config::{Feature, Framework, ProjectConfig};
use serde::{Deserialize, Serialize};

/// Precondition for including a file; an empty `When` always holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct When {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
}

/// Which part of the output a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileGroup {
    Static,
    Framework(Framework),
    Feature(Feature),
}

/// One row of the file table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Template id, relative to the template root
    pub template: String,

    /// Output path relative to the project directory; rendered like a template
    pub output: String,

    /// Copy the template verbatim instead of rendering it
    #[serde(default)]
    pub copy: bool,

    #[serde(default)]
    pub when: When,
}

impl FileEntry {
    pub fn group(&self) -> FileGroup {
        match (self.when.framework, self.when.feature) {
            (Some(framework), _) => FileGroup::Framework(framework),
            (None, Some(feature)) => FileGroup::Feature(feature),
            (None, None) => FileGroup::Static,
        }
    }

    pub fn applies(&self, config: &ProjectConfig) -> bool {
        let framework_ok = self.when.framework.map_or(true, |f| f == config.framework);
        let feature_ok = self
            .when
            .feature
            .map_or(true, |f| config.features.is_enabled(f));
        framework_ok && feature_ok
    }
}

/// Template set manifest (templates/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template set
    pub name: String,

    /// Description of what the template set provides
    pub description: String,

    /// Minimum CLI version the templates were written for
    pub version: String,

    /// Ordered file table
    pub files: Vec<FileEntry>,
}

impl TemplateManifest {
    /// Parse and validate a manifest
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let manifest: TemplateManifest = serde_yaml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject tables where a framework would produce no files or groups overlap
    pub fn validate(&self) -> Result<(), TemplateError> {
        if let Some(entry) = self
            .files
            .iter()
            .find(|e| e.when.framework.is_some() && e.when.feature.is_some())
        {
            return Err(TemplateError::InvalidManifest(format!(
                "'{}' is gated on both a framework and a feature",
                entry.output
            )));
        }

        for framework in Framework::ALL {
            if !self
                .files
                .iter()
                .any(|e| e.group() == FileGroup::Framework(framework))
            {
                return Err(TemplateError::InvalidManifest(format!(
                    "no files for framework '{}'",
                    framework.display_name()
                )));
            }
        }

        Ok(())
    }

    /// Files to generate for `config`
    ///
    /// Static files come first, then the selected framework's files, then each
    /// enabled feature group in `Feature::ALL` order. Manifest order is kept
    /// within a group.
    pub fn plan(&self, config: &ProjectConfig) -> Vec<&FileEntry> {
        let mut planned: Vec<&FileEntry> =
            self.files.iter().filter(|e| e.applies(config)).collect();
        planned.sort_by_key(|e| e.group());
        planned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Features, Network, ProjectType};

    const MANIFEST: &str = r#"
name: test
description: test templates
version: 0.1.0
files:
  - template: docs.md.j2
    output: docs/ARCHITECTURE.md
    when:
      feature: documentation
  - template: readme.j2
    output: README.md
  - template: anchor.j2
    output: Anchor.toml
    when:
      framework: anchor
  - template: native.j2
    output: Cargo.toml
    when:
      framework: native
  - template: spl.j2
    output: Cargo.toml
    when:
      framework: spl
  - template: tests.j2
    output: tests/app.test.ts
    when:
      feature: testing
  - template: prettierrc
    output: .prettierrc
    copy: true
    when:
      feature: linting
"#;

    fn config(framework: Framework, features: Features) -> ProjectConfig {
        ProjectConfig {
            project_name: "pipe".to_string(),
            project_description: String::new(),
            author: String::new(),
            project_type: ProjectType::DeFi,
            framework,
            network: Network::Devnet,
            instructions: None,
            token_balances: None,
            features,
        }
    }

    fn outputs(manifest: &TemplateManifest, config: &ProjectConfig) -> Vec<String> {
        manifest
            .plan(config)
            .iter()
            .map(|e| e.output.clone())
            .collect()
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = TemplateManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.files.len(), 7);
        assert!(manifest.files[6].copy);
        assert_eq!(manifest.files[1].when, When::default());
    }

    #[test]
    fn test_plan_orders_static_framework_features() {
        let manifest = TemplateManifest::parse(MANIFEST).unwrap();
        let features = Features {
            testing: true,
            documentation: true,
            ..Default::default()
        };

        assert_eq!(
            outputs(&manifest, &config(Framework::Anchor, features)),
            vec![
                "README.md",
                "Anchor.toml",
                "tests/app.test.ts",
                "docs/ARCHITECTURE.md"
            ]
        );
    }

    #[test]
    fn test_exactly_one_framework_branch() {
        let manifest = TemplateManifest::parse(MANIFEST).unwrap();
        for framework in Framework::ALL {
            let config = config(framework, Features::default());
            let groups: Vec<FileGroup> = manifest.plan(&config).iter().map(|e| e.group()).collect();
            assert_eq!(groups, vec![FileGroup::Static, FileGroup::Framework(framework)]);
        }
    }

    #[test]
    fn test_rejects_missing_framework() {
        let content = MANIFEST.replace("framework: spl", "feature: docker");
        assert!(matches!(
            TemplateManifest::parse(&content),
            Err(TemplateError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_rejects_double_gate() {
        let content = MANIFEST.replace(
            "    when:\n      framework: anchor",
            "    when:\n      framework: anchor\n      feature: ci",
        );
        assert!(matches!(
            TemplateManifest::parse(&content),
            Err(TemplateError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_embedded_manifest_is_valid() {
        let manifest = TemplateManifest::parse(crate::templates::source::EMBEDDED_MANIFEST).unwrap();
        assert!(!manifest.files.is_empty());
    }
}
