//! Top-level project configuration and its closed enums

use super::requests::{InstructionRequest, TokenBalanceRequest};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of project being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    DeFi,
    Nft,
    General,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::DeFi, ProjectType::Nft, ProjectType::General];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::DeFi => "DeFi",
            ProjectType::Nft => "NFT",
            ProjectType::General => "General",
        }
    }
}

/// On-chain program framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Anchor,
    Native,
    Spl,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Anchor, Framework::Native, Framework::Spl];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Anchor => "Anchor",
            Framework::Native => "Native",
            Framework::Spl => "SPL",
        }
    }
}

/// Target cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Devnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Devnet, Network::Testnet, Network::Mainnet];

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Devnet => "Devnet",
            Network::Testnet => "Testnet",
        }
    }
}

/// Optional feature groups, in presentation and generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Testing,
    Documentation,
    Docker,
    Ci,
    Linting,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Testing,
        Feature::Documentation,
        Feature::Docker,
        Feature::Ci,
        Feature::Linting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Testing => "testing",
            Feature::Documentation => "documentation",
            Feature::Docker => "docker",
            Feature::Ci => "ci",
            Feature::Linting => "linting",
        }
    }
}

/// Boolean feature flags; each true flag adds one file group to the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub testing: bool,
    pub documentation: bool,
    pub docker: bool,
    pub ci: bool,
    pub linting: bool,
}

impl Features {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Testing => self.testing,
            Feature::Documentation => self.documentation,
            Feature::Docker => self.docker,
            Feature::Ci => self.ci,
            Feature::Linting => self.linting,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::Testing => self.testing = enabled,
            Feature::Documentation => self.documentation = enabled,
            Feature::Docker => self.docker = enabled,
            Feature::Ci => self.ci = enabled,
            Feature::Linting => self.linting = enabled,
        }
    }

    /// Enabled features in `Feature::ALL` order
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

/// Complete configuration for one generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_description: String,
    pub author: String,
    pub project_type: ProjectType,
    pub framework: Framework,
    pub network: Network,
    /// `None` when the user skipped the section
    pub instructions: Option<Vec<InstructionRequest>>,
    /// `None` when the user skipped the section
    pub token_balances: Option<Vec<TokenBalanceRequest>>,
    pub features: Features,
}

/// A prompt label that does not name any known value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice '{0}'")]
pub struct UnknownLabel(pub String);

/// Lower-case a prompt label and keep only `a-z`
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

impl FromStr for ProjectType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "defi" => Ok(ProjectType::DeFi),
            "nft" => Ok(ProjectType::Nft),
            "general" => Ok(ProjectType::General),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

impl FromStr for Framework {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "anchor" => Ok(Framework::Anchor),
            "native" => Ok(Framework::Native),
            "spl" => Ok(Framework::Spl),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

impl FromStr for Network {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// Check that a project name can be used as a single directory name
pub fn validate_project_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    if trimmed != name {
        return Err("Project name cannot start or end with whitespace".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("'{}' is not a valid directory name", name));
    }
    if let Some(c) = name
        .chars()
        .find(|&c| matches!(c, '/' | '\\') || c.is_control())
    {
        return Err(format!("Project name cannot contain '{}'", c.escape_default()));
    }
    Ok(())
}
