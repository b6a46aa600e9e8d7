//! Declarative question tables
//!
//! Every conditional question lives here as a row with its precondition, so
//! the visibility rules can be checked in one place.

use super::prompt::Choice;
use crate::config::{Feature, Framework, Network, ProjectType};

/// Answers that later questions depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub network: Network,
}

pub const PROJECT_TYPE_CHOICES: &[Choice] = &[
    Choice::new("DeFi", "Decentralized Finance"),
    Choice::new("NFT", "Non-Fungible Token"),
    Choice::new("General", "General Solana project"),
];

pub const NETWORK_CHOICES: &[Choice] = &[
    Choice::new("Devnet", "Recommended for development"),
    Choice::new("Testnet", "For testing"),
    Choice::new("Mainnet", "Production - be careful!"),
];

pub const DEFAULT_NETWORK: &str = "Devnet";

/// A framework option and the project type it is restricted to, if any
#[derive(Debug, Clone, Copy)]
pub struct FrameworkChoice {
    pub framework: Framework,
    pub choice: Choice,
    pub only_for: Option<ProjectType>,
}

pub const FRAMEWORK_CHOICES: &[FrameworkChoice] = &[
    FrameworkChoice {
        framework: Framework::Anchor,
        choice: Choice::new("Anchor", "Recommended for most projects"),
        only_for: None,
    },
    FrameworkChoice {
        framework: Framework::Native,
        choice: Choice::new("Native", "Low-level control"),
        only_for: None,
    },
    FrameworkChoice {
        framework: Framework::Spl,
        choice: Choice::new("SPL", "Solana Program Library"),
        only_for: Some(ProjectType::DeFi),
    },
];

/// Framework options offered for a project type
pub fn framework_choices(project_type: ProjectType) -> Vec<Choice> {
    FRAMEWORK_CHOICES
        .iter()
        .filter(|row| row.only_for.map_or(true, |pt| pt == project_type))
        .map(|row| row.choice)
        .collect()
}

/// A yes/no feature question, asked only when `applies` holds
#[derive(Debug, Clone, Copy)]
pub struct FeatureQuestion {
    pub feature: Feature,
    pub message: &'static str,
    pub default: bool,
    pub applies: fn(&Classification) -> bool,
}

fn always(_: &Classification) -> bool {
    true
}

/// Container setup is pointless for a bare native program
fn unless_native(c: &Classification) -> bool {
    c.framework != Framework::Native
}

fn defi_or_anchor(c: &Classification) -> bool {
    c.project_type == ProjectType::DeFi || c.framework == Framework::Anchor
}

pub const FEATURE_QUESTIONS: &[FeatureQuestion] = &[
    FeatureQuestion {
        feature: Feature::Testing,
        message: "Would you like to include testing setup?",
        default: true,
        applies: always,
    },
    FeatureQuestion {
        feature: Feature::Documentation,
        message: "Would you like to include documentation setup?",
        default: true,
        applies: always,
    },
    FeatureQuestion {
        feature: Feature::Docker,
        message: "Would you like to include Docker configuration?",
        default: false,
        applies: unless_native,
    },
    FeatureQuestion {
        feature: Feature::Ci,
        message: "Would you like to include CI/CD configuration?",
        default: false,
        applies: defi_or_anchor,
    },
    FeatureQuestion {
        feature: Feature::Linting,
        message: "Would you like to include linting and formatting?",
        default: true,
        applies: always,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_spl_only_offered_for_defi() {
        assert_eq!(
            labels(&framework_choices(ProjectType::DeFi)),
            vec!["Anchor", "Native", "SPL"]
        );
        for project_type in [ProjectType::Nft, ProjectType::General] {
            assert_eq!(
                labels(&framework_choices(project_type)),
                vec!["Anchor", "Native"]
            );
        }
    }

    #[test]
    fn test_feature_table_covers_every_feature_in_order() {
        let order: Vec<Feature> = FEATURE_QUESTIONS.iter().map(|q| q.feature).collect();
        assert_eq!(order, Feature::ALL.to_vec());
    }

    #[test]
    fn test_feature_preconditions() {
        let question = |feature: Feature| {
            FEATURE_QUESTIONS
                .iter()
                .find(|q| q.feature == feature)
                .unwrap()
        };

        for project_type in ProjectType::ALL {
            for framework in Framework::ALL {
                let c = Classification {
                    project_type,
                    framework,
                    network: Network::Devnet,
                };
                assert_eq!(
                    (question(Feature::Docker).applies)(&c),
                    framework != Framework::Native
                );
                assert_eq!(
                    (question(Feature::Ci).applies)(&c),
                    project_type == ProjectType::DeFi || framework == Framework::Anchor
                );
                assert!((question(Feature::Testing).applies)(&c));
            }
        }
    }

    #[test]
    fn test_choice_labels_parse_to_enums() {
        for choice in PROJECT_TYPE_CHOICES {
            assert!(choice.label.parse::<ProjectType>().is_ok());
        }
        for row in FRAMEWORK_CHOICES {
            assert_eq!(row.choice.label.parse::<Framework>(), Ok(row.framework));
        }
        for choice in NETWORK_CHOICES {
            assert!(choice.label.parse::<Network>().is_ok());
        }
    }
}
