//! Project configuration data model
//!
//! `ProjectConfig` is produced once by the questionnaire and consumed once by
//! the template pipeline. It serializes with snake_case fields and lower-case
//! enum values so templates can read it as a flat context.

pub mod project;
pub mod requests;

pub use project::{
    normalize_label, validate_project_name, Feature, Features, Framework, Network, ProjectConfig,
    ProjectType, UnknownLabel,
};
pub use requests::{parse_identifiers, InstructionRequest, TokenBalanceRequest};
