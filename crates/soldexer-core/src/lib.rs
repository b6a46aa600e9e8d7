//! Soldexer Core - questionnaire engine and template pipeline for Solana project scaffolding
//!
//! The library turns answers to an interactive questionnaire into a project
//! directory rendered from a fixed template set.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - `config` data model, `questions` engine over a
//!   `PromptSurface`, and the `templates` pipeline (manifest planning, minijinja
//!   rendering, best-effort file generation)
//! - **Layer 2: Product Configuration** - `ProductConfig` trait implemented by the binary
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use soldexer_core::{questions, templates};
//!
//! let config = questions::run_questionnaire(&mut my_prompts)?;
//! let report = templates::generate_project(
//!     &templates::TemplateSource::Embedded,
//!     &config,
//!     std::path::Path::new("."),
//!     &templates::GenerateOptions::default(),
//! )
//! .await?;
//! for (path, reason) in report.failures() {
//!     eprintln!("{path}: {reason}");
//! }
//! ```

pub mod config;
pub mod product;
pub mod questions;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Features, Framework, Network, ProjectConfig, ProjectType};
pub use product::ProductConfig;
pub use questions::{run_questionnaire, QuestionnaireError};
pub use templates::{
    generate_project, GenerateOptions, GenerationError, GenerationReport, TemplateSource,
};

#[cfg(feature = "tui")]
pub use tui::run;
