//! Questionnaire engine
//!
//! Asks the fixed, partly conditional sequence of questions and builds a
//! `ProjectConfig`:
//!
//! 1. basic details (name, description, author)
//! 2. classification (project type, framework, network)
//! 3. optional repeatable sections (instructions, token balances)
//! 4. feature flags, filtered by `rules::FEATURE_QUESTIONS`
//!
//! Nothing here touches the file system.

pub mod prompt;
pub mod rules;
mod summary;

use crate::config::{
    parse_identifiers, validate_project_name, Features, Framework, InstructionRequest, Network,
    ProjectConfig, ProjectType, TokenBalanceRequest, UnknownLabel,
};
use prompt::{PromptSurface, TextPrompt};
use rules::{
    framework_choices, Classification, DEFAULT_NETWORK, FEATURE_QUESTIONS, NETWORK_CHOICES,
    PROJECT_TYPE_CHOICES,
};
use std::io;
use std::str::FromStr;

pub use prompt::{Choice, TextValidator};
pub use summary::summary_lines;

pub const DEFAULT_PROJECT_NAME: &str = "my-solana-project";
pub const DEFAULT_DESCRIPTION: &str = "A Solana blockchain project";
pub const DEFAULT_AUTHOR: &str = "Developer";

/// Errors that abort the questionnaire
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// The prompt surface failed or the user cancelled
    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),

    #[error("{question}: {source}")]
    UnknownChoice {
        question: &'static str,
        #[source]
        source: UnknownLabel,
    },
}

impl QuestionnaireError {
    /// True when the user backed out of a prompt (Esc / Ctrl+C)
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QuestionnaireError::Prompt(e) if e.kind() == io::ErrorKind::Interrupted)
    }
}

type Result<T> = std::result::Result<T, QuestionnaireError>;

/// Name, description and author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicDetails {
    pub project_name: String,
    pub project_description: String,
    pub author: String,
}

/// Messages for one repeatable section
#[derive(Debug, Clone, Copy)]
pub struct SectionPrompt {
    /// "Do you want this section at all?"
    pub include: &'static str,
    pub include_default: bool,
    /// "Add another item?"; always defaults to no
    pub another: &'static str,
}

const INSTRUCTIONS_SECTION: SectionPrompt = SectionPrompt {
    include: "Do you want to index instructions?",
    include_default: false,
    another: "Add another instruction request?",
};

const TOKEN_BALANCES_SECTION: SectionPrompt = SectionPrompt {
    include: "Do you want to index token balances?",
    include_default: false,
    another: "Add another token balance request?",
};

fn ask_text<P>(prompts: &mut P, prompt: TextPrompt<'_>) -> Result<String>
where
    P: PromptSurface + ?Sized,
{
    let answer = prompts.text(&prompt)?;
    if answer.trim().is_empty() {
        Ok(prompt.default.to_string())
    } else {
        Ok(answer)
    }
}

fn parse_choice<T>(question: &'static str, label: &str) -> Result<T>
where
    T: FromStr<Err = UnknownLabel>,
{
    label
        .parse()
        .map_err(|source| QuestionnaireError::UnknownChoice { question, source })
}

/// Ask for project name, description and author
pub fn collect_basic_details<P>(prompts: &mut P) -> Result<BasicDetails>
where
    P: PromptSurface + ?Sized,
{
    let project_name = ask_text(
        prompts,
        TextPrompt::new("What is your project name?", DEFAULT_PROJECT_NAME)
            .with_validator(validate_project_name),
    )?;
    let project_description = ask_text(
        prompts,
        TextPrompt::new("Describe your project:", DEFAULT_DESCRIPTION),
    )?;
    let author = ask_text(prompts, TextPrompt::new("What is your name?", DEFAULT_AUTHOR))?;

    Ok(BasicDetails {
        project_name,
        project_description,
        author,
    })
}

/// Ask project type, then framework (choices depend on the type), then network
pub fn collect_classification<P>(prompts: &mut P) -> Result<Classification>
where
    P: PromptSurface + ?Sized,
{
    const TYPE_QUESTION: &str = "What type of project are you building?";
    const FRAMEWORK_QUESTION: &str = "Which framework would you like to use?";
    const NETWORK_QUESTION: &str = "Which network would you like to target?";

    let label = prompts.select(TYPE_QUESTION, PROJECT_TYPE_CHOICES, None)?;
    let project_type: ProjectType = parse_choice(TYPE_QUESTION, &label)?;

    let choices = framework_choices(project_type);
    let label = prompts.select(FRAMEWORK_QUESTION, &choices, None)?;
    let framework: Framework = parse_choice(FRAMEWORK_QUESTION, &label)?;

    let label = prompts.select(NETWORK_QUESTION, NETWORK_CHOICES, Some(DEFAULT_NETWORK))?;
    let network: Network = parse_choice(NETWORK_QUESTION, &label)?;

    Ok(Classification {
        project_type,
        framework,
        network,
    })
}

/// Ask every feature question whose precondition holds; the rest stay false
pub fn collect_features<P>(prompts: &mut P, context: &Classification) -> Result<Features>
where
    P: PromptSurface + ?Sized,
{
    let mut features = Features::default();

    for question in FEATURE_QUESTIONS {
        if !(question.applies)(context) {
            continue;
        }
        let enabled = prompts.confirm(question.message, question.default)?;
        features.set(question.feature, enabled);
    }

    Ok(features)
}

/// Ask whether to include a section, then collect items until the user stops
///
/// Returns `None` when the section is declined. Every extra round needs an
/// explicit "yes", so the loop ends as soon as the user answers no.
pub fn collect_repeatable_section<P, T, F>(
    prompts: &mut P,
    section: &SectionPrompt,
    mut ask_item: F,
) -> Result<Option<Vec<T>>>
where
    P: PromptSurface + ?Sized,
    F: FnMut(&mut P, usize) -> Result<T>,
{
    if !prompts.confirm(section.include, section.include_default)? {
        return Ok(None);
    }

    let mut items = Vec::new();
    loop {
        items.push(ask_item(prompts, items.len())?);
        if !prompts.confirm(section.another, false)? {
            break;
        }
    }

    Ok(Some(items))
}

fn ask_identifiers<P>(prompts: &mut P, message: &str) -> Result<Option<Vec<String>>>
where
    P: PromptSurface + ?Sized,
{
    let answer = prompts.text(&TextPrompt::new(message, ""))?;
    Ok(parse_identifiers(&answer))
}

/// Instruction requests: program IDs and discriminators per entry
pub fn collect_instructions<P>(prompts: &mut P) -> Result<Option<Vec<InstructionRequest>>>
where
    P: PromptSurface + ?Sized,
{
    collect_repeatable_section(prompts, &INSTRUCTIONS_SECTION, |prompts, _| {
        Ok(InstructionRequest {
            program_ids: ask_identifiers(prompts, "Program IDs (comma-separated, blank for any):")?,
            discriminators: ask_identifiers(
                prompts,
                "Instruction discriminators (comma-separated, blank for any):",
            )?,
        })
    })
}

/// Token balance requests: owner accounts and mints per entry
pub fn collect_token_balances<P>(prompts: &mut P) -> Result<Option<Vec<TokenBalanceRequest>>>
where
    P: PromptSurface + ?Sized,
{
    collect_repeatable_section(prompts, &TOKEN_BALANCES_SECTION, |prompts, _| {
        Ok(TokenBalanceRequest {
            accounts: ask_identifiers(prompts, "Accounts (comma-separated, blank for any):")?,
            mints: ask_identifiers(prompts, "Mints (comma-separated, blank for any):")?,
        })
    })
}

/// Run the whole questionnaire in its fixed order
pub fn run_questionnaire<P>(prompts: &mut P) -> Result<ProjectConfig>
where
    P: PromptSurface + ?Sized,
{
    let details = collect_basic_details(prompts)?;
    let classification = collect_classification(prompts)?;
    let instructions = collect_instructions(prompts)?;
    let token_balances = collect_token_balances(prompts)?;
    let features = collect_features(prompts, &classification)?;

    Ok(ProjectConfig {
        project_name: details.project_name,
        project_description: details.project_description,
        author: details.author,
        project_type: classification.project_type,
        framework: classification.framework,
        network: classification.network,
        instructions,
        token_balances,
        features,
    })
}

/// Final yes/no before anything is written
pub fn confirm_generation<P>(prompts: &mut P, _config: &ProjectConfig) -> Result<bool>
where
    P: PromptSurface + ?Sized,
{
    Ok(prompts.confirm("Proceed with project generation?", true)?)
}
