//! Charm-style CLI prompts using cliclack

use crate::config::ProjectConfig;
use crate::product::ProductConfig;
use crate::questions::{
    self,
    prompt::{Choice, PromptSurface, TextPrompt},
    summary_lines,
};
use crate::templates::{
    self, check_compatibility, existing_entries, ExistingDirPolicy, GenerateOptions,
    GenerationReport, TemplateSource,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the built-in set
    pub template_dir: Option<PathBuf>,

    /// Parent directory the project folder is created in (defaults to cwd)
    pub directory: Option<PathBuf>,

    /// Auto-confirm generation and overwriting (questions are still asked)
    pub yes: bool,
}

/// `PromptSurface` backed by cliclack widgets
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompts;

impl PromptSurface for CliclackPrompts {
    fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String> {
        let mut input = cliclack::input(prompt.message).required(false);
        if !prompt.default.is_empty() {
            input = input
                .placeholder(prompt.default)
                .default_input(prompt.default);
        }
        if let Some(validate) = prompt.validate {
            input = input.validate(move |value: &String| validate(value));
        }
        input.interact()
    }

    fn select(
        &mut self,
        message: &str,
        choices: &[Choice],
        initial: Option<&str>,
    ) -> io::Result<String> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.label.to_string(), choice.label, choice.hint);
        }
        if let Some(initial) = initial {
            select = select.initial_value(initial.to_string());
        }
        select.interact()
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(default).interact()
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;
    tracing::debug!(product = config.name(), cli_version, "starting scaffolder");

    // Step 1: Resolve and check templates before asking anything
    let source = TemplateSource::from_config(config, args.template_dir.clone());
    check_templates(config, &source, cli_version).await?;

    // Step 2: Questionnaire
    let mut prompts = CliclackPrompts;
    let project = questions::run_questionnaire(&mut prompts)?;

    // Step 3: Summary and final confirmation
    cliclack::note("Project Configuration", summary_lines(&project).join("\n"))?;
    let confirmed = args.yes || questions::confirm_generation(&mut prompts, &project)?;
    if !confirmed {
        cliclack::outro_cancel("Project generation cancelled.")?;
        return Ok(());
    }

    // Step 4: Decide what to do with an existing directory
    let parent_dir = parent_directory(&args)?;
    let policy = existing_dir_policy(&parent_dir, &project, &args).await?;

    // Step 5: Generate
    let report = create_project(&source, &project, &parent_dir, policy).await?;

    // Step 6: Show next steps
    print_next_steps(config, &report, &project)?;

    Ok(())
}

async fn check_templates<C: ProductConfig>(
    config: &C,
    source: &TemplateSource,
    cli_version: &str,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Loading templates...");

    let manifest = match source.load_manifest().await {
        Ok(manifest) => manifest,
        Err(e) => {
            spinner.stop("Failed to load templates");
            return Err(e).with_context(|| format!("Unusable {}", source.describe()));
        }
    };

    spinner.stop(format!(
        "Templates: {} - {} ({})",
        manifest.name,
        manifest.description,
        source.describe()
    ));

    if let Some(warning) =
        check_compatibility(cli_version, &manifest.version, config.upgrade_command())
    {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn parent_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Parent directory does not exist: {}", path.display());
    }

    Ok(path)
}

async fn existing_dir_policy(
    parent_dir: &Path,
    project: &ProjectConfig,
    args: &CreateArgs,
) -> Result<ExistingDirPolicy> {
    let project_dir = templates::project_dir(parent_dir, project)?;
    let count = existing_entries(&project_dir)
        .await
        .with_context(|| format!("Failed to inspect {}", project_dir.display()))?;

    if count == 0 {
        return Ok(ExistingDirPolicy::Abort);
    }

    cliclack::log::warning(format!(
        "Directory {} has {} existing items",
        project_dir.display(),
        count
    ))?;

    // Auto-confirm with --yes flag
    let overwrite = if args.yes {
        true
    } else {
        cliclack::confirm("Overwrite existing files?")
            .initial_value(false)
            .interact()?
    };

    if !overwrite {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(ExistingDirPolicy::Overwrite)
}

async fn create_project(
    source: &TemplateSource,
    project: &ProjectConfig,
    parent_dir: &Path,
    policy: ExistingDirPolicy,
) -> Result<GenerationReport> {
    let spinner = cliclack::spinner();
    spinner.start("Generating your Solana project...");

    let options = GenerateOptions::default().with_existing_dir(policy);
    let report = match templates::generate_project(source, project, parent_dir, &options).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Project generation failed");
            return Err(e.into());
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.succeeded().len(),
        report.project_dir.display()
    ));

    for outcome in &report.files {
        if outcome.is_success() {
            cliclack::log::success(format!("Generated {}", outcome.path))?;
        }
    }
    for (path, reason) in report.failures() {
        cliclack::log::error(format!("Failed to generate {}: {}", path, reason))?;
    }

    Ok(report)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    report: &GenerationReport,
    project: &ProjectConfig,
) -> Result<()> {
    let steps = config.next_steps(&report.project_dir, project);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}  {}", format!("{}.", i + 1).dimmed(), step.cyan());
    }

    println!();
    println!("  Docs: {}", config.docs_url().underline());

    if report.is_complete() {
        cliclack::outro("Happy coding!")?;
    } else {
        cliclack::outro(format!(
            "Project created with {} failed file(s); see the errors above.",
            report.failed().len()
        ))?;
    }

    Ok(())
}
