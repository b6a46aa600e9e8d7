//! create-soldexer-pipe - Interactive scaffolding for Solana projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use soldexer_core::tui::CreateArgs;
use soldexer_core::{Framework, ProductConfig, ProjectConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log directives used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "create_soldexer_pipe=warn,soldexer_core=error";

/// Soldexer product configuration
#[derive(Clone)]
pub struct SoldexerConfig;

impl ProductConfig for SoldexerConfig {
    fn name(&self) -> &'static str {
        "create-soldexer-pipe"
    }

    fn display_name(&self) -> &'static str {
        "Solana Project Generator"
    }

    fn template_dir_env(&self) -> &'static str {
        "SOLDEXER_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://docs.solana.com"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-soldexer-pipe --force"
    }

    fn next_steps(&self, dir: &Path, project: &ProjectConfig) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", display_dir(dir, current.as_deref()).display()));
        }

        // Step 2: Install dependencies
        steps.push("npm install".to_string());

        // Step 3: Build and test with the framework's toolchain
        match project.framework {
            Framework::Anchor => {
                steps.push("anchor build".to_string());
                steps.push("anchor test".to_string());
            }
            Framework::Native | Framework::Spl => {
                steps.push("npm run build".to_string());
                if project.features.testing {
                    steps.push("npm test".to_string());
                }
            }
        }

        steps
    }
}

/// Path relative to `current` when the project lives below it
fn display_dir<'a>(dir: &'a Path, current: Option<&Path>) -> &'a Path {
    current
        .and_then(|current| dir.strip_prefix(current).ok())
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(dir)
}

#[derive(Parser, Debug)]
#[command(name = "create-soldexer-pipe")]
#[command(about = "CLI for scaffolding Solana projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Solana project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Local directory to use for templates instead of the built-in set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Parent directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Auto-confirm generation and overwriting of an existing project directory
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            yes: args.yes,
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let config = SoldexerConfig;

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to create behavior (interactive mode)
        None => CreateArgs::default(),
    };

    let result = soldexer_core::run(&config, create_args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = &result {
        tracing::warn!(error = %e, "scaffolding did not complete");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use soldexer_core::{Features, Network, ProjectType};

    fn project(framework: Framework, testing: bool) -> ProjectConfig {
        ProjectConfig {
            project_name: "demo".to_string(),
            project_description: "A Solana project".to_string(),
            author: "Developer".to_string(),
            project_type: ProjectType::General,
            framework,
            network: Network::Devnet,
            instructions: None,
            token_balances: None,
            features: Features {
                testing,
                ..Features::default()
            },
        }
    }

    #[test]
    fn test_anchor_next_steps() {
        let dir = Path::new("/nonexistent/parent/demo");
        let steps = SoldexerConfig.next_steps(dir, &project(Framework::Anchor, false));
        assert_eq!(
            steps,
            vec![
                "cd /nonexistent/parent/demo",
                "npm install",
                "anchor build",
                "anchor test"
            ]
        );
    }

    #[test]
    fn test_native_next_steps_skip_tests_when_disabled() {
        let dir = Path::new("/nonexistent/parent/demo");
        let steps = SoldexerConfig.next_steps(dir, &project(Framework::Native, false));
        assert_eq!(steps.last().map(String::as_str), Some("npm run build"));

        let steps = SoldexerConfig.next_steps(dir, &project(Framework::Native, true));
        assert_eq!(steps.last().map(String::as_str), Some("npm test"));
    }

    #[test]
    fn test_display_dir_is_relative_below_cwd() {
        let current = Path::new("/work");
        assert_eq!(
            display_dir(Path::new("/work/demo"), Some(current)),
            Path::new("demo")
        );
        assert_eq!(
            display_dir(Path::new("/elsewhere/demo"), Some(current)),
            Path::new("/elsewhere/demo")
        );
    }

    #[test]
    fn test_create_subcommand_parses() {
        let args = Args::parse_from([
            "create-soldexer-pipe",
            "create",
            "--directory",
            "out",
            "--yes",
        ]);
        match args.command {
            Some(Command::Create(create)) => {
                assert_eq!(create.directory, Some(PathBuf::from("out")));
                assert!(create.yes);
                assert!(create.template_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let args = Args::parse_from(["create-soldexer-pipe"]);
        assert!(args.command.is_none());
    }
}
