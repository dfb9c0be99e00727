mod output;
mod root;

use anyhow::Context;
use clap::Parser;
use output::{print_json, render_text, OutputFormat};
use root::ProjectRoot;
use std::path::PathBuf;
use testgates_core::{DiscoveryResult, TestgatesError};

/// Exit status when no epics document can be located.
const EXIT_NOT_FOUND: i32 = 1;
/// Exit status for any other failure (unreadable document, bad output).
const EXIT_FAILURE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "testgates",
    about = "Discover test gates from project documentation (epics.md)",
    version
)]
struct Cli {
    /// Project root to search for epics.md (default: auto-detect from cwd)
    #[arg(env = "TESTGATES_ROOT")]
    project_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Current story key, used to pick the next test gate
    #[arg(long, env = "TESTGATES_STORY")]
    story: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.project_root.as_deref());
    tracing::debug!(root = %root.dir().display(), "resolved project root");

    let code = match run(&root, cli.story.as_deref(), cli.format) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run(root: &ProjectRoot, story: Option<&str>, format: OutputFormat) -> anyhow::Result<i32> {
    let result = match root.discover(story) {
        Ok(result) => result,
        Err(TestgatesError::EpicsNotFound { root }) => {
            tracing::debug!(root = %root.display(), "no epics document found");
            DiscoveryResult::not_found()
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to discover test gates in {}", root.dir().display())
            });
        }
    };

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text if result.is_error() => {
            eprintln!("Error: epics.md not found in project")
        }
        OutputFormat::Text => print!("{}", render_text(&result)),
    }
    Ok(if result.is_error() { EXIT_NOT_FOUND } else { 0 })
}
