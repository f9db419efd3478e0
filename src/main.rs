use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use git_pin::cli::{run_pin_workflow, PinWorkflowArgs};
use git_pin::config;
use git_pin::domain::ensure_tag_trigger;
use git_pin::git::Git2Repository;
use git_pin::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-pin",
    version,
    about = "Keep floating major and minor release tags on the latest release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long = "ref",
        env = "GITHUB_REF",
        help = "Ref that triggered the run (must be refs/tags/...)"
    )]
    git_ref: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(long, help = "Remote to fetch tags from and push aliases to")]
    remote: Option<String>,

    #[arg(long, help = "Preview alias changes without writing or pushing tags")]
    dry_run: bool,

    #[arg(long, help = "Log filter, e.g. debug or git_pin=trace")]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    if let Err(e) = run(args) {
        ui::display_failure(&format!("{:#}", e), ui::is_github_actions());
        std::process::exit(1);
    }
}

fn init_logging(level: Option<&str>) {
    let default_level = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_new(level.unwrap_or(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    // Non-tag triggers fail before config is read or the repository is opened
    ensure_tag_trigger(args.git_ref.as_deref())?;

    let mut config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    config.apply_env_inputs();
    if let Some(remote) = args.remote {
        config.remote.name = remote;
    }

    let repo = Git2Repository::open(&args.repo).with_context(|| {
        format!("Not in a git repository: {}", args.repo.display())
    })?;

    let workflow_args = PinWorkflowArgs {
        trigger_ref: args.git_ref,
        dry_run: args.dry_run,
    };
    let result = run_pin_workflow(&repo, &workflow_args, &config)?;

    if result.latest_tag.is_some() {
        ui::display_success(&format!(
            "Pinned release aliases ({} changed)",
            result.mutation_count()
        ));
    }
    Ok(())
}
