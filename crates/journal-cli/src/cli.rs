use clap::{Args, Parser, Subcommand};
use journal_core::DEFAULT_MAX_DIRECT;
use journal_domain::PostId;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(name = "stdout-journal")]
#[command(about = "A terminal-inspired blog", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Path to config file (or set STDOUT_JOURNAL_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "STDOUT_JOURNAL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of posts
    Posts(PostsArgs),
    /// Show a full post
    Show {
        #[arg(long)]
        id: PostId,
    },
    /// Compute pagination markers
    Window(WindowArgs),
    /// Show the About page
    About,
    /// Show the Contact page
    Contact,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct PostsArgs {
    /// 1-based page number; out-of-range pages are clamped
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Posts per page (defaults to the configured value)
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Args)]
pub struct WindowArgs {
    #[arg(long)]
    pub active: usize,
    #[arg(long)]
    pub total: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_DIRECT)]
    pub max_direct: usize,
}
