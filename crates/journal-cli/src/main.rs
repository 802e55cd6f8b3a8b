mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use journal_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("STDOUT_JOURNAL_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "stdout-journal",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let ctx = CliContext::load(cli.config.as_deref());

    match cli.command {
        None => {
            let mut app = App::new(ctx.config, ctx.source);
            app.run().await?;
        }
        Some(Commands::Posts(args)) => handlers::posts::handle_posts(&ctx, args)?,
        Some(Commands::Show { id }) => handlers::posts::handle_show(&ctx, id)?,
        Some(Commands::Window(args)) => handlers::pages::handle_window(args)?,
        Some(Commands::About) => handlers::info::handle_about()?,
        Some(Commands::Contact) => handlers::info::handle_contact()?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
