mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn init_logging(interactive: bool) -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("STOREFRONT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if interactive {
        // stderr shares the screen with the pager
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "storefront", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Paginate(args) => handlers::paginate::handle(&ctx, args),
        Commands::Query(args) => handlers::query::handle(&ctx, args),
        Commands::Browse(args) => handlers::browse::handle(&ctx, args),
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(matches!(cli.command, Commands::Browse(_)))?;

    if let Err(e) = run(cli) {
        tracing::debug!("command failed: {:#}", e);
        output::output_error(&e.to_string());
    }
    Ok(())
}
