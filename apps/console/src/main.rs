use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::HttpSolverClient;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod shell;
mod text;

use commands::parse_command;
use config::{load_settings, DEFAULT_CONFIG_FILE};
use shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "timetable-console", about = "Enter teachers, rooms and classes, then request a weekly timetable")]
struct Args {
    /// Solver endpoint; overrides config file and environment.
    #[arg(long)]
    solver_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(url) = args.solver_url {
        settings.solver_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let solver = HttpSolverClient::with_timeout(&settings.solver_url, settings.request_timeout())
        .with_context(|| format!("failed to set up solver client for {}", settings.solver_url))?;
    info!(solver_url = %solver.solver_url(), "timetable console ready");

    let input: Box<dyn AsyncRead + Unpin + Send> = match &args.script {
        Some(path) => Box::new(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open script '{}'", path.display()))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };

    let mut shell = Shell::new(Box::new(solver));
    print!("{}", shell.execute(commands::Command::Show).await.text);

    let mut lines = BufReader::new(input).lines();
    while let Some(line) = lines.next_line().await.context("failed to read command")? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("! {err}");
                continue;
            }
        };
        let output = shell.execute(command).await;
        print!("{}", output.text);
        if output.quit {
            break;
        }
    }

    info!(
        teachers = shell.console().store().teachers().len(),
        rooms = shell.console().store().rooms().len(),
        classes = shell.console().store().classes().len(),
        "session ended"
    );
    Ok(())
}
