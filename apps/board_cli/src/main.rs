use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use board::{ActivityBoard, MutationOutcome, Page};
use clap::{Parser, Subcommand};
use client_core::ActivitiesClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, normalize_server_url};

#[derive(Parser, Debug)]
#[command(about = "Browse activities and manage sign-ups")]
struct Args {
    /// Activities server, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    server_url: Option<String>,
    /// Config file; defaults to ./board.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the page as HTML instead of a text summary.
    #[arg(long, global = true)]
    html: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and print the activity list.
    Show,
    /// Sign a student up for an activity.
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a participant from an activity.
    Remove {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = &args.server_url {
        settings.server_url = normalize_server_url(server_url)?;
    }

    let client = ActivitiesClient::new(&settings.server_url)
        .with_context(|| format!("failed to create client for {}", settings.server_url))?;
    let board = ActivityBoard::new(client, settings.board_settings());

    info!(server_url = %settings.server_url, "loading activities");
    board.refresh().await;

    let outcome = match args.command {
        Command::Show => None,
        Command::Signup { activity, email } => {
            board.fill_form(&activity, &email).await;
            Some(board.submit_signup().await)
        }
        Command::Remove { activity, email } => {
            let control = board
                .page()
                .await
                .find_removal_control(&activity, &email)
                .cloned();
            // Rosters past the visible limit have no control to click.
            let outcome = match control {
                Some(control) => board.dispatch_click(&control).await,
                None => board.remove_participant(&activity, &email).await,
            };
            Some(outcome)
        }
    };

    let page = board.page().await;
    print_page(&page, args.html);
    Ok(exit_code(&page, outcome))
}

fn print_page(page: &Page, html: bool) {
    if html {
        println!("{}", page.to_html());
    } else {
        print!("{}", page.text_summary());
    }
}

fn exit_code(page: &Page, outcome: Option<MutationOutcome>) -> ExitCode {
    match outcome {
        Some(outcome) if !outcome.is_applied() => ExitCode::FAILURE,
        _ if page.load_failed() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
