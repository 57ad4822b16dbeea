//! Meteen CLI - browse the backend and manage its data from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Full menu, optionally filtered
//! meteen-cli menu --category Drink --search teh
//!
//! # Home page preview
//! meteen-cli featured
//!
//! # Team roster and one member
//! meteen-cli team
//! meteen-cli member 6f1c2a4e-8d1b-4c55-9a43-0a3b5e7d9f10
//!
//! # Send a contact message
//! meteen-cli contact --name Budi --email budi@example.com --message "Halo"
//!
//! # Load menu items and team members from YAML
//! meteen-cli seed data/seed.yaml
//! ```
//!
//! Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the environment or `.env`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use meteen_core::MenuCategory;
use meteen_site::config::SupabaseConfig;
use meteen_site::supabase::{DataSource, SupabaseClient};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "meteen-cli")]
#[command(author, version, about = "Meteen restaurant CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu, grouped by category
    Menu {
        /// Only show this category (`All`, `Main`, `Grill`, `Snack`, `Drink`, `Dessert`)
        #[arg(short, long, default_value = "All")]
        category: MenuCategory,

        /// Case-insensitive text matched against name and description
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show the featured preview from the home page
    Featured,
    /// List the team in display order
    Team,
    /// Show one team member
    Member {
        /// Member id (UUID)
        id: String,
    },
    /// Send a contact message
    Contact {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(short, long)]
        message: String,
    },
    /// Insert menu items and team members from a YAML file
    Seed {
        /// Path to the seed file
        file: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meteen_cli=info,meteen_site=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = SupabaseConfig::from_env()?;
    let source: Arc<dyn DataSource> = Arc::new(SupabaseClient::new(&config)?);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Menu { category, search } => {
            commands::browse::menu(source, category, &search, &mut out).await?;
        }
        Commands::Featured => commands::browse::featured(source, &mut out).await?,
        Commands::Team => commands::browse::team(source, &mut out).await?,
        Commands::Member { id } => commands::browse::member(source, &id, &mut out).await?,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let submission = meteen_site::services::ContactSubmission {
                name,
                email,
                subject,
                message,
            };
            commands::contact::send(source, &submission, &mut out).await?;
        }
        Commands::Seed { file } => commands::seed::from_file(source.as_ref(), &file).await?,
    }
    Ok(())
}
