//! IntraSphere CLI - Seeding and intern management tools.
//!
//! The founder-admin record is created out-of-band rather than through the
//! portal; this binary is that band.
//!
//! # Usage
//!
//! ```bash
//! # Seed the founder-admin record
//! intrasphere admin create --name "Ana"
//!
//! # Manage interns from the terminal
//! intrasphere intern add --name "Priya"
//! intrasphere intern list
//! intrasphere intern remove --id <uuid>
//! ```
//!
//! Connection configuration comes from the environment (`PORTAL_DATA_URL`,
//! `PORTAL_DATA_API_KEY`), with `.env` loaded if present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use intrasphere_core::InternId;

mod commands;

#[derive(Parser)]
#[command(name = "intrasphere")]
#[command(author, version, about = "IntraSphere CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the founder-admin record
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Manage interns
    Intern {
        #[command(subcommand)]
        action: InternAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Seed the founder-admin record
    Create {
        /// Admin display name (used to log in)
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum InternAction {
    /// Add an intern to the directory
    Add {
        /// Intern display name (used to log in)
        #[arg(short, long)]
        name: String,
    },
    /// Remove an intern (their tasks are cleaned up too)
    Remove {
        /// Intern id
        #[arg(short, long)]
        id: InternId,
    },
    /// List all interns
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Create { name } => commands::admin::create(&name).await?,
        },
        Commands::Intern { action } => match action {
            InternAction::Add { name } => commands::intern::add(&name).await?,
            InternAction::Remove { id } => commands::intern::remove(id).await?,
            InternAction::List => commands::intern::list().await?,
        },
    }
    Ok(())
}
