//! Tradequote CLI - job quotes in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{auth, describe, export, margin, new, row, show};

/// Tradequote - job quotes in your terminal
#[derive(Parser)]
#[command(name = "tq", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Your name or business name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in to an existing account
    Login {
        /// Email address
        email: Option<String>,
    },

    /// Log out
    Logout,

    /// Show the logged-in account
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a new quote
    New {
        /// Client name
        #[arg(long)]
        client: Option<String>,
        /// Client email
        #[arg(long)]
        client_email: Option<String>,
        /// Job description
        #[arg(long)]
        description: Option<String>,
        /// Replace an existing quote without confirmation
        #[arg(long, short)]
        force: bool,
    },

    /// Set the job description
    Describe {
        /// Description text
        text: String,
        /// Append instead of replacing
        #[arg(long)]
        append: bool,
    },

    /// Dictate onto the job description
    Dictate,

    /// Manage quote rows
    Row {
        #[command(subcommand)]
        command: row::RowCommands,
    },

    /// Set the margin percentage
    Margin {
        /// Margin percent (unparsable input is treated as 0)
        value: String,
    },

    /// Show the current quote and totals
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the current quote
    Export {
        #[command(subcommand)]
        command: export::ExportCommands,
    },

    /// List available speech voices
    Voices {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { name, email } => auth::register(name, email),
        Commands::Login { email } => auth::login(email),
        Commands::Logout => auth::logout(),
        Commands::Whoami { json } => auth::whoami(json),
        Commands::New {
            client,
            client_email,
            description,
            force,
        } => new::run(client, client_email, description, force),
        Commands::Describe { text, append } => describe::run(&text, append),
        Commands::Dictate => describe::dictate(),
        Commands::Row { command } => row::run(command),
        Commands::Margin { value } => margin::run(&value),
        Commands::Show { json } => show::run(json),
        Commands::Export { command } => export::run(command),
        Commands::Voices { json } => export::voices(json),
    }
}
