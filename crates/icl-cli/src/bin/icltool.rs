use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use icl_cli::commands;
use icl_cli::trace_init;

#[derive(Parser)]
#[command(name = "icltool", about = "Intent controlled-language composer")]
struct Cli {
    /// Base URL of the Intent services
    #[arg(long, default_value = "http://localhost:8000")]
    url: String,

    /// Authorization token for an authenticated session
    #[arg(long)]
    token: Option<String>,

    /// Directory for the JSONL trace log (trace builds only)
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose an Intent interactively with live suggestions
    Compose {
        /// Starting draft text
        #[arg(long, default_value = "For ")]
        initial: String,
        /// Update this stored Intent instead of creating a new one
        #[arg(long)]
        update: Option<u64>,
    },

    /// Grade a single string against the parser
    Check {
        text: String,
        /// Output the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored Intents
    List,

    /// Show one stored Intent
    Show { id: u64 },

    /// Store a new Intent without the composer
    Create { text: String },

    /// Replace a stored Intent's text
    Update { id: u64, text: String },

    /// Delete a stored Intent
    Delete { id: u64 },
}

fn main() {
    let cli = Cli::parse();
    trace_init::init_tracing(&cli.log_dir);

    let url = cli.url.trim_end_matches('/').to_string();
    let token = cli.token;

    let outcome = match cli.command {
        Command::Compose { initial, update } => {
            commands::run_compose(&url, token, &initial, update)
                .map_err(|e| e.to_string())
        }
        Command::Check { text, json } => {
            commands::run_check(&url, token, &text, json);
            Ok(())
        }
        Command::List => commands::run_list(&url, token).map_err(|e| e.to_string()),
        Command::Show { id } => commands::run_show(&url, token, id).map_err(|e| e.to_string()),
        Command::Create { text } => {
            commands::run_create(&url, token, &text).map_err(|e| e.to_string())
        }
        Command::Update { id, text } => {
            commands::run_update(&url, token, id, &text).map_err(|e| e.to_string())
        }
        Command::Delete { id } => commands::run_delete(&url, token, id).map_err(|e| e.to_string()),
    };

    if let Err(err) = outcome {
        eprintln!("icltool: {err}");
        process::exit(1);
    }
}
