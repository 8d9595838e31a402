mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod model;
mod session;
mod ui;

use crate::config::{Config, get_config_path, resolve_environment};
use crate::consts::cli_consts::{API_URL_ENV_VAR, LOG_FILE_NAME};
use crate::environment::Environment;
use crate::logging::LogSink;
use crate::model::ExpenseId;
use crate::session::{HeadlessCommand, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, long_about = None)]
/// Command-line arguments
struct Args {
    /// Backend base URL, e.g. http://localhost:8000/api. Overrides the saved URL.
    #[arg(long, global = true, env = API_URL_ENV_VAR, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive expense dashboard
    Start {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print every recorded expense
    List,
    /// Record a new expense
    Add {
        #[arg(long)]
        description: String,
        /// Amount, e.g. 12.5
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Date formatted as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Delete an expense by id
    Delete {
        #[arg(long, value_name = "ID")]
        id: ExpenseId,
    },
    /// Predict budgets from feature rows
    Predict {
        /// Rows separated by ';', values by ',', e.g. "1.0,2.0;3.0,4.0"
        #[arg(long, allow_hyphen_values = true)]
        features: String,
    },
    /// Train the prediction model with the built-in example data
    Train,
    /// Save the backend base URL to the config file
    SetApiUrl {
        /// `local` or an http(s) URL
        url: String,
    },
    /// Remove the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    let sink = match args.command {
        Command::Start { .. } => LogSink::File(config_path.with_file_name(LOG_FILE_NAME)),
        _ => LogSink::Stderr,
    };
    if let Err(e) = logging::init(sink) {
        print_cmd_warn!("Logging disabled", "{}", e);
    }

    let headless = match args.command {
        Command::SetApiUrl { url } => {
            let environment = url.parse::<Environment>()?;
            Config::new(Some(environment.api_url()))
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Backend saved",
                "{} ({})",
                environment.api_url(),
                config_path.display()
            );
            return Ok(());
        }
        Command::Reset => {
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "{}", config_path.display());
            return Ok(());
        }
        Command::Start { with_background } => {
            let environment = resolve_environment(args.api_url.as_deref(), &config_path)?;
            let session = setup_session(environment)?;
            return run_tui_mode(session, with_background).await;
        }
        Command::List => HeadlessCommand::List,
        Command::Add {
            description,
            amount,
            date,
        } => HeadlessCommand::Add {
            description,
            amount,
            date,
        },
        Command::Delete { id } => HeadlessCommand::Delete { id },
        Command::Predict { features } => HeadlessCommand::Predict { features },
        Command::Train => HeadlessCommand::Train,
    };

    let environment = resolve_environment(args.api_url.as_deref(), &config_path)?;
    let session = setup_session(environment)?;
    run_headless_mode(session, headless).await
}
